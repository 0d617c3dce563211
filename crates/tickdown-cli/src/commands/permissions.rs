use clap::Subcommand;
use tickdown_core::permissions::required_permissions;

#[derive(Subcommand)]
pub enum PermissionsAction {
    /// List the native permissions a production build would request
    List,
}

pub fn run(action: PermissionsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PermissionsAction::List => {
            let json = serde_json::to_string_pretty(&required_permissions())?;
            println!("{json}");
        }
    }
    Ok(())
}
