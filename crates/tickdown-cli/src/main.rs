use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tickdown", version, about = "Tickdown countdown timer CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Timer control
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Floating widget simulation
    Widget {
        #[command(subcommand)]
        action: commands::widget::WidgetAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Native permission catalog
    Permissions {
        #[command(subcommand)]
        action: commands::permissions::PermissionsAction,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Widget { action } => commands::widget::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Permissions { action } => commands::permissions::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
