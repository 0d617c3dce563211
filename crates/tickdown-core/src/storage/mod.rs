mod config;
mod state;

pub use config::{Config, NotificationsConfig, TimerConfig, WidgetConfig};
pub use state::{load_state, save_state};

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/tickdown[-dev]/` based on TICKDOWN_ENV.
///
/// Set TICKDOWN_ENV=dev to use a separate development data directory.
///
/// # Errors
/// Returns an error if the config directory cannot be created.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("TICKDOWN_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("tickdown-dev")
    } else {
        base_dir.join("tickdown")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
