//! JSON state files persisted between CLI invocations.
//!
//! The engine and widget survive across processes as small JSON documents
//! in the data directory, named by component (`timer.json`, `widget.json`).

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::data_dir;
use crate::error::Result;

/// Load a persisted component state, or `None` if absent or unreadable.
pub fn load_state<T: DeserializeOwned>(name: &str) -> Option<T> {
    let path = data_dir().ok()?.join(name);
    let json = std::fs::read_to_string(&path).ok()?;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("discarding corrupt state file {}: {e}", path.display());
            None
        }
    }
}

/// Persist a component state as pretty-printed JSON.
pub fn save_state<T: Serialize>(name: &str, value: &T) -> Result<()> {
    let path = data_dir()?.join(name);
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(&path, json)?;
    Ok(())
}
