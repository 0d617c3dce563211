//! TOML-based application configuration.
//!
//! Stores user preferences:
//! - Default timer duration used when none is given
//! - Notification preferences (surfaced to the alert channel; the core
//!   plays no audio itself)
//! - Simulated screen bounds the widget snaps against
//!
//! Configuration is stored at `~/.config/tickdown/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::ConfigError;

/// Default-duration configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    #[serde(default = "default_minutes")]
    pub default_minutes: u64,
    #[serde(default)]
    pub default_seconds: u64,
}

/// Notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_volume")]
    pub volume: u32,
    #[serde(default = "default_true")]
    pub vibration: bool,
}

/// Widget/screen configuration used by the gesture simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    #[serde(default = "default_screen_width")]
    pub screen_width: f32,
    #[serde(default = "default_screen_height")]
    pub screen_height: f32,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/tickdown/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub widget: WidgetConfig,
}

fn default_minutes() -> u64 {
    5
}
fn default_true() -> bool {
    true
}
fn default_volume() -> u32 {
    50
}
fn default_screen_width() -> f32 {
    360.0
}
fn default_screen_height() -> f32 {
    800.0
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            default_minutes: default_minutes(),
            default_seconds: 0,
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: default_volume(),
            vibration: true,
        }
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            screen_width: default_screen_width(),
            screen_height: default_screen_height(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk, writing (and returning) the defaults when the file
    /// does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing config file cannot be parsed, or if
    /// the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            let cfg = Self::default();
            cfg.save_to(&path)?;
            Ok(cfg)
        }
    }

    /// Load from disk, returning defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub(crate) fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    pub(crate) fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        match current {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key and persist the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed
    /// as the existing field's type, or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json =
            serde_json::to_value(&*self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        set_by_path(&mut json, key, value)?;
        *self =
            serde_json::from_value(json).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        self.save()
    }
}

fn set_by_path(root: &mut serde_json::Value, key: &str, value: &str) -> Result<(), ConfigError> {
    let unknown = || ConfigError::UnknownKey(key.to_string());
    let invalid = |message: String| ConfigError::InvalidValue {
        key: key.to_string(),
        message,
    };

    let (parents, leaf) = match key.rsplit_once('.') {
        Some((parents, leaf)) => (parents, leaf),
        None => return Err(unknown()),
    };
    let mut current = root;
    for part in parents.split('.') {
        current = current.get_mut(part).ok_or_else(unknown)?;
    }
    let obj = current.as_object_mut().ok_or_else(unknown)?;
    let existing = obj.get(leaf).ok_or_else(unknown)?;

    // Coerce the string to the type of the field it replaces.
    let new_value = match existing {
        serde_json::Value::Bool(_) => serde_json::Value::Bool(
            value
                .parse::<bool>()
                .map_err(|_| invalid(format!("cannot parse '{value}' as bool")))?,
        ),
        serde_json::Value::Number(_) => {
            if let Ok(n) = value.parse::<u64>() {
                serde_json::Value::Number(n.into())
            } else if let Ok(n) = value.parse::<f64>() {
                serde_json::Number::from_f64(n)
                    .map(serde_json::Value::Number)
                    .ok_or_else(|| invalid(format!("cannot parse '{value}' as number")))?
            } else {
                return Err(invalid(format!("cannot parse '{value}' as number")));
            }
        }
        _ => serde_json::Value::String(value.into()),
    };
    obj.insert(leaf.to_string(), new_value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.timer.default_minutes, 5);
        assert_eq!(parsed.notifications.volume, 50);
        assert_eq!(parsed.widget.screen_width, 360.0);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("timer.default_minutes").as_deref(), Some("5"));
        assert_eq!(cfg.get("notifications.enabled").as_deref(), Some("true"));
        assert!(cfg.get("timer.missing_key").is_none());
    }

    #[test]
    fn set_by_path_updates_nested_number() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        set_by_path(&mut json, "notifications.volume", "75").unwrap();
        assert_eq!(json["notifications"]["volume"], serde_json::json!(75));
    }

    #[test]
    fn set_by_path_updates_nested_bool() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        set_by_path(&mut json, "notifications.vibration", "false").unwrap();
        assert_eq!(json["notifications"]["vibration"], serde_json::json!(false));
    }

    #[test]
    fn set_by_path_rejects_unknown_key() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        assert!(set_by_path(&mut json, "timer.nonexistent", "1").is_err());
        assert!(set_by_path(&mut json, "toplevel", "1").is_err());
    }

    #[test]
    fn set_by_path_rejects_invalid_type() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        let result = set_by_path(&mut json, "notifications.enabled", "not_a_bool");
        assert!(result.is_err());
    }

    #[test]
    fn file_roundtrip_in_tempdir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut cfg = Config::default();
        cfg.timer.default_minutes = 12;
        cfg.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.timer.default_minutes, 12);
    }

    #[test]
    fn load_from_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not = [valid").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ParseFailed(_))
        ));
    }
}
