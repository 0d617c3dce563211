//! Catalog of the native permissions a production build would need.
//!
//! The core issues no platform requests itself; a real overlay widget and
//! background alarm depend on these being granted by an outer shell. The
//! catalog is pure data surfaced by the settings/CLI layer.

use serde::Serialize;

/// Grant state as presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionStatus {
    Granted,
    Denied,
    Required,
}

/// One native permission the full app depends on.
#[derive(Debug, Clone, Serialize)]
pub struct PermissionInfo {
    /// Platform identifier, e.g. `SYSTEM_ALERT_WINDOW`.
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub status: PermissionStatus,
}

/// The permissions required for full functionality, in display order.
pub fn required_permissions() -> Vec<PermissionInfo> {
    vec![
        PermissionInfo {
            name: "SYSTEM_ALERT_WINDOW",
            title: "Draw Over Other Apps",
            description: "Allows the floating widget to stay visible over other apps",
            status: PermissionStatus::Required,
        },
        PermissionInfo {
            name: "REQUEST_IGNORE_BATTERY_OPTIMIZATIONS",
            title: "Ignore Battery Optimization",
            description: "Prevents the OS from killing the background timer service",
            status: PermissionStatus::Required,
        },
        PermissionInfo {
            name: "WAKE_LOCK",
            title: "Wake Lock",
            description: "Allows the alarm to wake the screen while the device is locked",
            status: PermissionStatus::Required,
        },
        PermissionInfo {
            name: "FOREGROUND_SERVICE",
            title: "Foreground Service",
            description: "Keeps the countdown running in the background with a persistent notification",
            status: PermissionStatus::Required,
        },
    ]
}
