use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::TimerPhase;

/// Every state change in the system produces an Event.
/// The display layer polls for events; the CLI prints them as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        total_seconds: u64,
        at: DateTime<Utc>,
    },
    TimerTick {
        remaining_seconds: u64,
        at: DateTime<Utc>,
    },
    /// Raised exactly once, when the countdown reaches zero from a
    /// running state. The alarm stays active until explicitly dismissed.
    TimerFinished {
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_seconds: u64,
        at: DateTime<Utc>,
    },
    TimerStopped {
        at: DateTime<Utc>,
    },
    AlarmDismissed {
        at: DateTime<Utc>,
    },
    /// A widget release was classified as a tap; front ends open the
    /// main timer view in response.
    WidgetActivated {
        at: DateTime<Utc>,
    },
    /// The widget came to rest against a screen edge after a release.
    WidgetSnapped {
        x: f32,
        y: f32,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        phase: TimerPhase,
        remaining_seconds: u64,
        running: bool,
        alarm_active: bool,
        clock: String,
        at: DateTime<Utc>,
    },
}
