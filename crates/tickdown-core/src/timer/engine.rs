//! Timer engine implementation.
//!
//! The timer engine is a tick-driven state machine. It does not use
//! internal threads - the caller is responsible for calling `tick()` once
//! per elapsed second while the countdown is running.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> (Paused | Alarming) -> Idle
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new();
//! engine.start(90);
//! // Once per second while running:
//! engine.tick(); // Returns Some(Event::TimerFinished) on the final tick
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::format::format_clock;
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerPhase {
    Idle,
    Running,
    Paused,
    /// Countdown reached zero and the alarm has not been dismissed yet.
    Alarming,
}

/// Read-only snapshot consumed by the floating widget for its badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerDisplay {
    pub remaining_seconds: u64,
    pub running: bool,
}

/// Core timer engine.
///
/// Owns the countdown state exclusively. Every operation is total: calls
/// that are invalid for the current state are silent no-ops returning
/// `None` rather than errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimerEngine {
    /// Seconds left on the countdown. Counts down to zero, never below.
    remaining_seconds: u64,
    /// True only while the countdown is actively ticking.
    running: bool,
    /// True from the moment the countdown finishes until explicit dismissal.
    alarm_active: bool,
}

impl TimerEngine {
    /// Create a new engine in the `Idle` state.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn alarm_active(&self) -> bool {
        self.alarm_active
    }

    /// Derived phase. A running countdown reports `Running` even while the
    /// alarm flag is still set from an undismissed earlier finish.
    pub fn phase(&self) -> TimerPhase {
        if self.running {
            TimerPhase::Running
        } else if self.alarm_active {
            TimerPhase::Alarming
        } else if self.remaining_seconds > 0 {
            TimerPhase::Paused
        } else {
            TimerPhase::Idle
        }
    }

    /// Snapshot consumed by the widget badge.
    pub fn display(&self) -> TimerDisplay {
        TimerDisplay {
            remaining_seconds: self.remaining_seconds,
            running: self.running,
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            phase: self.phase(),
            remaining_seconds: self.remaining_seconds,
            running: self.running,
            alarm_active: self.alarm_active,
            clock: format_clock(self.remaining_seconds),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start (or restart) the countdown with a fresh duration.
    ///
    /// A zero duration is a silent no-op. Starting from `Paused` discards
    /// the paused remainder and uses the new duration (restart semantics,
    /// not resume). Starting while alarming is permitted and leaves the
    /// alarm flag set; dismissal is a separate operation.
    pub fn start(&mut self, total_seconds: u64) -> Option<Event> {
        if total_seconds == 0 {
            return None;
        }
        self.remaining_seconds = total_seconds;
        self.running = true;
        Some(Event::TimerStarted {
            total_seconds,
            at: Utc::now(),
        })
    }

    /// Pause the countdown, preserving the remaining time.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        Some(Event::TimerPaused {
            remaining_seconds: self.remaining_seconds,
            at: Utc::now(),
        })
    }

    /// Stop the countdown and clear the remaining time.
    ///
    /// Valid from any state. Does not clear the alarm flag; stop and
    /// dismiss are independent operations.
    pub fn stop(&mut self) -> Option<Event> {
        self.running = false;
        self.remaining_seconds = 0;
        Some(Event::TimerStopped { at: Utc::now() })
    }

    /// Advance the countdown by one second.
    ///
    /// Only meaningful while running. The tick that takes the countdown to
    /// zero also clears `running` and raises the alarm, so the caller's
    /// schedule must stop before the same invocation returns.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        if self.remaining_seconds <= 1 {
            self.remaining_seconds = 0;
            self.running = false;
            self.alarm_active = true;
            return Some(Event::TimerFinished { at: Utc::now() });
        }
        self.remaining_seconds -= 1;
        Some(Event::TimerTick {
            remaining_seconds: self.remaining_seconds,
            at: Utc::now(),
        })
    }

    /// Clear the alarm flag. No-op (and idempotent) when not alarming.
    pub fn dismiss_alarm(&mut self) -> Option<Event> {
        if !self.alarm_active {
            return None;
        }
        self.alarm_active = false;
        Some(Event::AlarmDismissed { at: Utc::now() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn start_sets_duration_and_runs() {
        let mut engine = TimerEngine::new();
        assert!(engine.start(90).is_some());
        assert_eq!(engine.remaining_seconds(), 90);
        assert!(engine.is_running());
        assert_eq!(engine.phase(), TimerPhase::Running);
    }

    #[test]
    fn start_with_zero_is_noop() {
        let mut engine = TimerEngine::new();
        assert!(engine.start(0).is_none());
        assert_eq!(engine.remaining_seconds(), 0);
        assert!(!engine.is_running());
        assert_eq!(engine.phase(), TimerPhase::Idle);
    }

    #[test]
    fn exact_tick_count_finishes() {
        let mut engine = TimerEngine::new();
        engine.start(5);
        let mut finished = 0;
        for _ in 0..5 {
            if let Some(Event::TimerFinished { .. }) = engine.tick() {
                finished += 1;
            }
        }
        assert_eq!(finished, 1);
        assert_eq!(engine.remaining_seconds(), 0);
        assert!(!engine.is_running());
        assert!(engine.alarm_active());
        assert_eq!(engine.phase(), TimerPhase::Alarming);
        // Tick schedule has stopped; further ticks are no-ops.
        assert!(engine.tick().is_none());
    }

    #[test]
    fn pause_preserves_remaining() {
        let mut engine = TimerEngine::new();
        engine.start(10);
        engine.tick();
        assert!(engine.pause().is_some());
        assert_eq!(engine.remaining_seconds(), 9);
        assert_eq!(engine.phase(), TimerPhase::Paused);
        assert!(engine.tick().is_none());
        assert_eq!(engine.remaining_seconds(), 9);
    }

    #[test]
    fn pause_while_idle_is_noop() {
        let mut engine = TimerEngine::new();
        assert!(engine.pause().is_none());
    }

    #[test]
    fn start_after_pause_restarts_with_new_duration() {
        let mut engine = TimerEngine::new();
        engine.start(100);
        engine.tick();
        engine.pause();
        assert!(engine.start(30).is_some());
        assert_eq!(engine.remaining_seconds(), 30);
        assert!(engine.is_running());
    }

    #[test]
    fn stop_clears_remaining_but_not_alarm() {
        let mut engine = TimerEngine::new();
        engine.start(1);
        engine.tick();
        assert!(engine.alarm_active());
        assert!(engine.stop().is_some());
        assert_eq!(engine.remaining_seconds(), 0);
        assert!(!engine.is_running());
        assert!(engine.alarm_active());
    }

    #[test]
    fn dismiss_alarm_is_idempotent() {
        let mut engine = TimerEngine::new();
        engine.start(1);
        engine.tick();
        assert!(engine.dismiss_alarm().is_some());
        assert!(!engine.alarm_active());
        assert!(engine.dismiss_alarm().is_none());
        assert!(!engine.alarm_active());
    }

    #[test]
    fn start_while_alarming_leaves_alarm_set() {
        let mut engine = TimerEngine::new();
        engine.start(1);
        engine.tick();
        assert_eq!(engine.phase(), TimerPhase::Alarming);
        assert!(engine.start(60).is_some());
        // The alarm flag survives a restart; callers must dismiss separately.
        assert!(engine.alarm_active());
        assert!(engine.is_running());
        assert_eq!(engine.phase(), TimerPhase::Running);
    }

    #[test]
    fn full_countdown_scenario() {
        let mut engine = TimerEngine::new();
        engine.start(125);
        assert_eq!(engine.remaining_seconds(), 125);
        assert!(engine.is_running());
        for _ in 0..125 {
            engine.tick();
        }
        assert_eq!(engine.remaining_seconds(), 0);
        assert!(!engine.is_running());
        assert!(engine.alarm_active());
        engine.dismiss_alarm();
        assert!(!engine.alarm_active());
        assert_eq!(engine.phase(), TimerPhase::Idle);
    }

    #[test]
    fn snapshot_reports_clock() {
        let mut engine = TimerEngine::new();
        engine.start(125);
        match engine.snapshot() {
            Event::StateSnapshot {
                phase,
                remaining_seconds,
                clock,
                ..
            } => {
                assert_eq!(phase, TimerPhase::Running);
                assert_eq!(remaining_seconds, 125);
                assert_eq!(clock, "02:05");
            }
            _ => panic!("Expected StateSnapshot"),
        }
    }

    proptest! {
        /// Remaining time never underflows, and finishing from a running
        /// state always lands on exactly zero with the alarm raised.
        #[test]
        fn ticks_never_underflow(total in 1u64..500, extra in 0u64..50) {
            let mut engine = TimerEngine::new();
            engine.start(total);
            for _ in 0..(total + extra) {
                engine.tick();
                prop_assert!(engine.remaining_seconds() <= total);
            }
            prop_assert_eq!(engine.remaining_seconds(), 0);
            prop_assert!(!engine.is_running());
            prop_assert!(engine.alarm_active());
        }

        /// Running and alarming are mutually exclusive along any countdown
        /// that starts from a clean engine.
        #[test]
        fn finish_clears_running_in_same_tick(total in 1u64..200) {
            let mut engine = TimerEngine::new();
            engine.start(total);
            for _ in 0..total {
                engine.tick();
                prop_assert!(!(engine.is_running() && engine.alarm_active()));
            }
        }
    }
}
