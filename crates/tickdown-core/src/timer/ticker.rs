//! Async tick driver for the timer engine.
//!
//! The engine itself is tick-driven and thread-free; this module supplies
//! the one-second schedule. The driver owns the engine for the duration of
//! a run (single-writer discipline) and serializes external mutations
//! through a command channel, so no tick can fire after the countdown has
//! stopped running.

use std::time::Duration;

use log::debug;
use tokio::sync::mpsc;
use tokio::time::interval;

use super::engine::TimerEngine;
use crate::events::Event;

/// Mutation requests accepted while the ticker is driving the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    Pause,
    Stop,
    DismissAlarm,
}

/// Drive the engine on a one-second cadence until it stops running.
///
/// Returns as soon as `running` becomes false, whether through the final
/// tick, a `Pause`, or a `Stop`. The pending schedule is dropped with the
/// interval on return, so a cancelled countdown can never receive a stale
/// tick. Each effective transition is passed to `on_event`.
pub async fn run_ticker(
    engine: &mut TimerEngine,
    mut commands: mpsc::Receiver<TimerCommand>,
    mut on_event: impl FnMut(&Event),
) {
    if !engine.is_running() {
        return;
    }
    let mut ticks = interval(Duration::from_secs(1));
    // The first interval tick completes immediately; consume it so the
    // first decrement lands a full second after start.
    ticks.tick().await;

    let mut commands_open = true;
    loop {
        tokio::select! {
            _ = ticks.tick() => {
                if let Some(event) = engine.tick() {
                    on_event(&event);
                }
                if !engine.is_running() {
                    debug!("countdown finished, tick schedule cancelled");
                    break;
                }
            }
            cmd = commands.recv(), if commands_open => {
                match cmd {
                    Some(TimerCommand::Pause) => {
                        if let Some(event) = engine.pause() {
                            on_event(&event);
                        }
                        debug!("countdown paused, tick schedule cancelled");
                        break;
                    }
                    Some(TimerCommand::Stop) => {
                        if let Some(event) = engine.stop() {
                            on_event(&event);
                        }
                        debug!("countdown stopped, tick schedule cancelled");
                        break;
                    }
                    Some(TimerCommand::DismissAlarm) => {
                        if let Some(event) = engine.dismiss_alarm() {
                            on_event(&event);
                        }
                    }
                    // Sender dropped; keep ticking without a command source.
                    None => commands_open = false,
                }
            }
        }
    }
}
