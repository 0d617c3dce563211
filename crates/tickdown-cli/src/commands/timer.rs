use chrono::Utc;
use clap::Subcommand;
use serde::{Deserialize, Serialize};

use tickdown_core::command::apply_voice_command;
use tickdown_core::storage::{load_state, save_state};
use tickdown_core::timer::{run_ticker, TimerDisplay};
use tickdown_core::{Config, Event, TimerEngine};

const TIMER_STATE: &str = "timer.json";

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start a countdown (duration defaults come from config)
    Start {
        #[arg(long)]
        minutes: Option<u64>,
        #[arg(long)]
        seconds: Option<u64>,
    },
    /// Pause the countdown, keeping the remaining time
    Pause,
    /// Stop the countdown and clear the remaining time
    Stop,
    /// Dismiss an active alarm
    Dismiss,
    /// Print current timer state as JSON
    Status,
    /// Interpret a voice-style text command
    Say {
        /// Command text, e.g. "set alarm for 2 minutes"
        text: String,
    },
    /// Run the countdown in the foreground, printing each event
    Run {
        #[arg(long)]
        minutes: Option<u64>,
        #[arg(long)]
        seconds: Option<u64>,
    },
}

/// Engine state carried between invocations, with the wall-clock second
/// the engine was last advanced to.
#[derive(Default, Serialize, Deserialize)]
struct PersistedTimer {
    engine: TimerEngine,
    last_tick_epoch: i64,
}

impl PersistedTimer {
    fn load() -> Self {
        load_state(TIMER_STATE).unwrap_or_default()
    }

    fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        save_state(TIMER_STATE, self)?;
        Ok(())
    }

    /// Apply one tick per wall-clock second elapsed since the last
    /// invocation. Returns the finish event if the countdown ran out.
    fn catch_up(&mut self) -> Option<Event> {
        let now = Utc::now().timestamp();
        let elapsed = now.saturating_sub(self.last_tick_epoch).max(0) as u64;
        self.last_tick_epoch = now;
        if !self.engine.is_running() {
            return None;
        }
        for _ in 0..elapsed {
            if let Some(event @ Event::TimerFinished { .. }) = self.engine.tick() {
                return Some(event);
            }
        }
        None
    }
}

/// Display snapshot for the widget badge, caught up to the current second.
pub(crate) fn load_display() -> TimerDisplay {
    let mut state = PersistedTimer::load();
    state.catch_up();
    state.engine.display()
}

fn duration_from(minutes: Option<u64>, seconds: Option<u64>) -> u64 {
    let cfg = Config::load_or_default();
    let m = minutes.unwrap_or(cfg.timer.default_minutes);
    let s = seconds.unwrap_or(cfg.timer.default_seconds);
    m.saturating_mul(60).saturating_add(s)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = PersistedTimer::load();
    if let Some(finished) = state.catch_up() {
        print_json(&finished)?;
    }

    match action {
        TimerAction::Start { minutes, seconds } => {
            // A zero duration is a silent no-op; print the unchanged state.
            match state.engine.start(duration_from(minutes, seconds)) {
                Some(event) => print_json(&event)?,
                None => print_json(&state.engine.snapshot())?,
            }
        }
        TimerAction::Pause => match state.engine.pause() {
            Some(event) => print_json(&event)?,
            None => print_json(&state.engine.snapshot())?,
        },
        TimerAction::Stop => {
            if let Some(event) = state.engine.stop() {
                print_json(&event)?;
            }
        }
        TimerAction::Dismiss => match state.engine.dismiss_alarm() {
            Some(event) => print_json(&event)?,
            None => print_json(&state.engine.snapshot())?,
        },
        TimerAction::Status => {
            print_json(&state.engine.snapshot())?;
        }
        TimerAction::Say { text } => match apply_voice_command(&mut state.engine, &text) {
            Some(event) => print_json(&event)?,
            None => print_json(&state.engine.snapshot())?,
        },
        TimerAction::Run { minutes, seconds } => {
            run_foreground(&mut state, minutes, seconds)?;
        }
    }

    state.save()?;
    Ok(())
}

/// Drive the countdown to completion in this process, one event per line.
fn run_foreground(
    state: &mut PersistedTimer,
    minutes: Option<u64>,
    seconds: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(event) = state.engine.start(duration_from(minutes, seconds)) {
        println!("{}", serde_json::to_string(&event)?);
    }
    if !state.engine.is_running() {
        print_json(&state.engine.snapshot())?;
        return Ok(());
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let (_tx, rx) = tokio::sync::mpsc::channel(1);
        run_ticker(&mut state.engine, rx, |event| {
            if let Ok(json) = serde_json::to_string(event) {
                println!("{json}");
            }
        })
        .await;
    });
    state.last_tick_epoch = Utc::now().timestamp();
    Ok(())
}
