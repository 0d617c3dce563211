mod engine;
mod format;
mod ticker;

pub use engine::{TimerDisplay, TimerEngine, TimerPhase};
pub use format::{format_badge, format_clock};
pub use ticker::{run_ticker, TimerCommand};
