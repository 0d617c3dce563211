//! # Tickdown Core Library
//!
//! Core business logic for tickdown, a countdown timer with a simulated
//! alarm and a draggable floating widget. All operations are available via
//! a standalone CLI binary; any GUI shell is expected to be a thin layer
//! over this same library.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a single-countdown state machine that requires the
//!   caller to invoke `tick()` once per elapsed second
//! - **Ticker**: an async driver that owns the engine while it runs and
//!   cancels the tick schedule the instant the countdown stops
//! - **Widget Controller**: a three-phase gesture state machine that turns
//!   pointer drags into edge-snapped positions or tap activations
//! - **Voice Commands**: free-text commands mapped to timer starts
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: countdown/alarm state machine
//! - [`DraggableWidgetController`]: gesture handling and edge snapping
//! - [`Config`]: TOML configuration management
//! - [`Event`]: serialized transition events polled by front ends

pub mod command;
pub mod error;
pub mod events;
pub mod permissions;
pub mod storage;
pub mod timer;
pub mod widget;

pub use command::{parse_voice_command, VoiceCommand};
pub use error::{ConfigError, CoreError};
pub use events::Event;
pub use storage::Config;
pub use timer::{run_ticker, TimerCommand, TimerEngine, TimerPhase};
pub use widget::{
    DraggableWidgetController, GestureOutcome, ReleaseOutcome, ScreenBounds, WidgetPosition,
};
