//! Voice-style command parsing.
//!
//! Maps free text such as "set alarm for 2 minutes" to a timer start.
//! Matching is case-insensitive. Only a minute count actually starts the
//! countdown; a seconds-only command is recognized but deliberately inert,
//! and minute/second combinations are not composed into one duration.

use std::sync::OnceLock;

use log::debug;
use regex::Regex;

use crate::events::Event;
use crate::timer::TimerEngine;

/// Classification of a parsed command string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceCommand {
    /// A minute count was found; starts the timer for `minutes * 60`.
    StartMinutes(u64),
    /// Only a second count was found. Recognized but does not start the
    /// timer.
    SecondsOnly(u64),
    /// No supported pattern matched.
    Unrecognized,
}

fn minute_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\s*minute").expect("invalid minute pattern"))
}

fn second_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\s*second").expect("invalid second pattern"))
}

/// Parse a command string without acting on it.
pub fn parse_voice_command(text: &str) -> VoiceCommand {
    let lower = text.to_lowercase();
    if let Some(caps) = minute_pattern().captures(&lower) {
        if let Ok(minutes) = caps[1].parse::<u64>() {
            return VoiceCommand::StartMinutes(minutes);
        }
    }
    if let Some(caps) = second_pattern().captures(&lower) {
        if let Ok(seconds) = caps[1].parse::<u64>() {
            return VoiceCommand::SecondsOnly(seconds);
        }
    }
    VoiceCommand::Unrecognized
}

/// Parse a command string and start the engine when it names a minute
/// count. Anything else leaves the engine untouched and returns `None`.
pub fn apply_voice_command(engine: &mut TimerEngine, text: &str) -> Option<Event> {
    match parse_voice_command(text) {
        VoiceCommand::StartMinutes(minutes) => engine.start(minutes.saturating_mul(60)),
        VoiceCommand::SecondsOnly(seconds) => {
            debug!("seconds-only command ignored: {seconds}s");
            None
        }
        VoiceCommand::Unrecognized => {
            debug!("unrecognized voice command: {text:?}");
            None
        }
    }
}
