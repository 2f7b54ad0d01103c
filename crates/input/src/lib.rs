//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any rendering. It maps
//! `crossterm` key events and button names into [`crate::types::Direction`]
//! intents, carries them over a channel to whoever owns the game, and turns
//! the queued intents into one movement vector per tick.
//!
//! Keyboard and on-screen buttons are interchangeable sources: both hold an
//! [`IntentSender`] and send the same values.

pub mod channel;
pub mod map;
pub mod translator;

pub use tui_snake_types as types;

pub use channel::{intent_channel, IntentReceiver, IntentSender};
pub use map::{direction_for_key, direction_for_name, should_quit};
pub use translator::InputTranslator;
