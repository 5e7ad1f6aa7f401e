//! Console input module (engine-facing).
//!
//! Turns raw console lines into values the engine accepts: the number of
//! players, player names and pin-state readings. Malformed lines are
//! re-prompted here and never reach the engine.

pub mod pin_state;
pub mod prompt;

pub use tui_bowling_types as types;

pub use pin_state::{parse_pin_state, parse_player_count, MalformedInputError, PinState};
pub use prompt::Prompter;
