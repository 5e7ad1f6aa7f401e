//! Core scoring engine - pure, deterministic, and testable
//!
//! This crate contains the bowling rules: frames, the per-player throw intake,
//! and the cumulative score calculation. It has **no I/O**; input decoding of
//! raw pin-state strings and table printing live in the `input` and `term`
//! crates.
//!
//! # Module Structure
//!
//! - [`frame`]: one frame's throws, strike/spare/completion status, pin-reset model
//! - [`player`]: ten frames and the active-frame cursor
//! - [`scoring`]: cumulative scores with strike/spare lookahead
//! - [`snapshot`]: serializable read-only view for display
//! - [`rng`]: deterministic LCG for simulated games
//!
//! # Rules
//!
//! - Frames 1-9 take two balls, or one on a strike
//! - Frame 10 takes a third ball after a strike or spare on its first pair
//! - The rack is reset after it is cleared (so a tenth-frame strike is followed by a full rack)
//! - Strike bonus: next two balls; spare bonus: next ball
//! - Unthrown bonus balls count as 0 until they are thrown
//!
//! # Example
//!
//! ```
//! use tui_bowling_core::Player;
//!
//! let mut player = Player::new("Ada");
//! player.submit_throw(10).unwrap();
//! player.submit_throw(3).unwrap();
//! player.submit_throw(4).unwrap();
//!
//! let scores = player.cumulative_scores();
//! assert_eq!(scores[0], 17);
//! assert_eq!(scores[1], 24);
//! ```

pub mod error;
pub mod frame;
pub mod player;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tui_bowling_types as types;

// Re-export commonly used types for convenience
pub use error::InvalidThrowError;
pub use frame::Frame;
pub use player::Player;
pub use rng::SimpleRng;
pub use scoring::{cumulative_scores, frame_scores, FrameScore};
pub use snapshot::{FrameSnapshot, PlayerSnapshot};
