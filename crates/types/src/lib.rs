//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the score keeper.
//! All types are plain data with no behaviour beyond classification, making them
//! usable in any context (scoring, simulation, terminal rendering, JSON output).
//!
//! # Game Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PINS_PER_FRAME` | 10 | Pins in a full rack |
//! | `FRAMES_PER_GAME` | 10 | Frames per player |
//! | `STANDARD_FRAME_THROWS` | 2 | Throw slots in frames 1-9 |
//! | `TERMINAL_FRAME_THROWS` | 3 | Throw slots in frame 10 |
//! | `MAX_THROWS_PER_GAME` | 21 | Nine frames of two balls plus a frame of three |
//! | `PIN_STATE_LEN` | 10 | Characters in a raw pin-state reading |
//!
//! # Examples
//!
//! ```
//! use tui_bowling_types::{FrameKind, ThrowSymbol, FRAMES_PER_GAME};
//!
//! assert_eq!(FrameKind::for_index(0), FrameKind::Standard);
//! assert_eq!(FrameKind::for_index(FRAMES_PER_GAME - 1), FrameKind::Terminal);
//! assert_eq!(FrameKind::Terminal.capacity(), 3);
//!
//! assert_eq!(ThrowSymbol::Strike.as_char(), 'X');
//! assert_eq!(ThrowSymbol::Pins(7).as_char(), '7');
//! ```

use serde::Serialize;

/// Pins in a full rack.
pub const PINS_PER_FRAME: u8 = 10;

/// Frames in one player's game.
pub const FRAMES_PER_GAME: usize = 10;

/// Throw slots in frames 1-9.
pub const STANDARD_FRAME_THROWS: usize = 2;

/// Throw slots in the tenth frame.
pub const TERMINAL_FRAME_THROWS: usize = 3;

/// Nine frames of two balls, and a frame of two or three balls.
pub const MAX_THROWS_PER_GAME: usize = STANDARD_FRAME_THROWS * (FRAMES_PER_GAME - 1) + TERMINAL_FRAME_THROWS;

/// Length of a raw pin-state reading (one flag per pin).
pub const PIN_STATE_LEN: usize = PINS_PER_FRAME as usize;

/// Highest possible game score.
pub const PERFECT_GAME: u32 = 300;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_dimensions() {
        assert_eq!(PINS_PER_FRAME, 10);
        assert_eq!(FRAMES_PER_GAME, 10);
        assert_eq!(MAX_THROWS_PER_GAME, 21);
        assert_eq!(PIN_STATE_LEN, 10);
    }

    #[test]
    fn frame_kind_by_index() {
        for i in 0..FRAMES_PER_GAME - 1 {
            assert_eq!(FrameKind::for_index(i), FrameKind::Standard);
        }
        assert_eq!(FrameKind::for_index(9), FrameKind::Terminal);
        assert_eq!(FrameKind::Standard.capacity(), 2);
        assert_eq!(FrameKind::Terminal.capacity(), 3);
    }

    #[test]
    fn symbol_chars() {
        assert_eq!(ThrowSymbol::Strike.as_char(), 'X');
        assert_eq!(ThrowSymbol::Spare.as_char(), '/');
        assert_eq!(ThrowSymbol::Gutter.as_char(), '-');
        assert_eq!(ThrowSymbol::Pins(1).as_char(), '1');
        assert_eq!(ThrowSymbol::Pins(9).as_char(), '9');
        assert_eq!(ThrowSymbol::Empty.as_char(), ' ');
        assert_eq!(ThrowSymbol::Spare.to_string(), "/");
    }

    #[test]
    fn only_empty_is_unthrown() {
        assert!(ThrowSymbol::Gutter.is_thrown());
        assert!(ThrowSymbol::Strike.is_thrown());
        assert!(!ThrowSymbol::Empty.is_thrown());
        assert_eq!(ThrowSymbol::default(), ThrowSymbol::Empty);
    }
}

/// Frame slot type.
///
/// Frames 1-9 hold up to two throws; the tenth frame holds up to three.
/// The terminal frame differs only in capacity and completion rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameKind {
    Standard,
    Terminal,
}

impl FrameKind {
    /// Kind of the frame at a 0-based index within a game.
    pub fn for_index(index: usize) -> Self {
        if index + 1 == FRAMES_PER_GAME {
            FrameKind::Terminal
        } else {
            FrameKind::Standard
        }
    }

    /// Maximum throws the frame can hold.
    pub fn capacity(self) -> usize {
        match self {
            FrameKind::Standard => STANDARD_FRAME_THROWS,
            FrameKind::Terminal => TERMINAL_FRAME_THROWS,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == FrameKind::Terminal
    }
}

/// Score-sheet symbol for a single throw slot.
///
/// - **Strike** (`X`): the throw cleared a full rack
/// - **Spare** (`/`): the throw cleared what was left of a rack
/// - **Gutter** (`-`): the throw knocked nothing down
/// - **Pins(n)**: the throw knocked down `n` pins (1-9)
/// - **Empty** (` `): the slot has not been thrown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThrowSymbol {
    Strike,
    Spare,
    Gutter,
    Pins(u8),
    #[default]
    Empty,
}

impl ThrowSymbol {
    pub fn as_char(self) -> char {
        match self {
            ThrowSymbol::Strike => 'X',
            ThrowSymbol::Spare => '/',
            ThrowSymbol::Gutter => '-',
            ThrowSymbol::Pins(n) => char::from_digit(u32::from(n), 10).unwrap_or('?'),
            ThrowSymbol::Empty => ' ',
        }
    }

    /// Whether the slot holds a throw.
    pub fn is_thrown(self) -> bool {
        self != ThrowSymbol::Empty
    }
}

impl std::fmt::Display for ThrowSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for ThrowSymbol {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.as_char())
    }
}
