//! Raw pin-state readings.
//!
//! The pinsetter reports one flag per pin: `F` for a pin that is down and `T`
//! for a pin that is still up. Only the number of upright pins matters to the
//! engine.

use std::str::FromStr;

use thiserror::Error;

use crate::types::PIN_STATE_LEN;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedInputError {
    #[error("no input given")]
    Empty,

    #[error("expected {expected} pin flags, got {found}")]
    WrongLength { expected: usize, found: usize },

    #[error("invalid pin flag {ch:?} at position {position} (use F for down, T for up)")]
    InvalidPin { ch: char, position: usize },

    #[error("{0:?} is not a number")]
    NotANumber(String),

    #[error("at least one player is required")]
    NoPlayers,
}

/// Upright flag for each pin, in pinsetter order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PinState {
    up: [bool; PIN_STATE_LEN],
}

impl PinState {
    pub fn is_up(&self, pin: usize) -> bool {
        self.up.get(pin).copied().unwrap_or(false)
    }

    /// Number of pins still upright.
    pub fn standing_count(&self) -> u8 {
        self.up.iter().filter(|&&up| up).count() as u8
    }
}

impl FromStr for PinState {
    type Err = MalformedInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MalformedInputError::Empty);
        }

        let found = s.chars().count();
        if found != PIN_STATE_LEN {
            return Err(MalformedInputError::WrongLength {
                expected: PIN_STATE_LEN,
                found,
            });
        }

        let mut up = [false; PIN_STATE_LEN];
        for (position, ch) in s.chars().enumerate() {
            up[position] = match ch {
                'T' | 't' => true,
                'F' | 'f' => false,
                _ => return Err(MalformedInputError::InvalidPin { ch, position }),
            };
        }
        Ok(Self { up })
    }
}

/// Parse a pin-state reading into the number of pins left standing.
pub fn parse_pin_state(s: &str) -> Result<u8, MalformedInputError> {
    Ok(s.parse::<PinState>()?.standing_count())
}

/// Parse a positive player count.
pub fn parse_player_count(s: &str) -> Result<usize, MalformedInputError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(MalformedInputError::Empty);
    }
    match s.parse::<usize>() {
        Ok(0) => Err(MalformedInputError::NoPlayers),
        Ok(n) => Ok(n),
        Err(_) => Err(MalformedInputError::NotANumber(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_down_and_all_up() {
        assert_eq!(parse_pin_state("FFFFFFFFFF"), Ok(0));
        assert_eq!(parse_pin_state("TTTTTTTTTT"), Ok(10));
    }

    #[test]
    fn test_mixed_reading() {
        let state: PinState = "TFTFFFFFFT".parse().unwrap();
        assert_eq!(state.standing_count(), 3);
        assert!(state.is_up(0));
        assert!(!state.is_up(1));
        assert!(state.is_up(9));
        assert!(!state.is_up(10));
    }

    #[test]
    fn test_case_and_whitespace_tolerated() {
        assert_eq!(parse_pin_state("  tfffffffft\n"), Ok(2));
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(
            parse_pin_state("TTT"),
            Err(MalformedInputError::WrongLength {
                expected: 10,
                found: 3
            })
        );
        assert_eq!(
            parse_pin_state("FFFFFFFFFFF"),
            Err(MalformedInputError::WrongLength {
                expected: 10,
                found: 11
            })
        );
    }

    #[test]
    fn test_invalid_flag() {
        assert_eq!(
            parse_pin_state("FFFFXFFFFF"),
            Err(MalformedInputError::InvalidPin {
                ch: 'X',
                position: 4
            })
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(parse_pin_state("   "), Err(MalformedInputError::Empty));
    }

    #[test]
    fn test_player_count() {
        assert_eq!(parse_player_count("3\n"), Ok(3));
        assert_eq!(parse_player_count("0"), Err(MalformedInputError::NoPlayers));
        assert_eq!(
            parse_player_count("two"),
            Err(MalformedInputError::NotANumber("two".to_string()))
        );
        assert_eq!(parse_player_count(""), Err(MalformedInputError::Empty));
    }
}
