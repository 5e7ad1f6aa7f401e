//! Engine error types.

use thiserror::Error;

/// A throw the engine refuses to record.
///
/// Raised for throws that cannot physically happen given the pins standing,
/// or for throws aimed at a frame that is already complete. A failed call
/// never changes frame state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidThrowError {
    #[error("frame is already complete")]
    FrameComplete,

    #[error("pinfall {pinfall} exceeds the {standing} pins standing")]
    TooManyPins { pinfall: u8, standing: u8 },

    #[error("reading reports {reported} pins standing but only {standing} were up")]
    StandingCountTooHigh { reported: u8, standing: u8 },
}
