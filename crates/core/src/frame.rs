//! Frame module - one frame's throws and everything derived from them
//!
//! A frame only stores the pinfall of each throw. Strike/spare status,
//! completion, the pins currently standing and the score-sheet symbols are all
//! recomputed from that sequence on demand.

use arrayvec::ArrayVec;
use tracing::debug;

use crate::error::InvalidThrowError;
use crate::types::{FrameKind, ThrowSymbol, PINS_PER_FRAME, TERMINAL_FRAME_THROWS};

/// Rack state immediately before a throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rack {
    standing: u8,
    /// No ball has been rolled at this rack since it was last set.
    fresh: bool,
}

impl Rack {
    const FULL: Rack = Rack {
        standing: PINS_PER_FRAME,
        fresh: true,
    };

    /// Rack after `pinfall` pins go down. A cleared rack is reset.
    fn after(self, pinfall: u8) -> Rack {
        let standing = self.standing.saturating_sub(pinfall);
        if standing == 0 {
            Rack::FULL
        } else {
            Rack {
                standing,
                fresh: false,
            }
        }
    }
}

/// A single frame slot in one player's game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    kind: FrameKind,
    throws: ArrayVec<u8, TERMINAL_FRAME_THROWS>,
}

impl Frame {
    pub fn new(kind: FrameKind) -> Self {
        Self {
            kind,
            throws: ArrayVec::new(),
        }
    }

    /// Frames 1-9.
    pub fn standard() -> Self {
        Self::new(FrameKind::Standard)
    }

    /// Frame 10.
    pub fn terminal() -> Self {
        Self::new(FrameKind::Terminal)
    }

    pub fn kind(&self) -> FrameKind {
        self.kind
    }

    pub fn capacity(&self) -> usize {
        self.kind.capacity()
    }

    /// Recorded pinfalls, in throw order.
    pub fn throws(&self) -> &[u8] {
        &self.throws
    }

    /// Pinfall of the throw at `index`, if it has been thrown.
    pub fn throw(&self, index: usize) -> Option<u8> {
        self.throws.get(index).copied()
    }

    pub fn throws_taken(&self) -> usize {
        self.throws.len()
    }

    /// Sum of the frame's own throws, without any bonus.
    pub fn pinfall_total(&self) -> u32 {
        self.throws.iter().map(|&p| u32::from(p)).sum()
    }

    /// First throw cleared the rack.
    pub fn is_strike(&self) -> bool {
        self.throw(0) == Some(PINS_PER_FRAME)
    }

    /// First two throws cleared the rack between them.
    pub fn is_spare(&self) -> bool {
        match self.throws.as_slice() {
            [first, second, ..] => !self.is_strike() && first + second == PINS_PER_FRAME,
            _ => false,
        }
    }

    /// Whether the frame has taken every throw it is entitled to.
    ///
    /// Frames 1-9 end after two throws or a strike. The tenth frame ends after
    /// three throws, or after two when the first pair is an open frame: a
    /// strike or spare on the first pair earns exactly one more ball.
    pub fn is_complete(&self) -> bool {
        let taken = self.throws.len();
        match self.kind {
            FrameKind::Standard => taken >= 2 || self.is_strike(),
            FrameKind::Terminal => {
                taken >= 3 || (taken == 2 && !self.is_strike() && !self.is_spare())
            }
        }
    }

    /// Pins upright for the next throw.
    ///
    /// Starts at a full rack and resets to a full rack whenever a throw clears
    /// it (a strike, a spare, or a tenth-frame strike after a strike).
    pub fn pins_standing(&self) -> u8 {
        self.final_rack().standing
    }

    /// Record a throw.
    ///
    /// Fails without touching the frame if the frame is complete or if
    /// `pinfall` is more than the pins standing.
    pub fn record_throw(&mut self, pinfall: u8) -> Result<(), InvalidThrowError> {
        if self.is_complete() {
            return Err(InvalidThrowError::FrameComplete);
        }
        let standing = self.pins_standing();
        if pinfall > standing {
            return Err(InvalidThrowError::TooManyPins { pinfall, standing });
        }
        self.throws
            .try_push(pinfall)
            .map_err(|_| InvalidThrowError::FrameComplete)?;

        debug!(
            kind = ?self.kind,
            pinfall,
            standing,
            complete = self.is_complete(),
            "throw recorded"
        );
        Ok(())
    }

    /// Convert an absolute "pins upright now" reading into this throw's pinfall.
    ///
    /// Hardware reports the pins left standing, not the pins knocked down, so
    /// the pinfall is the difference against what stood before the throw.
    pub fn decode_pinfall_from_standing_count(
        &self,
        pins_now_standing: u8,
    ) -> Result<u8, InvalidThrowError> {
        if self.is_complete() {
            return Err(InvalidThrowError::FrameComplete);
        }
        let standing = self.pins_standing();
        standing
            .checked_sub(pins_now_standing)
            .ok_or(InvalidThrowError::StandingCountTooHigh {
                reported: pins_now_standing,
                standing,
            })
    }

    /// Score-sheet symbols, one per throw slot (`capacity()` many).
    ///
    /// A throw that clears a fresh rack is a strike, one that clears a
    /// partly knocked rack is a spare. Slots not yet thrown are `Empty`.
    pub fn render_symbols(&self) -> ArrayVec<ThrowSymbol, TERMINAL_FRAME_THROWS> {
        let mut symbols = ArrayVec::new();
        let mut rack = Rack::FULL;
        for &pinfall in &self.throws {
            let symbol = if pinfall == 0 {
                ThrowSymbol::Gutter
            } else if pinfall == rack.standing && rack.fresh {
                ThrowSymbol::Strike
            } else if pinfall == rack.standing {
                ThrowSymbol::Spare
            } else {
                ThrowSymbol::Pins(pinfall)
            };
            symbols.push(symbol);
            rack = rack.after(pinfall);
        }
        while symbols.len() < self.capacity() {
            symbols.push(ThrowSymbol::Empty);
        }
        symbols
    }

    fn final_rack(&self) -> Rack {
        self.throws
            .iter()
            .fold(Rack::FULL, |rack, &pinfall| rack.after(pinfall))
    }
}
