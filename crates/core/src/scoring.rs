//! Scoring module - cumulative ten-pin scores with strike/spare bonuses
//!
//! Scores are a pure function of the whole frame sequence. A frame never looks
//! at its neighbours itself; bonus balls are read from the flattened throw
//! sequence of the frames that follow it.
//!
//! - Tenth frame: its own pinfall (its extra balls already carry the bonus).
//! - Strike: 10 plus the next two balls thrown after the frame.
//! - Spare: 10 plus the next ball thrown after the frame.
//! - Open frame: its own pinfall.
//!
//! Balls that have not been thrown yet count as 0, so totals are provisional
//! until every bonus is resolvable and only ever grow as throws arrive.

use tracing::trace;

use crate::frame::Frame;
use crate::types::{FRAMES_PER_GAME, PINS_PER_FRAME};

/// Value of a single frame (not cumulative).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameScore {
    pub value: u32,
    /// Every throw the value depends on has been thrown.
    pub resolved: bool,
}

/// Per-frame values for a full game.
pub fn frame_scores(frames: &[Frame; FRAMES_PER_GAME]) -> [FrameScore; FRAMES_PER_GAME] {
    std::array::from_fn(|i| score_frame(frames, i))
}

/// Running total after each frame.
pub fn cumulative_scores(frames: &[Frame; FRAMES_PER_GAME]) -> [u32; FRAMES_PER_GAME] {
    let scores = frame_scores(frames);
    let mut running = 0u32;
    let totals = scores.map(|score| {
        running += score.value;
        running
    });
    trace!(?totals, "scores recomputed");
    totals
}

fn score_frame(frames: &[Frame], index: usize) -> FrameScore {
    let frame = &frames[index];

    if frame.kind().is_terminal() {
        FrameScore {
            value: frame.pinfall_total(),
            resolved: frame.is_complete(),
        }
    } else if frame.is_strike() {
        with_bonus(frames, index, 2)
    } else if frame.is_spare() {
        with_bonus(frames, index, 1)
    } else {
        FrameScore {
            value: frame.pinfall_total(),
            resolved: frame.is_complete(),
        }
    }
}

fn with_bonus(frames: &[Frame], index: usize, balls: usize) -> FrameScore {
    let (counted, bonus) = throws_after(frames, index)
        .take(balls)
        .fold((0usize, 0u32), |(n, sum), pinfall| (n + 1, sum + u32::from(pinfall)));

    FrameScore {
        value: u32::from(PINS_PER_FRAME) + bonus,
        resolved: counted == balls,
    }
}

/// Every throw recorded after frame `index`, in order.
///
/// Frames fill strictly in order, so a strike chain naturally reaches into
/// frame `index + 2` (or the tenth frame's second ball) when it needs to.
fn throws_after(frames: &[Frame], index: usize) -> impl Iterator<Item = u8> + '_ {
    frames[index + 1..]
        .iter()
        .flat_map(|frame| frame.throws().iter().copied())
}
