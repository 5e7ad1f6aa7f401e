//! Player module - one player's ten frames and the throw-intake state machine
//!
//! Throws always go to the active frame. When that frame completes the cursor
//! moves to the next one; once it passes the tenth frame the game is finished
//! and further throws are ignored.

use tracing::debug;

use crate::error::InvalidThrowError;
use crate::frame::Frame;
use crate::scoring::{self, FrameScore};
use crate::snapshot::PlayerSnapshot;
use crate::types::{FrameKind, FRAMES_PER_GAME};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    frames: [Frame; FRAMES_PER_GAME],
    /// Index of the frame receiving throws; `FRAMES_PER_GAME` once finished.
    active_frame: usize,
}

impl Player {
    /// Create a player with ten empty frames.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frames: std::array::from_fn(|i| Frame::new(FrameKind::for_index(i))),
            active_frame: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frames(&self) -> &[Frame; FRAMES_PER_GAME] {
        &self.frames
    }

    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn active_frame_index(&self) -> usize {
        self.active_frame
    }

    /// The frame the next throw goes to, `None` once the game is finished.
    pub fn active_frame(&self) -> Option<&Frame> {
        self.frames.get(self.active_frame)
    }

    pub fn is_finished(&self) -> bool {
        self.active_frame == FRAMES_PER_GAME
    }

    /// Route a pinfall to the active frame.
    ///
    /// Throws after the game is finished are ignored. A rejected throw leaves
    /// the player unchanged.
    pub fn submit_throw(&mut self, pinfall: u8) -> Result<(), InvalidThrowError> {
        let Some(frame) = self.frames.get_mut(self.active_frame) else {
            debug!(player = %self.name, pinfall, "game finished, throw ignored");
            return Ok(());
        };

        frame.record_throw(pinfall)?;
        if frame.is_complete() {
            self.active_frame += 1;
            debug!(
                player = %self.name,
                frame = self.active_frame,
                "frame complete"
            );
        }
        Ok(())
    }

    /// Decode a raw "pins upright" reading against the active frame and submit it.
    ///
    /// Returns the decoded pinfall, or `None` if the game is already finished.
    pub fn submit_standing_count(
        &mut self,
        pins_now_standing: u8,
    ) -> Result<Option<u8>, InvalidThrowError> {
        let Some(frame) = self.active_frame() else {
            return Ok(None);
        };
        let pinfall = frame.decode_pinfall_from_standing_count(pins_now_standing)?;
        self.submit_throw(pinfall)?;
        Ok(Some(pinfall))
    }

    /// Running total after each frame. See [`scoring::cumulative_scores`].
    pub fn cumulative_scores(&self) -> [u32; FRAMES_PER_GAME] {
        scoring::cumulative_scores(&self.frames)
    }

    pub fn frame_scores(&self) -> [FrameScore; FRAMES_PER_GAME] {
        scoring::frame_scores(&self.frames)
    }

    /// Highest running total; the final score once the game is finished.
    pub fn total(&self) -> u32 {
        self.cumulative_scores().into_iter().max().unwrap_or(0)
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot::from(self)
    }
}
