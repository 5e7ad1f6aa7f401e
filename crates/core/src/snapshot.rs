//! Read-only view of a player's game for display and JSON output.

use serde::Serialize;

use crate::player::Player;
use crate::types::{FrameKind, ThrowSymbol};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameSnapshot {
    pub kind: FrameKind,
    pub symbols: Vec<ThrowSymbol>,
    /// Running total through this frame.
    pub score: u32,
    /// The frame's own value no longer depends on unthrown balls.
    pub resolved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub frames: Vec<FrameSnapshot>,
    pub total: u32,
    pub active_frame: usize,
    pub finished: bool,
}

impl PlayerSnapshot {
    /// Running totals, one per frame.
    pub fn scores(&self) -> impl Iterator<Item = u32> + '_ {
        self.frames.iter().map(|f| f.score)
    }
}

impl From<&Player> for PlayerSnapshot {
    fn from(player: &Player) -> Self {
        let cumulative = player.cumulative_scores();
        let frame_scores = player.frame_scores();

        let frames = player
            .frames()
            .iter()
            .zip(cumulative)
            .zip(frame_scores)
            .map(|((frame, score), frame_score)| FrameSnapshot {
                kind: frame.kind(),
                symbols: frame.render_symbols().to_vec(),
                score,
                resolved: frame_score.resolved,
            })
            .collect();

        Self {
            name: player.name().to_string(),
            frames,
            total: player.total(),
            active_frame: player.active_frame_index(),
            finished: player.is_finished(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_of_partial_game() {
        let mut player = Player::new("Bo");
        for t in [10, 7, 3, 4] {
            player.submit_throw(t).unwrap();
        }
        let snap = player.snapshot();

        assert_eq!(snap.name, "Bo");
        assert_eq!(snap.frames.len(), 10);
        assert_eq!(snap.active_frame, 2);
        assert!(!snap.finished);
        assert_eq!(snap.frames[0].symbols, vec![ThrowSymbol::Strike, ThrowSymbol::Empty]);
        assert_eq!(
            snap.frames[1].symbols,
            vec![ThrowSymbol::Pins(7), ThrowSymbol::Spare]
        );
        assert_eq!(snap.scores().take(3).collect::<Vec<_>>(), vec![20, 34, 38]);
        assert!(snap.frames[0].resolved);
        assert!(snap.frames[1].resolved);
        assert!(!snap.frames[2].resolved);
        assert_eq!(snap.total, 38);
        assert_eq!(snap.frames[9].symbols.len(), 3);
    }

    #[test]
    fn test_snapshot_serializes_symbols_as_chars() {
        let mut player = Player::new("Cy");
        player.submit_throw(10).unwrap();
        let json = serde_json::to_value(player.snapshot()).unwrap();

        assert_eq!(json["name"], "Cy");
        assert_eq!(json["frames"][0]["symbols"][0], "X");
        assert_eq!(json["frames"][0]["symbols"][1], " ");
        assert_eq!(json["frames"][0]["kind"], "standard");
        assert_eq!(json["frames"][9]["kind"], "terminal");
        assert_eq!(json["total"], 10);
    }
}
