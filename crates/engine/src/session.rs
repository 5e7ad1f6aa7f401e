use thiserror::Error;
use tracing::{debug, info};

use crate::core::{InvalidThrowError, Player, PlayerSnapshot};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("a game needs at least one player")]
    NoPlayers,

    #[error(transparent)]
    InvalidThrow(#[from] InvalidThrowError),
}

/// What a submitted throw did to the turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Same player throws again.
    Continue,
    /// The player's frame is done; the next player is up.
    TurnEnded,
    /// Every player has bowled this round's frame.
    RoundEnded,
    /// Every player has finished their game.
    GameOver,
}

impl TurnOutcome {
    /// Whether the score sheet is worth showing after this outcome.
    pub fn ends_round(self) -> bool {
        matches!(self, TurnOutcome::RoundEnded | TurnOutcome::GameOver)
    }
}

/// Players taking turns on one lane.
///
/// A turn is one frame of one player. Players bowl in the order they were
/// added; a round ends when the turn wraps back to the first unfinished player.
#[derive(Debug, Clone)]
pub struct Session {
    players: Vec<Player>,
    current: usize,
    round: u32,
}

impl Session {
    pub fn new<I, S>(names: I) -> Result<Self, SessionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players: Vec<Player> = names.into_iter().map(Player::new).collect();
        if players.is_empty() {
            return Err(SessionError::NoPlayers);
        }
        info!(players = players.len(), "game started");
        Ok(Self {
            players,
            current: 0,
            round: 1,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// 1-based round number; stays on the last round once the game is over.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Player whose turn it is, `None` once everyone is finished.
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current).filter(|p| !p.is_finished())
    }

    pub fn is_finished(&self) -> bool {
        self.players.iter().all(Player::is_finished)
    }

    /// Submit a pinfall for the current player.
    ///
    /// Throws after the game is over are ignored and report `GameOver`.
    pub fn submit_throw(&mut self, pinfall: u8) -> Result<TurnOutcome, SessionError> {
        let current = self.current;
        let Some(player) = self.players.get_mut(current).filter(|p| !p.is_finished()) else {
            return Ok(TurnOutcome::GameOver);
        };

        let frame_before = player.active_frame_index();
        player.submit_throw(pinfall)?;
        if player.active_frame_index() == frame_before {
            return Ok(TurnOutcome::Continue);
        }
        Ok(self.end_turn())
    }

    /// Decode a raw "pins upright" reading on the current player's active
    /// frame and submit the resulting pinfall.
    pub fn submit_standing_count(
        &mut self,
        pins_now_standing: u8,
    ) -> Result<TurnOutcome, SessionError> {
        let pinfall = match self.current_player().and_then(Player::active_frame) {
            Some(frame) => frame.decode_pinfall_from_standing_count(pins_now_standing)?,
            None => return Ok(TurnOutcome::GameOver),
        };
        self.submit_throw(pinfall)
    }

    pub fn snapshots(&self) -> Vec<PlayerSnapshot> {
        self.players.iter().map(Player::snapshot).collect()
    }

    fn end_turn(&mut self) -> TurnOutcome {
        if let Some(next) = self.next_unfinished(self.current + 1..self.players.len()) {
            debug!(from = self.current, to = next, "turn ended");
            self.current = next;
            return TurnOutcome::TurnEnded;
        }

        match self.next_unfinished(0..self.players.len()) {
            Some(next) => {
                info!(round = self.round, "round complete");
                self.current = next;
                self.round += 1;
                TurnOutcome::RoundEnded
            }
            None => {
                info!(round = self.round, "game over");
                TurnOutcome::GameOver
            }
        }
    }

    fn next_unfinished(&self, mut range: std::ops::Range<usize>) -> Option<usize> {
        range.find(|&i| !self.players[i].is_finished())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_players() {
        let names: [&str; 0] = [];
        assert_eq!(Session::new(names).unwrap_err(), SessionError::NoPlayers);
    }

    #[test]
    fn test_single_player_rounds() {
        let mut session = Session::new(["solo"]).unwrap();
        assert_eq!(session.submit_throw(3), Ok(TurnOutcome::Continue));
        assert_eq!(session.submit_throw(4), Ok(TurnOutcome::RoundEnded));
        assert_eq!(session.round(), 2);
        assert_eq!(session.submit_throw(10), Ok(TurnOutcome::RoundEnded));
        assert_eq!(session.round(), 3);
    }

    #[test]
    fn test_turns_rotate_between_players() {
        let mut session = Session::new(["a", "b"]).unwrap();
        assert_eq!(session.current_player().unwrap().name(), "a");
        assert_eq!(session.submit_throw(10), Ok(TurnOutcome::TurnEnded));
        assert_eq!(session.current_player().unwrap().name(), "b");
        assert_eq!(session.submit_throw(2), Ok(TurnOutcome::Continue));
        assert_eq!(session.submit_throw(2), Ok(TurnOutcome::RoundEnded));
        assert_eq!(session.current_player().unwrap().name(), "a");
        assert_eq!(session.round(), 2);
    }

    #[test]
    fn test_invalid_throw_keeps_turn() {
        let mut session = Session::new(["a", "b"]).unwrap();
        session.submit_throw(6).unwrap();
        assert!(matches!(
            session.submit_throw(5),
            Err(SessionError::InvalidThrow(InvalidThrowError::TooManyPins { .. }))
        ));
        assert_eq!(session.current_player().unwrap().name(), "a");
        assert_eq!(session.submit_throw(4), Ok(TurnOutcome::TurnEnded));
    }

    #[test]
    fn test_standing_count_routes_to_current_player() {
        let mut session = Session::new(["a", "b"]).unwrap();
        assert_eq!(session.submit_standing_count(4), Ok(TurnOutcome::Continue));
        assert_eq!(session.submit_standing_count(4), Ok(TurnOutcome::TurnEnded));
        assert_eq!(session.players()[0].frames()[0].throws(), &[6, 0]);
    }

    #[test]
    fn test_game_over_and_later_throws_ignored() {
        let mut session = Session::new(["a", "b"]).unwrap();
        let mut last = TurnOutcome::Continue;
        for _ in 0..2 * 20 {
            last = session.submit_throw(0).unwrap();
        }
        assert_eq!(last, TurnOutcome::GameOver);
        assert!(session.is_finished());
        assert!(session.current_player().is_none());
        assert_eq!(session.round(), 10);

        assert_eq!(session.submit_throw(10), Ok(TurnOutcome::GameOver));
        assert_eq!(session.submit_standing_count(0), Ok(TurnOutcome::GameOver));
        assert!(session.snapshots().iter().all(|s| s.total == 0));
    }
}
