//! Unattended games with random pinfall.

use crate::core::{Frame, Player, SimpleRng};
use crate::session::{Session, SessionError, TurnOutcome};

/// Uniform pinfall against the pins standing in `frame`.
pub fn random_pinfall(rng: &mut SimpleRng, frame: &Frame) -> u8 {
    rng.next_pinfall(frame.pins_standing())
}

/// Throw random balls until the current round (or the game) ends.
///
/// Returns `GameOver` straight away if the session is already finished.
pub fn simulate_round(
    session: &mut Session,
    rng: &mut SimpleRng,
) -> Result<TurnOutcome, SessionError> {
    while let Some(frame) = session.current_player().and_then(Player::active_frame) {
        let pinfall = random_pinfall(rng, frame);
        let outcome = session.submit_throw(pinfall)?;
        if outcome.ends_round() {
            return Ok(outcome);
        }
    }
    Ok(TurnOutcome::GameOver)
}

/// Play `session` to the end, calling `on_round` after each completed round.
pub fn simulate_session<F>(
    session: &mut Session,
    rng: &mut SimpleRng,
    mut on_round: F,
) -> Result<(), SessionError>
where
    F: FnMut(&Session),
{
    while !session.is_finished() {
        simulate_round(session, rng)?;
        on_round(session);
    }
    Ok(())
}
