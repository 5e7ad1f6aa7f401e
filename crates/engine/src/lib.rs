//! Game orchestration on top of the scoring core.
//!
//! - [`session`]: round-robin turns for several players, one frame per turn
//! - [`simulate`]: random throws for unattended games
//!
//! Like `core`, this crate performs no I/O; callers decide when to prompt and
//! when to print based on [`TurnOutcome`].

pub mod session;
pub mod simulate;

pub use tui_bowling_core as core;
pub use tui_bowling_types as types;

pub use session::{Session, SessionError, TurnOutcome};
pub use simulate::{random_pinfall, simulate_round, simulate_session};
