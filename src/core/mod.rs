//! Core module - game rules and state, no I/O
//!
//! The session state machine and scoring are pure with respect to the
//! outside world; persistence and rendering are driven from the loop.

pub mod scoring;
pub mod session;

pub use scoring::total_score;
pub use session::{GameRunState, GameSession, Score, SessionEvent};
