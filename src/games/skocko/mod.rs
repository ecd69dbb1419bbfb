//! Skočko: break a secret sequence of four symbols.
//!
//! - The secret is set by the game master, one per round
//! - The round's opener has five guesses; each scores red (right place)
//!   and yellow (wrong place) pegs
//! - Solving on guess `n` earns the opener `12 - 2n`
//! - If the opener runs out, the other player gets one guess worth 5
//! - Player 1 opens round 1, player 2 opens round 2
//!
//! Two rounds.

mod config;
mod feedback;
mod game;

pub use config::{Sequence, SkockoConfig, Symbol, SEQUENCE_LEN};
pub use feedback::{feedback, Feedback};
pub use game::{
    solve_points, CodeRound, Guess, SkockoAction, SkockoGame, SkockoState, FINAL_ATTEMPTS,
    MAX_ATTEMPTS, SECOND_CHANCE_POINTS,
};
