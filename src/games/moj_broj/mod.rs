//! Moj Broj: reach a three-digit target with six numbers and arithmetic.
//!
//! - Six operands per round: four digits 1-9, one of {10, 15, 20, 25} and
//!   one of {20, 50, 75, 100}, drawn once at round start
//! - After the countdown the round's opener builds an expression and locks
//!   it in, then the other player does
//! - The closer result scores `max(0, 10 - distance)`; a failed expression
//!   never scores; ties go to the round's opener
//! - Player 1 opens round 1, player 2 opens round 2
//!
//! Two rounds.

mod config;
mod expr;
mod game;

pub use config::{MojBrojConfig, TARGET_RANGE};
pub use expr::{evaluate, evaluate_exact, MAX_DEPTH};
pub use game::{
    score_round, Evaluation, MojBrojAction, MojBrojGame, MojBrojState, NumberRound, Operator,
    Submission, LARGE_NUMBERS, MEDIUM_NUMBERS, MOJ_BROJ_COUNTDOWN, NUMBER_COUNT,
};
