//! Asocijacije: four clue columns leading to one final answer.
//!
//! - One turn opens at most one clue, then may guess columns or the final
//!   solution, or yield; guessing and yielding both need that clue opened
//!   unless the board has no closed clue left
//! - A solved column scores `12 - 2 * revealed clues` and the turn goes on
//! - The final solution scores `50 - 10 * solved columns` and ends the game
//! - A wrong guess passes the turn
//! - When the 180-tick clock runs out the board is revealed and nobody
//!   scores further
//!
//! A single round; player 1 starts.

mod config;
mod game;

pub use config::{AsocijacijeConfig, Column, ColumnClues, FIELD_COUNT};
pub use game::{
    column_points, final_points, AsocijacijeAction, AsocijacijeGame, AsocijacijeState, ColumnState,
    ASOCIJACIJE_CLOCK,
};
