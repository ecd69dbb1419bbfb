//! Slagalica: form the longest word from thirteen letter tiles.
//!
//! - The round's target word is padded with random letters to 13 tiles
//!   and shuffled once per round
//! - Player 1 builds a word tile by tile, may dismiss it, then saves it;
//!   player 2 does the same
//! - The longer word scores 10, +5 if it is exactly the target word
//! - Equal lengths go to player 1 in round 1 and player 2 in round 2
//!
//! Two rounds.

mod config;
mod game;

pub use config::SlagalicaConfig;
pub use game::{
    score_round, LetterBoard, PlayerWord, SlagalicaAction, SlagalicaGame, SlagalicaState,
    BASE_POINTS, SLAGALICA_COUNTDOWN, TARGET_BONUS, TILE_COUNT,
};
