//! Spojnice: match ten keys to their shuffled values.
//!
//! - Keys are offered in order; the player picks a value for the
//!   highlighted key
//! - A correct match scores 2; right or wrong, the next unmatched key is
//!   highlighted and the same player goes on
//! - When the round's opener passes the last key, the other player gets
//!   one pass over the keys still unmatched, then the round ends
//! - Player 1 opens round 1, player 2 opens round 2
//!
//! Two rounds.

mod config;
mod game;

pub use config::{Pair, SpojniceConfig};
pub use game::{MatchRound, SpojniceAction, SpojniceGame, SpojniceState, MATCH_POINTS, PAIR_COUNT};
