//! Error taxonomy.
//!
//! - `ConfigError`: the configuration handed to an engine is unusable. The
//!   only hard stop; raised before any play state exists.
//! - `ActionError`: an action was rejected. State is left untouched.
//! - `ExpressionError`: a Moj Broj expression failed to evaluate. Stored in
//!   the player's submission, not returned from `lock_in`.
//! - `EnvelopeError`: the persisted configuration envelope is malformed.
//! - `SnapshotError`: a binary play-state snapshot could not be encoded or
//!   decoded.
//! - `InvalidPlayer`: a seat number other than 1 or 2.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::GameKind;
use crate::core::PlayerId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{game} is not configured")]
    NotConfigured { game: GameKind },

    #[error("{game}: missing {field}")]
    MissingField { game: GameKind, field: String },

    #[error("{game}: invalid {field}: {reason}")]
    InvalidField {
        game: GameKind,
        field: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("the session has finished")]
    SessionFinished,

    #[error("the round is complete; advance to continue")]
    RoundComplete,

    #[error("the countdown is still running")]
    CountdownRunning,

    #[error("out of turn: {expected} is to act, not {got}")]
    OutOfTurn { expected: PlayerId, got: PlayerId },

    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("already used")]
    AlreadyUsed,

    #[error("{0} has already submitted this round")]
    AlreadySubmitted(PlayerId),

    #[error("nothing to submit")]
    EmptySubmission,

    #[error("already revealed")]
    AlreadyRevealed,

    #[error("no field of this column is revealed")]
    NothingRevealed,

    #[error("a field was already opened this turn")]
    BoxAlreadyOpened,

    #[error("open a field before guessing")]
    BoxNotOpened,

    #[error("{0} has no attempts left")]
    AttemptsExhausted(PlayerId),

    #[error("a guess needs {expected} symbols, got {got}")]
    IncompleteGuess { expected: usize, got: usize },

    #[error("the guess is already full")]
    GuessFull,

    #[error("the round is still in progress")]
    RoundInProgress,

    #[error("not available in this game")]
    NotAvailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ExpressionError {
    #[error("expression is empty")]
    Empty,

    #[error("invalid character {0:?} in expression")]
    InvalidCharacter(char),

    #[error("invalid expression: {0}")]
    Malformed(String),

    #[error("expression does not evaluate to a finite number")]
    NonFinite,
}

#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("invalid configuration file format: {0}")]
    InvalidFormat(String),

    #[error("configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot codec: {0}")]
    Codec(#[from] bincode::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("player number must be 1 or 2, got {0}")]
pub struct InvalidPlayer(pub u8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ConfigError::NotConfigured {
            game: GameKind::Skocko,
        };
        assert_eq!(err.to_string(), "skocko is not configured");

        let err = ActionError::OutOfTurn {
            expected: PlayerId::ONE,
            got: PlayerId::TWO,
        };
        assert_eq!(err.to_string(), "out of turn: Player 1 is to act, not Player 2");

        assert_eq!(
            ExpressionError::InvalidCharacter('x').to_string(),
            "invalid character 'x' in expression"
        );
    }
}
