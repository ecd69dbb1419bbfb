//! Skočko configuration: one secret sequence per round.

use serde::{Deserialize, Serialize};

use crate::config::{GameConfiguration, GameKind};
use crate::core::Round;
use crate::error::ConfigError;

/// Symbols in a sequence.
pub const SEQUENCE_LEN: usize = 4;

/// The six-symbol alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    Hearts,
    Spades,
    Clubs,
    Diamonds,
    Skocko,
    Fata,
}

impl Symbol {
    pub const ALL: [Symbol; 6] = [
        Symbol::Hearts,
        Symbol::Spades,
        Symbol::Clubs,
        Symbol::Diamonds,
        Symbol::Skocko,
        Symbol::Fata,
    ];
}

/// A secret or a guess.
pub type Sequence = [Symbol; SEQUENCE_LEN];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkockoConfig {
    pub sequence1: Sequence,
    pub sequence2: Sequence,
    pub is_configured: bool,
}

impl SkockoConfig {
    /// A configured pair of secrets.
    #[must_use]
    pub fn new(sequence1: Sequence, sequence2: Sequence) -> Self {
        Self {
            sequence1,
            sequence2,
            is_configured: true,
        }
    }

    #[must_use]
    pub fn secret(&self, round: Round) -> Sequence {
        match round {
            Round::First => self.sequence1,
            Round::Second => self.sequence2,
        }
    }
}

impl GameConfiguration for SkockoConfig {
    const KIND: GameKind = GameKind::Skocko;

    fn is_configured(&self) -> bool {
        self.is_configured
    }

    // Length and alphabet are enforced by the type.
    fn validate_content(&self) -> Result<(), ConfigError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let json = r#"{
            "sequence1": ["hearts", "spades", "clubs", "diamonds"],
            "sequence2": ["skocko", "fata", "fata", "hearts"],
            "isConfigured": true
        }"#;
        let config: SkockoConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.secret(Round::Second)[0], Symbol::Skocko);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_short_sequence_fails_to_parse() {
        let json = r#"{"sequence1":["hearts"],"sequence2":["hearts","hearts","hearts","hearts"],"isConfigured":true}"#;
        assert!(serde_json::from_str::<SkockoConfig>(json).is_err());
    }

    #[test]
    fn test_unknown_symbol_fails_to_parse() {
        let json = r#"{"sequence1":["star","hearts","hearts","hearts"],"sequence2":["hearts","hearts","hearts","hearts"],"isConfigured":true}"#;
        assert!(serde_json::from_str::<SkockoConfig>(json).is_err());
    }

    #[test]
    fn test_not_configured() {
        let mut config = SkockoConfig::new([Symbol::Fata; 4], [Symbol::Fata; 4]);
        config.is_configured = false;
        assert!(matches!(config.validate(), Err(ConfigError::NotConfigured { .. })));
    }
}
