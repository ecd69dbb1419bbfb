//! Slagalica configuration: one target word per round.

use serde::{Deserialize, Serialize};

use super::game::TILE_COUNT;
use crate::config::{require_text, GameConfiguration, GameKind};
use crate::core::Round;
use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlagalicaConfig {
    pub word1: String,
    pub word2: String,
    pub is_configured: bool,
}

impl SlagalicaConfig {
    /// A configured pair of target words.
    pub fn new(word1: impl Into<String>, word2: impl Into<String>) -> Self {
        Self {
            word1: word1.into(),
            word2: word2.into(),
            is_configured: true,
        }
    }

    /// Target word for a round, as entered.
    #[must_use]
    pub fn word(&self, round: Round) -> &str {
        match round {
            Round::First => &self.word1,
            Round::Second => &self.word2,
        }
    }
}

impl GameConfiguration for SlagalicaConfig {
    const KIND: GameKind = GameKind::Slagalica;

    fn is_configured(&self) -> bool {
        self.is_configured
    }

    fn validate_content(&self) -> Result<(), ConfigError> {
        for (field, word) in [("word1", &self.word1), ("word2", &self.word2)] {
            require_text(Self::KIND, field, word)?;

            let invalid = |reason: &str| ConfigError::InvalidField {
                game: Self::KIND,
                field: field.to_string(),
                reason: reason.to_string(),
            };
            if !word.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(invalid("must contain only letters"));
            }
            if word.chars().count() > TILE_COUNT {
                return Err(invalid("must be at most 13 letters long"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = SlagalicaConfig::new("cat", "KONOBAR");
        assert!(config.validate().is_ok());
        assert_eq!(config.word(Round::Second), "KONOBAR");
    }

    #[test]
    fn test_not_configured() {
        let mut config = SlagalicaConfig::new("cat", "dog");
        config.is_configured = false;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotConfigured { game: GameKind::Slagalica })
        );
    }

    #[test]
    fn test_rejects_bad_words() {
        assert!(matches!(
            SlagalicaConfig::new("", "dog").validate(),
            Err(ConfigError::MissingField { .. })
        ));
        assert!(matches!(
            SlagalicaConfig::new("two words", "dog").validate(),
            Err(ConfigError::InvalidField { .. })
        ));
        assert!(matches!(
            SlagalicaConfig::new("cat", "abcdefghijklmn").validate(),
            Err(ConfigError::InvalidField { .. })
        ));
        assert!(SlagalicaConfig::new("abcdefghijklm", "dog").validate().is_ok());
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{"word1":"CAT","word2":"DOG","isConfigured":true}"#;
        let config: SlagalicaConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config, SlagalicaConfig::new("CAT", "DOG"));
    }
}
