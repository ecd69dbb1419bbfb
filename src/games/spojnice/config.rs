//! Spojnice configuration: ten key/value pairs per round.

use serde::{Deserialize, Serialize};

use super::game::PAIR_COUNT;
use crate::config::{require_text, GameConfiguration, GameKind};
use crate::core::Round;
use crate::error::ConfigError;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub key: String,
    pub value: String,
}

impl Pair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpojniceConfig {
    pub round1_pairs: Vec<Pair>,
    pub round2_pairs: Vec<Pair>,
    pub is_configured: bool,
}

impl SpojniceConfig {
    /// A configured pair of rounds.
    pub fn new(round1_pairs: Vec<Pair>, round2_pairs: Vec<Pair>) -> Self {
        Self {
            round1_pairs,
            round2_pairs,
            is_configured: true,
        }
    }

    #[must_use]
    pub fn pairs(&self, round: Round) -> &[Pair] {
        match round {
            Round::First => &self.round1_pairs,
            Round::Second => &self.round2_pairs,
        }
    }
}

impl GameConfiguration for SpojniceConfig {
    const KIND: GameKind = GameKind::Spojnice;

    fn is_configured(&self) -> bool {
        self.is_configured
    }

    fn validate_content(&self) -> Result<(), ConfigError> {
        for (name, pairs) in [("round1Pairs", &self.round1_pairs), ("round2Pairs", &self.round2_pairs)] {
            if pairs.len() != PAIR_COUNT {
                return Err(ConfigError::InvalidField {
                    game: Self::KIND,
                    field: name.to_string(),
                    reason: format!("expected {PAIR_COUNT} pairs, got {}", pairs.len()),
                });
            }
            for (index, pair) in pairs.iter().enumerate() {
                require_text(Self::KIND, format!("{name}[{index}].key"), &pair.key)?;
                require_text(Self::KIND, format!("{name}[{index}].value"), &pair.value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(prefix: &str) -> Vec<Pair> {
        (0..PAIR_COUNT)
            .map(|i| Pair::new(format!("{prefix}key{i}"), format!("{prefix}value{i}")))
            .collect()
    }

    #[test]
    fn test_valid_config() {
        let config = SpojniceConfig::new(pairs("a"), pairs("b"));
        assert!(config.validate().is_ok());
        assert_eq!(config.pairs(Round::Second)[3].value, "bvalue3");
    }

    #[test]
    fn test_wrong_pair_count() {
        let mut short = pairs("a");
        short.pop();
        let config = SpojniceConfig::new(pairs("a"), short);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidField { field, .. }) if field == "round2Pairs"
        ));
    }

    #[test]
    fn test_blank_value() {
        let mut round = pairs("a");
        round[7].value = " ".to_string();
        let config = SpojniceConfig::new(round, pairs("b"));
        assert_eq!(
            config.validate(),
            Err(ConfigError::MissingField {
                game: GameKind::Spojnice,
                field: "round1Pairs[7].value".to_string(),
            })
        );
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{"round1Pairs":[{"key":"k","value":"v"}],"round2Pairs":[],"isConfigured":false}"#;
        let config: SpojniceConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.round1_pairs, vec![Pair::new("k", "v")]);
        assert!(matches!(config.validate(), Err(ConfigError::NotConfigured { .. })));
    }
}
