//! Moj Broj configuration: one three-digit target per round.

use serde::{Deserialize, Serialize};

use crate::config::{GameConfiguration, GameKind};
use crate::core::Round;
use crate::error::ConfigError;

/// Allowed target range.
pub const TARGET_RANGE: std::ops::RangeInclusive<u32> = 100..=999;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MojBrojConfig {
    pub number1: u32,
    pub number2: u32,
    pub is_configured: bool,
}

impl MojBrojConfig {
    /// A configured pair of targets.
    #[must_use]
    pub fn new(number1: u32, number2: u32) -> Self {
        Self {
            number1,
            number2,
            is_configured: true,
        }
    }

    #[must_use]
    pub fn target(&self, round: Round) -> u32 {
        match round {
            Round::First => self.number1,
            Round::Second => self.number2,
        }
    }
}

impl GameConfiguration for MojBrojConfig {
    const KIND: GameKind = GameKind::MojBroj;

    fn is_configured(&self) -> bool {
        self.is_configured
    }

    fn validate_content(&self) -> Result<(), ConfigError> {
        for (field, number) in [("number1", self.number1), ("number2", self.number2)] {
            if !TARGET_RANGE.contains(&number) {
                return Err(ConfigError::InvalidField {
                    game: Self::KIND,
                    field: field.to_string(),
                    reason: format!("must be a 3-digit number (100-999), got {number}"),
                });
            }
        }
        Ok(())
    }
}
