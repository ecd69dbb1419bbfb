//! Game configuration.
//!
//! Each game's configuration type lives next to its engine and implements
//! [`GameConfiguration`]. The engines refuse to start on a configuration
//! that is not marked configured or fails validation, even though the
//! setup forms upstream are expected to have checked it already.
//!
//! [`ConfigEnvelope`] is the versioned JSON document that carries all five
//! configurations between sessions.

pub mod envelope;

pub use envelope::{ConfigEnvelope, ENVELOPE_VERSION};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The five mini-games.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameKind {
    Slagalica,
    MojBroj,
    Skocko,
    Asocijacije,
    Spojnice,
}

impl GameKind {
    pub const ALL: [GameKind; 5] = [
        GameKind::Slagalica,
        GameKind::MojBroj,
        GameKind::Skocko,
        GameKind::Asocijacije,
        GameKind::Spojnice,
    ];

    /// Key of this game in the configuration envelope.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            GameKind::Slagalica => "slagalica",
            GameKind::MojBroj => "mojBroj",
            GameKind::Skocko => "skocko",
            GameKind::Asocijacije => "asocijacije",
            GameKind::Spojnice => "spojnice",
        }
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Game-master-authored content for one game.
pub trait GameConfiguration {
    /// Which game this configures.
    const KIND: GameKind;

    /// The `isConfigured` flag set by the setup form.
    fn is_configured(&self) -> bool;

    /// Check the content itself. Called after `is_configured`.
    fn validate_content(&self) -> Result<(), ConfigError>;

    /// Full check an engine runs before creating any play state.
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured { game: Self::KIND });
        }
        self.validate_content()
    }
}

/// Reject a blank (empty after trimming) text field.
pub(crate) fn require_text(game: GameKind, field: impl Into<String>, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingField {
            game,
            field: field.into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_match_envelope() {
        let keys: Vec<_> = GameKind::ALL.iter().map(|g| g.key()).collect();
        assert_eq!(keys, vec!["slagalica", "mojBroj", "skocko", "asocijacije", "spojnice"]);
        assert_eq!(serde_json::to_string(&GameKind::MojBroj).unwrap(), "\"mojBroj\"");
    }

    #[test]
    fn test_require_text() {
        assert!(require_text(GameKind::Spojnice, "key", "Rome").is_ok());
        assert_eq!(
            require_text(GameKind::Spojnice, "key", "   "),
            Err(ConfigError::MissingField {
                game: GameKind::Spojnice,
                field: "key".to_string(),
            })
        );
    }
}
