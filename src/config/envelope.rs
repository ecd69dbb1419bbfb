//! Versioned JSON envelope holding every game's configuration.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::{GameConfiguration, GameKind};
use crate::error::EnvelopeError;
use crate::games::asocijacije::AsocijacijeConfig;
use crate::games::moj_broj::MojBrojConfig;
use crate::games::skocko::SkockoConfig;
use crate::games::slagalica::SlagalicaConfig;
use crate::games::spojnice::SpojniceConfig;

/// Version written by `ConfigEnvelope::new`.
pub const ENVELOPE_VERSION: &str = "1.0";

/// All five configurations plus a format version.
///
/// A game that was never set up is `None` and is written as `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigEnvelope {
    pub version: String,
    #[serde(default)]
    pub slagalica: Option<SlagalicaConfig>,
    #[serde(default)]
    pub asocijacije: Option<AsocijacijeConfig>,
    #[serde(default)]
    pub moj_broj: Option<MojBrojConfig>,
    #[serde(default)]
    pub skocko: Option<SkockoConfig>,
    #[serde(default)]
    pub spojnice: Option<SpojniceConfig>,
}

impl Default for ConfigEnvelope {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigEnvelope {
    /// An empty envelope at the current version.
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: ENVELOPE_VERSION.to_string(),
            slagalica: None,
            asocijacije: None,
            moj_broj: None,
            skocko: None,
            spojnice: None,
        }
    }

    /// Parse an envelope.
    ///
    /// The payload must be a JSON object with a non-empty string `version`.
    /// Game entries are not validated here; see [`ConfigEnvelope::validate`].
    pub fn from_json(json: &str) -> Result<Self, EnvelopeError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Parse an envelope from a reader.
    pub fn from_reader(reader: impl std::io::Read) -> Result<Self, EnvelopeError> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(value)
    }

    fn from_value(value: Value) -> Result<Self, EnvelopeError> {
        let Some(object) = value.as_object() else {
            return Err(EnvelopeError::InvalidFormat("expected a JSON object".to_string()));
        };
        match object.get("version") {
            Some(Value::String(version)) if !version.is_empty() => {}
            _ => return Err(EnvelopeError::InvalidFormat("missing version".to_string())),
        }

        let envelope: Self = serde_json::from_value(value)?;
        debug!(version = %envelope.version, games = ?envelope.configured_games(), "configuration loaded");
        Ok(envelope)
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, EnvelopeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Games present and marked configured, in menu order.
    #[must_use]
    pub fn configured_games(&self) -> Vec<GameKind> {
        GameKind::ALL
            .into_iter()
            .filter(|&kind| self.is_configured(kind))
            .collect()
    }

    /// Whether `kind` is present and marked configured.
    #[must_use]
    pub fn is_configured(&self, kind: GameKind) -> bool {
        match kind {
            GameKind::Slagalica => self.slagalica.as_ref().is_some_and(|c| c.is_configured),
            GameKind::MojBroj => self.moj_broj.as_ref().is_some_and(|c| c.is_configured),
            GameKind::Skocko => self.skocko.as_ref().is_some_and(|c| c.is_configured),
            GameKind::Asocijacije => self.asocijacije.as_ref().is_some_and(|c| c.is_configured),
            GameKind::Spojnice => self.spojnice.as_ref().is_some_and(|c| c.is_configured),
        }
    }

    /// Validate every game marked configured.
    pub fn validate(&self) -> Result<(), EnvelopeError> {
        fn check<C: GameConfiguration>(config: Option<&C>) -> Result<(), EnvelopeError> {
            match config {
                Some(config) if config.is_configured() => Ok(config.validate()?),
                _ => Ok(()),
            }
        }

        check(self.slagalica.as_ref())?;
        check(self.moj_broj.as_ref())?;
        check(self.skocko.as_ref())?;
        check(self.asocijacije.as_ref())?;
        check(self.spojnice.as_ref())
    }
}
