//! Binary snapshot codec for play states.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::SnapshotError;

/// Encode a play state to bytes.
pub fn encode<S: Serialize>(state: &S) -> Result<Vec<u8>, SnapshotError> {
    Ok(bincode::serialize(state)?)
}

/// Decode a play state previously produced by [`encode`].
pub fn decode<S: DeserializeOwned>(bytes: &[u8]) -> Result<S, SnapshotError> {
    Ok(bincode::deserialize(bytes)?)
}
