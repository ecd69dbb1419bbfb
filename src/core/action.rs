//! Action history.
//!
//! Each game defines its own action enum (the "verb" plus its target). The
//! engine stamps every accepted action with who played it, in which round
//! and in what order, and appends it to the play state's history.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::turn::Round;

/// Record of an accepted action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord<A> {
    /// Player who took the action.
    pub player: PlayerId,

    /// The action taken.
    pub action: A,

    /// Round in which it was taken.
    pub round: Round,

    /// Session-wide sequence number, starting at 0.
    pub sequence: u32,
}

/// Append-only log of accepted actions.
///
/// Backed by `im::Vector` so cloning a play state for a snapshot is O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct History<A: Clone> {
    records: Vector<ActionRecord<A>>,
}

impl<A: Clone> Default for History<A> {
    fn default() -> Self {
        Self {
            records: Vector::new(),
        }
    }
}

impl<A: Clone> History<A> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action and return its sequence number.
    pub fn record(&mut self, player: PlayerId, action: A, round: Round) -> u32 {
        let sequence = self.records.len() as u32;
        self.records.push_back(ActionRecord {
            player,
            action,
            round,
            sequence,
        });
        sequence
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&ActionRecord<A>> {
        self.records.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActionRecord<A>> {
        self.records.iter()
    }
}
