//! Cumulative per-player scores.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerMap};

/// Session scores. Only ever increases; reset only by starting a new session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    points: PlayerMap<u32>,
}

impl Scoreboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add points to a player's total.
    pub fn award(&mut self, player: PlayerId, points: u32) {
        self.points[player] += points;
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> u32 {
        self.points[player]
    }

    /// The player ahead, or `None` when level.
    #[must_use]
    pub fn leader(&self) -> Option<PlayerId> {
        let one = self.get(PlayerId::ONE);
        let two = self.get(PlayerId::TWO);
        match one.cmp(&two) {
            std::cmp::Ordering::Greater => Some(PlayerId::ONE),
            std::cmp::Ordering::Less => Some(PlayerId::TWO),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl std::ops::Index<PlayerId> for Scoreboard {
    type Output = u32;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.points[player]
    }
}
