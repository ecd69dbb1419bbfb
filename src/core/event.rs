//! Events emitted by accepted actions and ticks.
//!
//! The host renders from state; events tell it what just changed. The score
//! delta of an action is the sum of its `ScoreAwarded` events.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use super::turn::Round;
use crate::rules::GameResult;

/// Something observable that happened during play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The pre-round countdown ran out and play opened.
    CountdownExpired { round: Round },
    /// Control passed to another player.
    TurnPassed { to: PlayerId },
    /// Points were credited.
    ScoreAwarded { player: PlayerId, points: u32 },
    /// A round was scored.
    RoundComplete { round: Round },
    /// The session ended.
    GameEnded { result: GameResult },
}

/// Events from one call. Almost always fewer than four.
pub type Events = SmallVec<[GameEvent; 4]>;

/// Total points credited to `player` in `events`.
#[must_use]
pub fn score_delta(events: &[GameEvent], player: PlayerId) -> u32 {
    events
        .iter()
        .map(|event| match event {
            GameEvent::ScoreAwarded { player: p, points } if *p == player => *points,
            _ => 0,
        })
        .sum()
}
