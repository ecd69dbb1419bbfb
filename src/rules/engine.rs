//! Round engine trait for game implementations.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::GameKind;
use crate::core::{snapshot, Events, Phase, PlayerId, Round, Scoreboard};
use crate::error::{ActionError, SnapshotError};

/// Result of a completed session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Equal scores.
    Draw,
}

impl GameResult {
    /// Winner by higher cumulative score; level scores are a draw.
    #[must_use]
    pub fn from_scores(scores: &Scoreboard) -> Self {
        scores.leader().map_or(GameResult::Draw, GameResult::Winner)
    }
}

/// Round engine trait.
///
/// One value of an implementing type is one play session. It owns its
/// play state exclusively; every mutation goes through `apply`, `tick`
/// or `advance_round`.
///
/// ## Implementation Notes
///
/// - `apply`: reject with `ActionError` and leave state untouched when the
///   action is out of turn, targets something already resolved, or its
///   gating precondition does not hold
/// - `tick`: must be a no-op once the round or session is over
/// - `advance_round`: only legal in `Phase::RoundComplete`
pub trait RoundEngine {
    /// Player action type.
    type Action: Clone + std::fmt::Debug;

    /// Play state exposed to the host.
    type State: Clone + Serialize + DeserializeOwned;

    /// Which game this is.
    fn kind(&self) -> GameKind;

    /// Current play state.
    fn state(&self) -> &Self::State;

    /// Cumulative scores.
    fn scores(&self) -> &Scoreboard;

    /// Lifecycle phase.
    fn phase(&self) -> Phase;

    /// Current round.
    fn round(&self) -> Round;

    /// Player whose turn it is.
    fn current_player(&self) -> PlayerId;

    /// Apply a player's action.
    fn apply(&mut self, player: PlayerId, action: &Self::Action) -> Result<Events, ActionError>;

    /// Advance the clock by one unit.
    fn tick(&mut self) -> Events;

    /// Move from a completed round to the next one, or end the session
    /// after the last.
    fn advance_round(&mut self) -> Result<Events, ActionError>;

    // === Provided Methods ===

    /// Check if the session is over.
    fn is_finished(&self) -> bool {
        self.phase() == Phase::Finished
    }

    /// Final result, once the session is over.
    fn result(&self) -> Option<GameResult> {
        self.is_finished().then(|| GameResult::from_scores(self.scores()))
    }

    /// Owned copy of the play state.
    fn snapshot(&self) -> Self::State {
        self.state().clone()
    }

    /// Play state as bytes.
    fn encode_snapshot(&self) -> Result<Vec<u8>, SnapshotError> {
        snapshot::encode(self.state())
    }

    /// Read back bytes produced by `encode_snapshot`.
    fn decode_snapshot(bytes: &[u8]) -> Result<Self::State, SnapshotError>
    where
        Self: Sized,
    {
        snapshot::decode(bytes)
    }

    /// Drop the session, returning the scores as they stood.
    fn abandon(self) -> Scoreboard
    where
        Self: Sized,
    {
        info!(game = %self.kind(), round = self.round().number(), "session abandoned");
        self.scores().clone()
    }
}

/// Gate shared by every turn-based action: the phase must accept actions
/// and `player` must be the one to act.
pub(crate) fn check_turn(phase: Phase, current: PlayerId, player: PlayerId) -> Result<(), ActionError> {
    match phase {
        Phase::Finished => return Err(ActionError::SessionFinished),
        Phase::RoundComplete => return Err(ActionError::RoundComplete),
        Phase::Countdown => return Err(ActionError::CountdownRunning),
        Phase::Active => {}
    }
    if player != current {
        return Err(ActionError::OutOfTurn {
            expected: current,
            got: player,
        });
    }
    Ok(())
}
