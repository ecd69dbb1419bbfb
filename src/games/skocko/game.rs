//! Skočko round engine.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use super::config::{Sequence, SkockoConfig, Symbol, SEQUENCE_LEN};
use super::feedback::{feedback, Feedback};
use crate::config::{GameConfiguration, GameKind};
use crate::core::{Events, GameEvent, History, Phase, PlayerId, PlayerMap, Round, Scoreboard, TurnOrder};
use crate::error::{ActionError, ConfigError};
use crate::rules::engine::check_turn;
use crate::rules::{GameResult, RoundEngine};

/// Guesses the round's opener may make.
pub const MAX_ATTEMPTS: usize = 5;
/// Guesses the other player gets once the opener runs out.
pub const FINAL_ATTEMPTS: usize = 1;
/// Points for a solve by the player who did not open the round.
pub const SECOND_CHANCE_POINTS: u32 = 5;

const TURN_ORDER: TurnOrder = TurnOrder::Alternating;

/// Player actions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkockoAction {
    /// Append a symbol to the guess being built.
    PushSymbol(Symbol),
    /// Drop the last symbol of the guess being built.
    RemoveLast,
    /// Drop the whole guess being built.
    ClearGuess,
    /// Score the guess being built. It must be complete.
    LockIn,
    /// Score a complete guess in one step.
    Submit(Sequence),
}

/// A scored guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    pub symbols: Sequence,
    pub feedback: Feedback,
}

/// Points for solving on attempt `attempt` (1-based).
///
/// The opener earns `12 - 2 * attempt`; the other player always earns 5.
///
/// ```
/// use slagalica_engine::games::skocko::solve_points;
///
/// assert_eq!(solve_points(1, true), 10);
/// assert_eq!(solve_points(5, true), 2);
/// assert_eq!(solve_points(1, false), 5);
/// ```
#[must_use]
pub fn solve_points(attempt: usize, by_opener: bool) -> u32 {
    if by_opener {
        12u32.saturating_sub(2 * attempt as u32)
    } else {
        SECOND_CHANCE_POINTS
    }
}

/// Per-round record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeRound {
    pub opener: PlayerId,

    /// Scored guesses, in order, per player.
    pub guesses: PlayerMap<SmallVec<[Guess; MAX_ATTEMPTS]>>,

    /// Guess being built by the current player.
    pub draft: SmallVec<[Symbol; SEQUENCE_LEN]>,

    pub solved_by: Option<PlayerId>,

    /// Points each player earned this round, set when the round completes.
    pub round_points: PlayerMap<u32>,

    /// The secret, revealed once the round completes.
    pub revealed_secret: Option<Sequence>,
}

impl CodeRound {
    fn new(round: Round) -> Self {
        Self {
            opener: TURN_ORDER.opener(round),
            guesses: PlayerMap::default(),
            draft: SmallVec::new(),
            solved_by: None,
            round_points: PlayerMap::default(),
            revealed_secret: None,
        }
    }

    /// Guesses `player` may make this round.
    #[must_use]
    pub fn allowance(&self, player: PlayerId) -> usize {
        if player == self.opener {
            MAX_ATTEMPTS
        } else {
            FINAL_ATTEMPTS
        }
    }

    /// Guesses `player` has left this round.
    #[must_use]
    pub fn attempts_left(&self, player: PlayerId) -> usize {
        self.allowance(player).saturating_sub(self.guesses[player].len())
    }
}

/// Play state of a Skočko session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkockoState {
    pub round: Round,
    pub phase: Phase,
    pub current_player: PlayerId,
    pub scores: Scoreboard,
    pub code: CodeRound,
    pub history: History<SkockoAction>,
}

/// A Skočko session.
///
/// There is no pre-round countdown; each round starts active. `tick` is
/// accepted and does nothing.
#[derive(Clone, Debug)]
pub struct SkockoGame {
    config: SkockoConfig,
    state: SkockoState,
}

impl SkockoGame {
    pub fn new(config: &SkockoConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let round = Round::First;
        let code = CodeRound::new(round);
        let state = SkockoState {
            round,
            phase: Phase::Active,
            current_player: code.opener,
            scores: Scoreboard::new(),
            code,
            history: History::new(),
        };

        info!(game = %GameKind::Skocko, "session started");
        Ok(Self {
            config: config.clone(),
            state,
        })
    }

    /// Guess history of `player` for the current round.
    #[must_use]
    pub fn guesses(&self, player: PlayerId) -> &[Guess] {
        &self.state.code.guesses[player]
    }

    pub fn push_symbol(&mut self, player: PlayerId, symbol: Symbol) -> Result<Events, ActionError> {
        self.apply(player, &SkockoAction::PushSymbol(symbol))
    }

    pub fn remove_last(&mut self, player: PlayerId) -> Result<Events, ActionError> {
        self.apply(player, &SkockoAction::RemoveLast)
    }

    pub fn clear_guess(&mut self, player: PlayerId) -> Result<Events, ActionError> {
        self.apply(player, &SkockoAction::ClearGuess)
    }

    pub fn lock_in(&mut self, player: PlayerId) -> Result<Events, ActionError> {
        self.apply(player, &SkockoAction::LockIn)
    }

    pub fn submit_guess(&mut self, player: PlayerId, guess: Sequence) -> Result<Events, ActionError> {
        self.apply(player, &SkockoAction::Submit(guess))
    }

    fn check(&self, player: PlayerId, action: &SkockoAction) -> Result<(), ActionError> {
        check_turn(self.state.phase, self.state.current_player, player)?;

        let code = &self.state.code;
        if code.attempts_left(player) == 0 {
            return Err(ActionError::AttemptsExhausted(player));
        }
        match action {
            SkockoAction::PushSymbol(_) if code.draft.len() == SEQUENCE_LEN => Err(ActionError::GuessFull),
            SkockoAction::RemoveLast if code.draft.is_empty() => Err(ActionError::EmptySubmission),
            SkockoAction::LockIn if code.draft.len() < SEQUENCE_LEN => Err(ActionError::IncompleteGuess {
                expected: SEQUENCE_LEN,
                got: code.draft.len(),
            }),
            _ => Ok(()),
        }
    }

    fn score_guess(&mut self, player: PlayerId, symbols: Sequence, events: &mut Events) {
        let secret = self.config.secret(self.state.round);
        let result = feedback(&symbols, &secret);
        let code = &mut self.state.code;
        code.draft.clear();
        code.guesses[player].push(Guess {
            symbols,
            feedback: result,
        });
        let attempt = code.guesses[player].len();
        debug!(
            game = %GameKind::Skocko,
            player = %player,
            attempt,
            red = result.red,
            yellow = result.yellow,
            "guess scored"
        );

        if result.is_solved() {
            let points = solve_points(attempt, player == code.opener);
            code.solved_by = Some(player);
            code.round_points[player] = points;
            self.state.scores.award(player, points);
            events.push(GameEvent::ScoreAwarded { player, points });
            debug!(game = %GameKind::Skocko, player = %player, points, "points awarded");
            self.finish_round(events);
        } else if code.attempts_left(player) == 0 {
            let other = player.other();
            if code.attempts_left(other) > 0 && code.guesses[other].is_empty() {
                self.state.current_player = other;
                events.push(GameEvent::TurnPassed { to: other });
                debug!(game = %GameKind::Skocko, to = %other, "turn passed");
            } else {
                self.finish_round(events);
            }
        }
    }

    fn finish_round(&mut self, events: &mut Events) {
        self.state.code.revealed_secret = Some(self.config.secret(self.state.round));
        self.state.phase = Phase::RoundComplete;
        events.push(GameEvent::RoundComplete {
            round: self.state.round,
        });
        info!(game = %GameKind::Skocko, round = self.state.round.number(), "round complete");
    }
}

impl RoundEngine for SkockoGame {
    type Action = SkockoAction;
    type State = SkockoState;

    fn kind(&self) -> GameKind {
        GameKind::Skocko
    }

    fn state(&self) -> &SkockoState {
        &self.state
    }

    fn scores(&self) -> &Scoreboard {
        &self.state.scores
    }

    fn phase(&self) -> Phase {
        self.state.phase
    }

    fn round(&self) -> Round {
        self.state.round
    }

    fn current_player(&self) -> PlayerId {
        self.state.current_player
    }

    fn apply(&mut self, player: PlayerId, action: &SkockoAction) -> Result<Events, ActionError> {
        if let Err(err) = self.check(player, action) {
            debug!(game = %GameKind::Skocko, player = %player, ?action, %err, "action rejected");
            return Err(err);
        }

        let mut events = Events::new();
        let round = self.state.round;
        self.state.history.record(player, action.clone(), round);
        debug!(game = %GameKind::Skocko, player = %player, ?action, "action accepted");

        let draft = &mut self.state.code.draft;
        match *action {
            SkockoAction::PushSymbol(symbol) => draft.push(symbol),
            SkockoAction::RemoveLast => {
                draft.pop();
            }
            SkockoAction::ClearGuess => draft.clear(),
            SkockoAction::LockIn => {
                let mut symbols = [Symbol::Hearts; SEQUENCE_LEN];
                symbols.copy_from_slice(&draft[..]);
                self.score_guess(player, symbols, &mut events);
            }
            SkockoAction::Submit(symbols) => self.score_guess(player, symbols, &mut events),
        }

        Ok(events)
    }

    fn tick(&mut self) -> Events {
        Events::new()
    }

    fn advance_round(&mut self) -> Result<Events, ActionError> {
        match self.state.phase {
            Phase::RoundComplete => {}
            Phase::Finished => return Err(ActionError::SessionFinished),
            Phase::Countdown | Phase::Active => return Err(ActionError::RoundInProgress),
        }

        let mut events = Events::new();
        match self.state.round.next() {
            Some(next) => {
                self.state.round = next;
                self.state.phase = Phase::Active;
                self.state.code = CodeRound::new(next);
                self.state.current_player = self.state.code.opener;
                info!(game = %GameKind::Skocko, round = next.number(), "round started");
            }
            None => {
                self.state.phase = Phase::Finished;
                let result = GameResult::from_scores(&self.state.scores);
                events.push(GameEvent::GameEnded { result });
                info!(game = %GameKind::Skocko, ?result, "game ended");
            }
        }
        Ok(events)
    }
}
