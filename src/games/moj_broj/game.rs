//! Moj Broj round engine.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, trace};

use super::config::MojBrojConfig;
use super::expr::evaluate;
use crate::config::{GameConfiguration, GameKind};
use crate::core::{
    decide, Better, Countdown, Events, GameEvent, GameRng, History, Phase, PlayerId, PlayerMap,
    Round, Scoreboard, Tick, TieBreak, TurnOrder,
};
use crate::error::{ActionError, ConfigError, ExpressionError};
use crate::rules::engine::check_turn;
use crate::rules::{GameResult, RoundEngine};

/// Operands offered per round.
pub const NUMBER_COUNT: usize = 6;
/// Pre-round countdown, in ticks.
pub const MOJ_BROJ_COUNTDOWN: u32 = 10;
pub const MEDIUM_NUMBERS: [u32; 4] = [10, 15, 20, 25];
pub const LARGE_NUMBERS: [u32; 4] = [20, 50, 75, 100];

const MAX_POINTS: u64 = 10;
const TURN_ORDER: TurnOrder = TurnOrder::Alternating;
const TIE_BREAK: TieBreak = TieBreak::Opener;

/// Expression building blocks besides the numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Open,
    Close,
}

impl Operator {
    pub const ALL: [Operator; 6] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Open,
        Operator::Close,
    ];

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Open => '(',
            Operator::Close => ')',
        }
    }
}

/// Player actions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MojBrojAction {
    /// Append operand `index` to the expression. Each operand once.
    SelectNumber(usize),
    /// Append an operator or parenthesis.
    Operator(Operator),
    /// Clear the expression and release every operand.
    Clear,
    /// Evaluate and lock the expression.
    LockIn,
}

/// Outcome of a locked expression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Evaluation {
    Value(i64),
    Failed(ExpressionError),
}

impl Evaluation {
    fn of(expression: &str) -> Self {
        match evaluate(expression) {
            Ok(value) => Evaluation::Value(value),
            Err(err) => Evaluation::Failed(err),
        }
    }

    /// Distance to `target`; a failed expression is infinitely far.
    #[must_use]
    pub fn distance(&self, target: u32) -> u64 {
        match self {
            Evaluation::Value(value) => i64::from(target).abs_diff(*value),
            Evaluation::Failed(_) => u64::MAX,
        }
    }

    #[must_use]
    pub fn value(&self) -> Option<i64> {
        match self {
            Evaluation::Value(value) => Some(*value),
            Evaluation::Failed(_) => None,
        }
    }
}

/// One player's expression for the round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub expression: String,

    /// Operand indices already placed in the expression.
    pub used: SmallVec<[usize; NUMBER_COUNT]>,

    /// Set on lock-in.
    pub evaluation: Option<Evaluation>,
}

impl Submission {
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.evaluation.is_some()
    }
}

/// Per-round record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberRound {
    pub target: u32,

    /// Operands, frozen for the round.
    pub numbers: [u32; NUMBER_COUNT],

    pub opener: PlayerId,
    pub submissions: PlayerMap<Submission>,

    /// Points each player earned this round, set when the round completes.
    pub round_points: PlayerMap<u32>,
}

impl NumberRound {
    fn deal(target: u32, round: Round, rng: &mut GameRng) -> Self {
        let mut numbers = [0; NUMBER_COUNT];
        for digit in numbers.iter_mut().take(4) {
            *digit = rng.gen_range(1..10);
        }
        numbers[4] = rng.choose(&MEDIUM_NUMBERS).copied().unwrap_or(MEDIUM_NUMBERS[0]);
        numbers[5] = rng.choose(&LARGE_NUMBERS).copied().unwrap_or(LARGE_NUMBERS[0]);

        Self {
            target,
            numbers,
            opener: TURN_ORDER.opener(round),
            submissions: PlayerMap::default(),
            round_points: PlayerMap::default(),
        }
    }
}

/// Play state of a Moj Broj session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MojBrojState {
    pub round: Round,
    pub phase: Phase,
    pub countdown: Countdown,
    pub current_player: PlayerId,
    pub scores: Scoreboard,
    pub numbers: NumberRound,
    pub history: History<MojBrojAction>,
}

/// Points for a finished round.
///
/// Only the closer player scores, `max(0, 10 - distance)`. Equal distances
/// go to `tie_winner`.
///
/// ```
/// use slagalica_engine::core::{PlayerId, PlayerMap};
/// use slagalica_engine::games::moj_broj::{score_round, Evaluation};
///
/// let results = PlayerMap::new(|p| Evaluation::Value(if p == PlayerId::ONE { 498 } else { 510 }));
/// let points = score_round(500, &results, PlayerId::ONE);
/// assert_eq!(points[PlayerId::ONE], 8);
/// assert_eq!(points[PlayerId::TWO], 0);
/// ```
#[must_use]
pub fn score_round(target: u32, results: &PlayerMap<Evaluation>, tie_winner: PlayerId) -> PlayerMap<u32> {
    let distances = PlayerMap::new(|p| results[p].distance(target));
    let winner = decide(&distances, Better::Lower, tie_winner);

    let mut points = PlayerMap::with_value(0);
    points[winner] = MAX_POINTS.saturating_sub(distances[winner]) as u32;
    points
}

/// A Moj Broj session.
#[derive(Clone, Debug)]
pub struct MojBrojGame {
    config: MojBrojConfig,
    rng: GameRng,
    state: MojBrojState,
}

impl MojBrojGame {
    /// Start a session. Round 1 begins in its countdown.
    pub fn new(config: &MojBrojConfig, mut rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let round = Round::First;
        let state = MojBrojState {
            round,
            phase: Phase::Countdown,
            countdown: Countdown::start(MOJ_BROJ_COUNTDOWN),
            current_player: TURN_ORDER.opener(round),
            scores: Scoreboard::new(),
            numbers: NumberRound::deal(config.target(round), round, &mut rng),
            history: History::new(),
        };

        info!(game = %GameKind::MojBroj, seed = rng.seed(), "session started");
        Ok(Self {
            config: config.clone(),
            rng,
            state,
        })
    }

    /// Start a session with an entropy-seeded RNG.
    pub fn with_entropy(config: &MojBrojConfig) -> Result<Self, ConfigError> {
        Self::new(config, GameRng::from_entropy())
    }

    /// Target of the current round.
    #[must_use]
    pub fn target(&self) -> u32 {
        self.state.numbers.target
    }

    /// Operands of the current round.
    #[must_use]
    pub fn numbers(&self) -> &[u32; NUMBER_COUNT] {
        &self.state.numbers.numbers
    }

    pub fn select_number(&mut self, player: PlayerId, index: usize) -> Result<Events, ActionError> {
        self.apply(player, &MojBrojAction::SelectNumber(index))
    }

    pub fn push_operator(&mut self, player: PlayerId, operator: Operator) -> Result<Events, ActionError> {
        self.apply(player, &MojBrojAction::Operator(operator))
    }

    pub fn clear(&mut self, player: PlayerId) -> Result<Events, ActionError> {
        self.apply(player, &MojBrojAction::Clear)
    }

    pub fn lock_in(&mut self, player: PlayerId) -> Result<Events, ActionError> {
        self.apply(player, &MojBrojAction::LockIn)
    }

    fn check(&self, player: PlayerId, action: &MojBrojAction) -> Result<(), ActionError> {
        check_turn(self.state.phase, self.state.current_player, player)?;

        let submission = &self.state.numbers.submissions[player];
        if submission.is_locked() {
            return Err(ActionError::AlreadySubmitted(player));
        }
        if let MojBrojAction::SelectNumber(index) = *action {
            if index >= NUMBER_COUNT {
                return Err(ActionError::IndexOutOfRange {
                    index,
                    len: NUMBER_COUNT,
                });
            }
            if submission.used.contains(&index) {
                return Err(ActionError::AlreadyUsed);
            }
        }
        Ok(())
    }

    fn finish_round(&mut self, events: &mut Events) {
        let round = &mut self.state.numbers;
        let results = PlayerMap::new(|p| {
            round.submissions[p]
                .evaluation
                .clone()
                .unwrap_or(Evaluation::Failed(ExpressionError::Empty))
        });
        let tie_winner = TIE_BREAK.winner(self.state.round, round.opener);
        let points = score_round(round.target, &results, tie_winner);
        round.round_points = points.clone();

        for (player, &earned) in points.iter() {
            if earned > 0 {
                self.state.scores.award(player, earned);
                events.push(GameEvent::ScoreAwarded {
                    player,
                    points: earned,
                });
                debug!(game = %GameKind::MojBroj, player = %player, points = earned, "points awarded");
            }
        }

        self.state.phase = Phase::RoundComplete;
        events.push(GameEvent::RoundComplete {
            round: self.state.round,
        });
        info!(game = %GameKind::MojBroj, round = self.state.round.number(), "round complete");
    }
}

impl RoundEngine for MojBrojGame {
    type Action = MojBrojAction;
    type State = MojBrojState;

    fn kind(&self) -> GameKind {
        GameKind::MojBroj
    }

    fn state(&self) -> &MojBrojState {
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

    fn apply(&mut self, player: PlayerId, action: &MojBrojAction) -> Result<Events, ActionError> {
        if let Err(err) = self.check(player, action) {
            debug!(game = %GameKind::MojBroj, player = %player, ?action, %err, "action rejected");
            return Err(err);
        }

        let mut events = Events::new();
        let round = self.state.round;
        self.state.history.record(player, action.clone(), round);
        debug!(game = %GameKind::MojBroj, player = %player, ?action, "action accepted");

        let numbers = self.state.numbers.numbers;
        let submission = &mut self.state.numbers.submissions[player];
        match *action {
            MojBrojAction::SelectNumber(index) => {
                submission.used.push(index);
                submission.expression.push_str(&numbers[index].to_string());
            }
            MojBrojAction::Operator(operator) => {
                submission.expression.push(operator.symbol());
            }
            MojBrojAction::Clear => {
                submission.expression.clear();
                submission.used.clear();
            }
            MojBrojAction::LockIn => {
                let evaluation = Evaluation::of(&submission.expression);
                debug!(game = %GameKind::MojBroj, player = %player, ?evaluation, "expression locked");
                submission.evaluation = Some(evaluation);

                let other = player.other();
                if self.state.numbers.submissions[other].is_locked() {
                    self.finish_round(&mut events);
                } else {
                    self.state.current_player = other;
                    events.push(GameEvent::TurnPassed { to: other });
                }
            }
        }

        Ok(events)
    }

    fn tick(&mut self) -> Events {
        let mut events = Events::new();
        if self.state.phase != Phase::Countdown {
            return events;
        }
        match self.state.countdown.tick() {
            Tick::Expired => {
                self.state.phase = Phase::Active;
                self.state.current_player = self.state.numbers.opener;
                events.push(GameEvent::CountdownExpired {
                    round: self.state.round,
                });
                debug!(game = %GameKind::MojBroj, round = self.state.round.number(), "countdown expired");
            }
            Tick::Running { remaining } => {
                trace!(game = %GameKind::MojBroj, remaining, "tick");
            }
            Tick::Idle => {}
        }
        events
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
                self.state.phase = Phase::Countdown;
                self.state.countdown = Countdown::start(MOJ_BROJ_COUNTDOWN);
                self.state.numbers = NumberRound::deal(self.config.target(next), next, &mut self.rng);
                self.state.current_player = self.state.numbers.opener;
                info!(game = %GameKind::MojBroj, round = next.number(), "round started");
            }
            None => {
                self.state.phase = Phase::Finished;
                let result = GameResult::from_scores(&self.state.scores);
                events.push(GameEvent::GameEnded { result });
                info!(game = %GameKind::MojBroj, ?result, "game ended");
            }
        }
        Ok(events)
    }
}
