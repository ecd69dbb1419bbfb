//! Asocijacije game engine.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::config::{AsocijacijeConfig, Column, FIELD_COUNT};
use crate::config::{GameConfiguration, GameKind};
use crate::core::{Countdown, Events, GameEvent, History, Phase, PlayerId, Round, Scoreboard, Tick};
use crate::error::{ActionError, ConfigError};
use crate::rules::engine::check_turn;
use crate::rules::{GameResult, RoundEngine};

/// Game clock, in ticks. Runs from the first moment of play.
pub const ASOCIJACIJE_CLOCK: u32 = 180;

/// Player actions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AsocijacijeAction {
    /// Reveal one clue. At most one per turn.
    OpenField { column: Column, field: usize },
    /// Guess a column's solution.
    GuessColumn { column: Column, answer: String },
    /// Guess the final solution.
    GuessFinal(String),
    /// Hand the turn to the other player.
    Yield,
}

/// Reveal and ownership state of one column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnState {
    pub revealed: [bool; FIELD_COUNT],
    pub solution_revealed: bool,
    pub solved_by: Option<PlayerId>,
}

impl ColumnState {
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|&&r| r).count()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved_by.is_some()
    }

    fn reveal_all(&mut self) {
        self.revealed = [true; FIELD_COUNT];
        self.solution_revealed = true;
    }
}

/// Points for solving a column with `revealed` clues showing.
#[must_use]
pub const fn column_points(revealed: usize) -> u32 {
    12 - 2 * revealed as u32
}

/// Points for the final solution with `solved_columns` already solved.
///
/// ```
/// use slagalica_engine::games::asocijacije::final_points;
///
/// assert_eq!(final_points(0), 50);
/// assert_eq!(final_points(4), 10);
/// ```
#[must_use]
pub const fn final_points(solved_columns: usize) -> u32 {
    50 - 10 * solved_columns as u32
}

fn matches_answer(answer: &str, solution: &str) -> bool {
    answer.trim().to_lowercase() == solution.trim().to_lowercase()
}

/// Play state of an Asocijacije session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsocijacijeState {
    pub phase: Phase,
    pub clock: Countdown,
    pub current_player: PlayerId,
    pub scores: Scoreboard,

    /// Indexed by `Column::index`.
    pub columns: [ColumnState; 4],

    pub final_revealed: bool,
    pub final_solved_by: Option<PlayerId>,

    /// Set once the current player has opened a clue this turn.
    pub box_opened_this_turn: bool,

    pub history: History<AsocijacijeAction>,
}

impl AsocijacijeState {
    #[must_use]
    pub fn column(&self, column: Column) -> &ColumnState {
        &self.columns[column.index()]
    }

    fn column_mut(&mut self, column: Column) -> &mut ColumnState {
        &mut self.columns[column.index()]
    }

    fn solved_count(&self) -> usize {
        self.columns.iter().filter(|c| c.is_solved()).count()
    }

    /// Whether any clue is still closed in an unsolved column.
    fn has_closed_field(&self) -> bool {
        self.columns
            .iter()
            .any(|c| !c.solution_revealed && c.revealed.iter().any(|&r| !r))
    }
}

/// An Asocijacije session.
///
/// A single round under one game clock. `advance_round` is not available.
#[derive(Clone, Debug)]
pub struct AsocijacijeGame {
    config: AsocijacijeConfig,
    state: AsocijacijeState,
}

impl AsocijacijeGame {
    /// Start a session. Play and the game clock start immediately, player 1
    /// first.
    pub fn new(config: &AsocijacijeConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let state = AsocijacijeState {
            phase: Phase::Active,
            clock: Countdown::start(ASOCIJACIJE_CLOCK),
            current_player: PlayerId::ONE,
            scores: Scoreboard::new(),
            columns: Default::default(),
            final_revealed: false,
            final_solved_by: None,
            box_opened_this_turn: false,
            history: History::new(),
        };

        info!(game = %GameKind::Asocijacije, clock = ASOCIJACIJE_CLOCK, "session started");
        Ok(Self {
            config: config.clone(),
            state,
        })
    }

    /// Ticks left on the game clock.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.state.clock.remaining()
    }

    /// Text of a clue, if revealed.
    #[must_use]
    pub fn visible_field(&self, column: Column, field: usize) -> Option<&str> {
        let revealed = *self.state.column(column).revealed.get(field)?;
        revealed.then(|| self.config.column(column).field(field)).flatten()
    }

    /// A column's solution, if revealed.
    #[must_use]
    pub fn visible_solution(&self, column: Column) -> Option<&str> {
        self.state
            .column(column)
            .solution_revealed
            .then(|| self.config.column(column).solution.as_str())
    }

    /// The final solution, if revealed.
    #[must_use]
    pub fn visible_final(&self) -> Option<&str> {
        self.state.final_revealed.then(|| self.config.final_solution.as_str())
    }

    pub fn open_field(&mut self, player: PlayerId, column: Column, field: usize) -> Result<Events, ActionError> {
        self.apply(player, &AsocijacijeAction::OpenField { column, field })
    }

    pub fn guess_column(
        &mut self,
        player: PlayerId,
        column: Column,
        answer: impl Into<String>,
    ) -> Result<Events, ActionError> {
        self.apply(
            player,
            &AsocijacijeAction::GuessColumn {
                column,
                answer: answer.into(),
            },
        )
    }

    pub fn guess_final(&mut self, player: PlayerId, answer: impl Into<String>) -> Result<Events, ActionError> {
        self.apply(player, &AsocijacijeAction::GuessFinal(answer.into()))
    }

    pub fn yield_turn(&mut self, player: PlayerId) -> Result<Events, ActionError> {
        self.apply(player, &AsocijacijeAction::Yield)
    }

    /// Guessing needs a clue opened this turn, unless none is left to open.
    fn may_guess(&self) -> bool {
        self.state.box_opened_this_turn || !self.state.has_closed_field()
    }

    fn check(&self, player: PlayerId, action: &AsocijacijeAction) -> Result<(), ActionError> {
        check_turn(self.state.phase, self.state.current_player, player)?;

        match action {
            AsocijacijeAction::OpenField { column, field } => {
                if *field >= FIELD_COUNT {
                    return Err(ActionError::IndexOutOfRange {
                        index: *field,
                        len: FIELD_COUNT,
                    });
                }
                if self.state.box_opened_this_turn {
                    return Err(ActionError::BoxAlreadyOpened);
                }
                let state = self.state.column(*column);
                if state.solution_revealed || state.revealed[*field] {
                    return Err(ActionError::AlreadyRevealed);
                }
            }
            AsocijacijeAction::GuessColumn { column, answer } => {
                if answer.trim().is_empty() {
                    return Err(ActionError::EmptySubmission);
                }
                let state = self.state.column(*column);
                if state.solution_revealed {
                    return Err(ActionError::AlreadyRevealed);
                }
                if state.revealed_count() == 0 {
                    return Err(ActionError::NothingRevealed);
                }
                if !self.may_guess() {
                    return Err(ActionError::BoxNotOpened);
                }
            }
            AsocijacijeAction::GuessFinal(answer) => {
                if answer.trim().is_empty() {
                    return Err(ActionError::EmptySubmission);
                }
                if !self.may_guess() {
                    return Err(ActionError::BoxNotOpened);
                }
            }
            AsocijacijeAction::Yield => {
                if !self.may_guess() {
                    return Err(ActionError::BoxNotOpened);
                }
            }
        }
        Ok(())
    }

    fn switch_player(&mut self, events: &mut Events) {
        let next = self.state.current_player.other();
        self.state.current_player = next;
        self.state.box_opened_this_turn = false;
        events.push(GameEvent::TurnPassed { to: next });
        debug!(game = %GameKind::Asocijacije, to = %next, "turn passed");
    }

    fn award(&mut self, player: PlayerId, points: u32, events: &mut Events) {
        self.state.scores.award(player, points);
        events.push(GameEvent::ScoreAwarded { player, points });
        debug!(game = %GameKind::Asocijacije, player = %player, points, "points awarded");
    }

    fn end_game(&mut self, events: &mut Events) {
        self.state.clock.stop();
        self.state.phase = Phase::Finished;
        let result = GameResult::from_scores(&self.state.scores);
        events.push(GameEvent::GameEnded { result });
        info!(game = %GameKind::Asocijacije, ?result, "game ended");
    }
}

impl RoundEngine for AsocijacijeGame {
    type Action = AsocijacijeAction;
    type State = AsocijacijeState;

    fn kind(&self) -> GameKind {
        GameKind::Asocijacije
    }

    fn state(&self) -> &AsocijacijeState {
        &self.state
    }

    fn scores(&self) -> &Scoreboard {
        &self.state.scores
    }

    fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Always the first round; the game has only one.
    fn round(&self) -> Round {
        Round::First
    }

    fn current_player(&self) -> PlayerId {
        self.state.current_player
    }

    fn apply(&mut self, player: PlayerId, action: &AsocijacijeAction) -> Result<Events, ActionError> {
        if let Err(err) = self.check(player, action) {
            debug!(game = %GameKind::Asocijacije, player = %player, ?action, %err, "action rejected");
            return Err(err);
        }

        let mut events = Events::new();
        self.state.history.record(player, action.clone(), Round::First);
        debug!(game = %GameKind::Asocijacije, player = %player, ?action, "action accepted");

        match action {
            AsocijacijeAction::OpenField { column, field } => {
                self.state.column_mut(*column).revealed[*field] = true;
                self.state.box_opened_this_turn = true;
            }
            AsocijacijeAction::GuessColumn { column, answer } => {
                if matches_answer(answer, &self.config.column(*column).solution) {
                    let points = column_points(self.state.column(*column).revealed_count());
                    let state = self.state.column_mut(*column);
                    state.reveal_all();
                    state.solved_by = Some(player);
                    self.award(player, points, &mut events);
                    info!(game = %GameKind::Asocijacije, player = %player, %column, "column solved");
                } else {
                    self.switch_player(&mut events);
                }
            }
            AsocijacijeAction::GuessFinal(answer) => {
                if matches_answer(answer, &self.config.final_solution) {
                    let points = final_points(self.state.solved_count());
                    self.state.final_revealed = true;
                    self.state.final_solved_by = Some(player);
                    // Unsolved columns go to the solver but keep their clues hidden.
                    for state in self.state.columns.iter_mut().filter(|c| !c.is_solved()) {
                        state.solved_by = Some(player);
                    }
                    self.award(player, points, &mut events);
                    self.end_game(&mut events);
                } else {
                    self.switch_player(&mut events);
                }
            }
            AsocijacijeAction::Yield => self.switch_player(&mut events),
        }

        Ok(events)
    }

    fn tick(&mut self) -> Events {
        let mut events = Events::new();
        if self.state.phase != Phase::Active {
            return events;
        }
        match self.state.clock.tick() {
            Tick::Expired => {
                for state in &mut self.state.columns {
                    state.reveal_all();
                }
                self.state.final_revealed = true;
                info!(game = %GameKind::Asocijacije, "clock expired; board revealed");
                self.end_game(&mut events);
            }
            Tick::Running { remaining } => {
                trace!(game = %GameKind::Asocijacije, remaining, "tick");
            }
            Tick::Idle => {}
        }
        events
    }

    fn advance_round(&mut self) -> Result<Events, ActionError> {
        if self.state.phase == Phase::Finished {
            return Err(ActionError::SessionFinished);
        }
        Err(ActionError::NotAvailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::asocijacije::ColumnClues;

    fn game() -> AsocijacijeGame {
        let column = |letter: char| ColumnClues {
            field1: format!("{letter}1"),
            field2: format!("{letter}2"),
            field3: format!("{letter}3"),
            field4: format!("{letter}4"),
            solution: format!("Solution {letter}"),
        };
        let config = AsocijacijeConfig::new([column('A'), column('B'), column('C'), column('D')], "Final");
        AsocijacijeGame::new(&config).unwrap()
    }

    #[test]
    fn test_one_field_per_turn() {
        let mut game = game();
        game.open_field(PlayerId::ONE, Column::A, 0).unwrap();
        assert_eq!(game.open_field(PlayerId::ONE, Column::B, 0), Err(ActionError::BoxAlreadyOpened));
        assert_eq!(game.visible_field(Column::A, 0), Some("A1"));
        assert_eq!(game.visible_field(Column::A, 1), None);
    }

    #[test]
    fn test_reopen_rejected() {
        let mut game = game();
        game.open_field(PlayerId::ONE, Column::A, 0).unwrap();
        game.yield_turn(PlayerId::ONE).unwrap();
        assert_eq!(game.open_field(PlayerId::TWO, Column::A, 0), Err(ActionError::AlreadyRevealed));
        assert_eq!(
            game.open_field(PlayerId::TWO, Column::A, 4),
            Err(ActionError::IndexOutOfRange { index: 4, len: 4 })
        );
    }

    #[test]
    fn test_guess_requires_open_box() {
        let mut game = game();
        assert_eq!(game.guess_final(PlayerId::ONE, "Final"), Err(ActionError::BoxNotOpened));
        assert_eq!(
            game.guess_column(PlayerId::ONE, Column::A, "Solution A"),
            Err(ActionError::NothingRevealed)
        );
    }

    #[test]
    fn test_yield_requires_open_box() {
        let mut game = game();
        assert_eq!(game.yield_turn(PlayerId::ONE), Err(ActionError::BoxNotOpened));
        assert_eq!(game.current_player(), PlayerId::ONE);
        assert!(game.state().history.is_empty());

        game.open_field(PlayerId::ONE, Column::B, 2).unwrap();
        let events = game.yield_turn(PlayerId::ONE).unwrap();
        assert_eq!(events.as_slice(), &[GameEvent::TurnPassed { to: PlayerId::TWO }]);
        assert_eq!(game.yield_turn(PlayerId::TWO), Err(ActionError::BoxNotOpened));
    }

    #[test]
    fn test_column_solve_keeps_turn() {
        let mut game = game();
        game.open_field(PlayerId::ONE, Column::A, 0).unwrap();
        let events = game.guess_column(PlayerId::ONE, Column::A, "  solution a ").unwrap();

        assert_eq!(
            events.as_slice(),
            &[GameEvent::ScoreAwarded {
                player: PlayerId::ONE,
                points: 10
            }]
        );
        assert_eq!(game.current_player(), PlayerId::ONE);
        assert_eq!(game.visible_solution(Column::A), Some("Solution A"));
        assert_eq!(game.state().column(Column::A).revealed_count(), 4);
        assert_eq!(game.state().column(Column::A).solved_by, Some(PlayerId::ONE));
        assert_eq!(
            game.guess_column(PlayerId::ONE, Column::A, "Solution A"),
            Err(ActionError::AlreadyRevealed)
        );
    }

    #[test]
    fn test_wrong_guess_switches_and_resets_gate() {
        let mut game = game();
        game.open_field(PlayerId::ONE, Column::B, 2).unwrap();
        let events = game.guess_column(PlayerId::ONE, Column::B, "nope").unwrap();
        assert_eq!(events.as_slice(), &[GameEvent::TurnPassed { to: PlayerId::TWO }]);
        assert!(!game.state().box_opened_this_turn);
        assert_eq!(
            game.guess_column(PlayerId::TWO, Column::B, "Solution B"),
            Err(ActionError::BoxNotOpened)
        );
    }

    #[test]
    fn test_final_guess_claims_unsolved_columns() {
        let mut game = game();
        game.open_field(PlayerId::ONE, Column::A, 0).unwrap();
        game.guess_column(PlayerId::ONE, Column::A, "Solution A").unwrap();
        let events = game.guess_final(PlayerId::ONE, "final").unwrap();

        assert_eq!(game.scores()[PlayerId::ONE], 10 + 40);
        assert!(events.contains(&GameEvent::GameEnded {
            result: GameResult::Winner(PlayerId::ONE)
        }));
        assert!(game.is_finished());
        assert_eq!(game.visible_final(), Some("Final"));
        for column in [Column::B, Column::C, Column::D] {
            let state = game.state().column(column);
            assert_eq!(state.solved_by, Some(PlayerId::ONE));
            assert!(!state.solution_revealed);
        }
    }

    #[test]
    fn test_clock_expiry_reveals_everything() {
        let mut game = game();
        for _ in 0..ASOCIJACIJE_CLOCK - 1 {
            assert!(game.tick().is_empty());
        }
        assert_eq!(game.remaining(), 1);

        let events = game.tick();
        assert_eq!(events.as_slice(), &[GameEvent::GameEnded { result: GameResult::Draw }]);
        assert!(game.state().columns.iter().all(|c| c.solution_revealed && c.revealed_count() == 4));
        assert!(game.state().columns.iter().all(|c| c.solved_by.is_none()));
        assert_eq!(game.visible_final(), Some("Final"));

        let before = game.state().clone();
        assert!(game.tick().is_empty());
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn test_no_advance_round() {
        let mut game = game();
        assert_eq!(game.advance_round(), Err(ActionError::NotAvailable));
    }

    #[test]
    fn test_point_tables() {
        assert_eq!(column_points(1), 10);
        assert_eq!(column_points(4), 4);
        assert_eq!(final_points(2), 30);
    }
}
