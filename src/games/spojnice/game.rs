//! Spojnice round engine.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::config::SpojniceConfig;
use crate::config::{GameConfiguration, GameKind};
use crate::core::{Events, GameEvent, GameRng, History, Phase, PlayerId, PlayerMap, Round, Scoreboard, TurnOrder};
use crate::error::{ActionError, ConfigError};
use crate::rules::engine::check_turn;
use crate::rules::{GameResult, RoundEngine};

/// Pairs per round.
pub const PAIR_COUNT: usize = 10;
/// Points for a correct match.
pub const MATCH_POINTS: u32 = 2;

const TURN_ORDER: TurnOrder = TurnOrder::Alternating;
const IDENTITY: [usize; PAIR_COUNT] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Player actions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpojniceAction {
    /// Offer the value shown at display position `n` for the highlighted key.
    ChooseValue(usize),
}

/// Per-round record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRound {
    pub opener: PlayerId,

    /// Display position to pair index. Shuffled at round start, reset to
    /// identity when the round completes.
    pub value_order: [usize; PAIR_COUNT],

    /// Who matched each pair, by pair index.
    pub matched_by: [Option<PlayerId>; PAIR_COUNT],

    /// Highlighted key.
    pub cursor: usize,

    /// Points each player earned this round.
    pub round_points: PlayerMap<u32>,
}

impl MatchRound {
    fn deal(round: Round, rng: &mut GameRng) -> Self {
        let mut value_order = IDENTITY;
        rng.shuffle(&mut value_order);
        Self {
            opener: TURN_ORDER.opener(round),
            value_order,
            matched_by: [None; PAIR_COUNT],
            cursor: 0,
            round_points: PlayerMap::default(),
        }
    }

    #[must_use]
    pub fn is_matched(&self, pair: usize) -> bool {
        self.matched_by.get(pair).is_some_and(Option::is_some)
    }

    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched_by.iter().filter(|m| m.is_some()).count()
    }

    fn next_unmatched(&self, from: usize) -> Option<usize> {
        (from..PAIR_COUNT).find(|&i| !self.is_matched(i))
    }
}

/// Play state of a Spojnice session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpojniceState {
    pub round: Round,
    pub phase: Phase,
    pub current_player: PlayerId,
    pub scores: Scoreboard,
    pub board: MatchRound,
    pub history: History<SpojniceAction>,
}

/// A Spojnice session.
///
/// Rounds start active; `tick` is accepted and does nothing.
#[derive(Clone, Debug)]
pub struct SpojniceGame {
    config: SpojniceConfig,
    rng: GameRng,
    state: SpojniceState,
}

impl SpojniceGame {
    pub fn new(config: &SpojniceConfig, mut rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let round = Round::First;
        let board = MatchRound::deal(round, &mut rng);
        let state = SpojniceState {
            round,
            phase: Phase::Active,
            current_player: board.opener,
            scores: Scoreboard::new(),
            board,
            history: History::new(),
        };

        info!(game = %GameKind::Spojnice, seed = rng.seed(), "session started");
        Ok(Self {
            config: config.clone(),
            rng,
            state,
        })
    }

    pub fn with_entropy(config: &SpojniceConfig) -> Result<Self, ConfigError> {
        Self::new(config, GameRng::from_entropy())
    }

    /// Index of the highlighted key.
    #[must_use]
    pub fn highlighted_key(&self) -> usize {
        self.state.board.cursor
    }

    /// Display order of the values, as pair indices.
    #[must_use]
    pub fn value_order(&self) -> &[usize; PAIR_COUNT] {
        &self.state.board.value_order
    }

    /// Value text at display position `position`.
    #[must_use]
    pub fn value_at(&self, position: usize) -> Option<&str> {
        let pair = *self.state.board.value_order.get(position)?;
        self.config
            .pairs(self.state.round)
            .get(pair)
            .map(|p| p.value.as_str())
    }

    pub fn choose_value(&mut self, player: PlayerId, position: usize) -> Result<Events, ActionError> {
        self.apply(player, &SpojniceAction::ChooseValue(position))
    }

    fn check(&self, player: PlayerId, action: &SpojniceAction) -> Result<(), ActionError> {
        check_turn(self.state.phase, self.state.current_player, player)?;

        let SpojniceAction::ChooseValue(position) = *action;
        if position >= PAIR_COUNT {
            return Err(ActionError::IndexOutOfRange {
                index: position,
                len: PAIR_COUNT,
            });
        }
        if self.state.board.is_matched(self.state.board.value_order[position]) {
            return Err(ActionError::AlreadyUsed);
        }
        Ok(())
    }

    /// Move past the highlighted key, handing over or ending the round at
    /// the end of the list.
    fn advance_cursor(&mut self, player: PlayerId, events: &mut Events) {
        let board = &mut self.state.board;
        if board.matched_count() == PAIR_COUNT {
            self.finish_round(events);
            return;
        }
        if let Some(next) = board.next_unmatched(board.cursor + 1) {
            board.cursor = next;
            return;
        }
        if player != board.opener {
            self.finish_round(events);
            return;
        }
        // The opener reached the last key; the other player gets one pass
        // over what is left.
        if let Some(first) = board.next_unmatched(0) {
            board.cursor = first;
        }
        let other = player.other();
        self.state.current_player = other;
        events.push(GameEvent::TurnPassed { to: other });
        debug!(game = %GameKind::Spojnice, to = %other, "turn passed");
    }

    fn finish_round(&mut self, events: &mut Events) {
        self.state.board.value_order = IDENTITY;
        self.state.phase = Phase::RoundComplete;
        events.push(GameEvent::RoundComplete {
            round: self.state.round,
        });
        info!(
            game = %GameKind::Spojnice,
            round = self.state.round.number(),
            matched = self.state.board.matched_count(),
            "round complete"
        );
    }
}

impl RoundEngine for SpojniceGame {
    type Action = SpojniceAction;
    type State = SpojniceState;

    fn kind(&self) -> GameKind {
        GameKind::Spojnice
    }

    fn state(&self) -> &SpojniceState {
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

    fn apply(&mut self, player: PlayerId, action: &SpojniceAction) -> Result<Events, ActionError> {
        if let Err(err) = self.check(player, action) {
            debug!(game = %GameKind::Spojnice, player = %player, ?action, %err, "action rejected");
            return Err(err);
        }

        let mut events = Events::new();
        let round = self.state.round;
        self.state.history.record(player, action.clone(), round);

        let SpojniceAction::ChooseValue(position) = *action;
        let board = &mut self.state.board;
        let key = board.cursor;
        let correct = board.value_order[position] == key;
        debug!(game = %GameKind::Spojnice, player = %player, key, position, correct, "value chosen");

        if correct {
            board.matched_by[key] = Some(player);
            board.round_points[player] += MATCH_POINTS;
            self.state.scores.award(player, MATCH_POINTS);
            events.push(GameEvent::ScoreAwarded {
                player,
                points: MATCH_POINTS,
            });
        }
        self.advance_cursor(player, &mut events);

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
                self.state.board = MatchRound::deal(next, &mut self.rng);
                self.state.current_player = self.state.board.opener;
                info!(game = %GameKind::Spojnice, round = next.number(), "round started");
            }
            None => {
                self.state.phase = Phase::Finished;
                let result = GameResult::from_scores(&self.state.scores);
                events.push(GameEvent::GameEnded { result });
                info!(game = %GameKind::Spojnice, ?result, "game ended");
            }
        }
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::spojnice::Pair;

    fn game(seed: u64) -> SpojniceGame {
        let pairs = |r: u8| -> Vec<Pair> {
            (0..PAIR_COUNT)
                .map(|i| Pair::new(format!("k{r}{i}"), format!("v{r}{i}")))
                .collect()
        };
        SpojniceGame::new(&SpojniceConfig::new(pairs(1), pairs(2)), GameRng::new(seed)).unwrap()
    }

    /// Display position holding pair `pair`.
    fn position_of(game: &SpojniceGame, pair: usize) -> usize {
        game.value_order().iter().position(|&p| p == pair).unwrap()
    }

    /// A display position that is wrong for the highlighted key and not yet matched.
    fn wrong_position(game: &SpojniceGame) -> usize {
        let key = game.highlighted_key();
        (0..PAIR_COUNT)
            .find(|&pos| {
                let pair = game.value_order()[pos];
                pair != key && !game.state().board.is_matched(pair)
            })
            .unwrap()
    }

    #[test]
    fn test_value_order_is_permutation() {
        let game = game(3);
        let mut order = *game.value_order();
        order.sort_unstable();
        assert_eq!(order, IDENTITY);
    }

    #[test]
    fn test_correct_match_advances() {
        let mut game = game(5);
        let events = game.choose_value(PlayerId::ONE, position_of(&game, 0)).unwrap();
        assert_eq!(
            events.as_slice(),
            &[GameEvent::ScoreAwarded {
                player: PlayerId::ONE,
                points: 2
            }]
        );
        assert_eq!(game.highlighted_key(), 1);
        assert_eq!(game.current_player(), PlayerId::ONE);
    }

    #[test]
    fn test_matched_value_rejected() {
        let mut game = game(5);
        let pos = position_of(&game, 0);
        game.choose_value(PlayerId::ONE, pos).unwrap();
        assert_eq!(game.choose_value(PlayerId::ONE, pos), Err(ActionError::AlreadyUsed));
    }

    #[test]
    fn test_wrong_guess_keeps_player() {
        let mut game = game(8);
        let events = game.choose_value(PlayerId::ONE, wrong_position(&game)).unwrap();
        assert!(events.is_empty());
        assert_eq!(game.highlighted_key(), 1);
        assert_eq!(game.current_player(), PlayerId::ONE);
        assert_eq!(game.scores()[PlayerId::ONE], 0);
    }

    #[test]
    fn test_handover_then_round_end() {
        let mut game = game(11);
        // Opener misses keys 0 and 1, matches the rest.
        game.choose_value(PlayerId::ONE, wrong_position(&game)).unwrap();
        game.choose_value(PlayerId::ONE, wrong_position(&game)).unwrap();
        for pair in 2..PAIR_COUNT - 1 {
            game.choose_value(PlayerId::ONE, position_of(&game, pair)).unwrap();
        }
        let events = game.choose_value(PlayerId::ONE, position_of(&game, PAIR_COUNT - 1)).unwrap();
        assert!(events.contains(&GameEvent::TurnPassed { to: PlayerId::TWO }));
        assert_eq!(game.highlighted_key(), 0);

        game.choose_value(PlayerId::TWO, wrong_position(&game)).unwrap();
        assert_eq!(game.highlighted_key(), 1);
        assert_eq!(game.current_player(), PlayerId::TWO);

        let events = game.choose_value(PlayerId::TWO, wrong_position(&game)).unwrap();
        assert!(events.contains(&GameEvent::RoundComplete { round: Round::First }));
        assert_eq!(game.value_order(), &IDENTITY);
        assert!(!game.state().board.is_matched(0));
        assert_eq!(game.scores()[PlayerId::ONE], 16);
        assert_eq!(game.scores()[PlayerId::TWO], 0);
    }

    #[test]
    fn test_all_matched_ends_round() {
        let mut game = game(13);
        for pair in 0..PAIR_COUNT {
            game.choose_value(PlayerId::ONE, position_of(&game, pair)).unwrap();
        }
        assert_eq!(game.phase(), Phase::RoundComplete);
        assert_eq!(game.scores()[PlayerId::ONE], 20);

        game.advance_round().unwrap();
        assert_eq!(game.current_player(), PlayerId::TWO);
        assert_eq!(game.highlighted_key(), 0);
    }
}
