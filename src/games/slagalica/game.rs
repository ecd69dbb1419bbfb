//! Slagalica round engine.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, trace};

use super::config::SlagalicaConfig;
use crate::config::{GameConfiguration, GameKind};
use crate::core::{
    decide, Better, Countdown, Events, GameEvent, GameRng, History, Phase, PlayerId, PlayerMap,
    Round, Scoreboard, Tick, TieBreak, TurnOrder,
};
use crate::error::{ActionError, ConfigError};
use crate::rules::engine::check_turn;
use crate::rules::{GameResult, RoundEngine};

/// Letter tiles on the board.
pub const TILE_COUNT: usize = 13;
/// Pre-round countdown, in ticks.
pub const SLAGALICA_COUNTDOWN: u32 = 10;
/// Points for the longer word.
pub const BASE_POINTS: u32 = 10;
/// Extra points when the scoring word is the target word.
pub const TARGET_BONUS: u32 = 5;

const TURN_ORDER: TurnOrder = TurnOrder::Fixed(PlayerId::ONE);
const TIE_BREAK: TieBreak = TieBreak::PerRound {
    first: PlayerId::ONE,
    second: PlayerId::TWO,
};

/// Player actions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlagalicaAction {
    /// Append the letter on tile `index` to the word being built.
    SelectTile(usize),
    /// Clear the word being built and release its tiles.
    Dismiss,
    /// Lock the word in. Irreversible for the round.
    SaveWord,
}

/// One player's word for the round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerWord {
    pub word: String,
    pub saved: bool,
}

/// Per-round board record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterBoard {
    /// Shuffled tiles, frozen for the round.
    pub tiles: [char; TILE_COUNT],

    /// Tiles used by the word currently being built, in order.
    pub selected: SmallVec<[usize; TILE_COUNT]>,

    pub words: PlayerMap<PlayerWord>,

    /// Points each player earned this round, set when the round completes.
    pub round_points: PlayerMap<u32>,

    /// Target word, revealed once the round completes.
    pub revealed_target: Option<String>,
}

impl LetterBoard {
    /// Pad `target` with random letters to `TILE_COUNT` and shuffle.
    fn deal(target: &str, rng: &mut GameRng) -> Self {
        let mut letters: Vec<char> = target.chars().take(TILE_COUNT).collect();
        while letters.len() < TILE_COUNT {
            letters.push(char::from(b'A' + rng.gen_range(0..26) as u8));
        }
        rng.shuffle(&mut letters);

        let mut tiles = ['A'; TILE_COUNT];
        tiles.copy_from_slice(&letters);

        Self {
            tiles,
            selected: SmallVec::new(),
            words: PlayerMap::default(),
            round_points: PlayerMap::default(),
            revealed_target: None,
        }
    }
}

/// Play state of a Slagalica session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlagalicaState {
    pub round: Round,
    pub phase: Phase,
    pub countdown: Countdown,
    pub current_player: PlayerId,
    pub scores: Scoreboard,
    pub board: LetterBoard,
    pub history: History<SlagalicaAction>,
}

/// Points for a finished round.
///
/// The longer word takes `BASE_POINTS`, plus `TARGET_BONUS` if it equals
/// `target`. Equal lengths go to the round's tie-break player; the other
/// player scores nothing.
///
/// ```
/// use slagalica_engine::core::{PlayerId, PlayerMap, Round};
/// use slagalica_engine::games::slagalica::score_round;
///
/// let words = PlayerMap::new(|p| if p == PlayerId::ONE { "CAT" } else { "AT" }.to_string());
/// let points = score_round(&words, "CAT", Round::First);
/// assert_eq!(points[PlayerId::ONE], 15);
/// assert_eq!(points[PlayerId::TWO], 0);
/// ```
#[must_use]
pub fn score_round(words: &PlayerMap<String>, target: &str, round: Round) -> PlayerMap<u32> {
    let lengths = PlayerMap::new(|p| words[p].chars().count());
    let tie_winner = TIE_BREAK.winner(round, TURN_ORDER.opener(round));
    let winner = decide(&lengths, Better::Higher, tie_winner);

    let mut points = PlayerMap::with_value(0);
    points[winner] = BASE_POINTS;
    if words[winner] == target {
        points[winner] += TARGET_BONUS;
    }
    points
}

/// A Slagalica session.
#[derive(Clone, Debug)]
pub struct SlagalicaGame {
    targets: [String; 2],
    rng: GameRng,
    state: SlagalicaState,
}

impl SlagalicaGame {
    /// Start a session. Round 1 begins in its countdown.
    pub fn new(config: &SlagalicaConfig, mut rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let targets = [
            config.word(Round::First).to_ascii_uppercase(),
            config.word(Round::Second).to_ascii_uppercase(),
        ];
        let round = Round::First;
        let state = SlagalicaState {
            round,
            phase: Phase::Countdown,
            countdown: Countdown::start(SLAGALICA_COUNTDOWN),
            current_player: TURN_ORDER.opener(round),
            scores: Scoreboard::new(),
            board: LetterBoard::deal(&targets[0], &mut rng),
            history: History::new(),
        };

        info!(game = %GameKind::Slagalica, seed = rng.seed(), "session started");
        Ok(Self { targets, rng, state })
    }

    /// Start a session with an entropy-seeded RNG.
    pub fn with_entropy(config: &SlagalicaConfig) -> Result<Self, ConfigError> {
        Self::new(config, GameRng::from_entropy())
    }

    /// Target word of the current round (upper case).
    #[must_use]
    pub fn target(&self) -> &str {
        match self.state.round {
            Round::First => &self.targets[0],
            Round::Second => &self.targets[1],
        }
    }

    pub fn select_tile(&mut self, player: PlayerId, index: usize) -> Result<Events, ActionError> {
        self.apply(player, &SlagalicaAction::SelectTile(index))
    }

    pub fn dismiss(&mut self, player: PlayerId) -> Result<Events, ActionError> {
        self.apply(player, &SlagalicaAction::Dismiss)
    }

    pub fn save_word(&mut self, player: PlayerId) -> Result<Events, ActionError> {
        self.apply(player, &SlagalicaAction::SaveWord)
    }

    fn check(&self, player: PlayerId, action: &SlagalicaAction) -> Result<(), ActionError> {
        check_turn(self.state.phase, self.state.current_player, player)?;

        let board = &self.state.board;
        if board.words[player].saved {
            return Err(ActionError::AlreadySubmitted(player));
        }
        match *action {
            SlagalicaAction::SelectTile(index) => {
                if index >= TILE_COUNT {
                    return Err(ActionError::IndexOutOfRange {
                        index,
                        len: TILE_COUNT,
                    });
                }
                if board.selected.contains(&index) {
                    return Err(ActionError::AlreadyUsed);
                }
            }
            SlagalicaAction::Dismiss => {}
            SlagalicaAction::SaveWord => {
                if board.words[player].word.is_empty() {
                    return Err(ActionError::EmptySubmission);
                }
            }
        }
        Ok(())
    }

    fn finish_round(&mut self, events: &mut Events) {
        let words = PlayerMap::new(|p| self.state.board.words[p].word.clone());
        let target = self.target().to_string();
        let points = score_round(&words, &target, self.state.round);

        for (player, &earned) in points.iter() {
            if earned > 0 {
                self.state.scores.award(player, earned);
                events.push(GameEvent::ScoreAwarded {
                    player,
                    points: earned,
                });
                debug!(game = %GameKind::Slagalica, player = %player, points = earned, "points awarded");
            }
        }

        let board = &mut self.state.board;
        board.round_points = points;
        board.selected.clear();
        board.revealed_target = Some(target);
        self.state.phase = Phase::RoundComplete;
        events.push(GameEvent::RoundComplete {
            round: self.state.round,
        });
        info!(game = %GameKind::Slagalica, round = self.state.round.number(), "round complete");
    }
}

impl RoundEngine for SlagalicaGame {
    type Action = SlagalicaAction;
    type State = SlagalicaState;

    fn kind(&self) -> GameKind {
        GameKind::Slagalica
    }

    fn state(&self) -> &SlagalicaState {
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

    fn apply(&mut self, player: PlayerId, action: &SlagalicaAction) -> Result<Events, ActionError> {
        if let Err(err) = self.check(player, action) {
            debug!(game = %GameKind::Slagalica, player = %player, ?action, %err, "action rejected");
            return Err(err);
        }

        let mut events = Events::new();
        let round = self.state.round;
        self.state.history.record(player, action.clone(), round);
        debug!(game = %GameKind::Slagalica, player = %player, ?action, "action accepted");

        let board = &mut self.state.board;
        match *action {
            SlagalicaAction::SelectTile(index) => {
                let letter = board.tiles[index];
                board.selected.push(index);
                board.words[player].word.push(letter);
            }
            SlagalicaAction::Dismiss => {
                board.selected.clear();
                board.words[player].word.clear();
            }
            SlagalicaAction::SaveWord => {
                board.words[player].saved = true;
                board.selected.clear();

                let other = player.other();
                if board.words[other].saved {
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
                events.push(GameEvent::CountdownExpired {
                    round: self.state.round,
                });
                debug!(game = %GameKind::Slagalica, round = self.state.round.number(), "countdown expired");
            }
            Tick::Running { remaining } => {
                trace!(game = %GameKind::Slagalica, remaining, "tick");
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
                self.state.countdown = Countdown::start(SLAGALICA_COUNTDOWN);
                self.state.current_player = TURN_ORDER.opener(next);
                let target = self.target().to_string();
                self.state.board = LetterBoard::deal(&target, &mut self.rng);
                info!(game = %GameKind::Slagalica, round = next.number(), "round started");
            }
            None => {
                self.state.phase = Phase::Finished;
                let result = GameResult::from_scores(&self.state.scores);
                events.push(GameEvent::GameEnded { result });
                info!(game = %GameKind::Slagalica, ?result, "game ended");
            }
        }
        Ok(events)
    }
}
