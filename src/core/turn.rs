//! Rounds, phases, turn order and tie-breaks.
//!
//! Each game fixes who opens a round (`TurnOrder`) and who wins a tie
//! (`TieBreak`). Neither is ever random.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::player::{PlayerId, PlayerMap};

/// Round of a two-round session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Round {
    First,
    Second,
}

impl Round {
    /// Round number as shown to players (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Round::First => 1,
            Round::Second => 2,
        }
    }

    /// The round after this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<Round> {
        match self {
            Round::First => Some(Round::Second),
            Round::Second => None,
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Round {}", self.number())
    }
}

/// Coarse lifecycle of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Pre-round countdown; players may look but not act.
    Countdown,
    /// Players are acting.
    Active,
    /// Round scored; waiting for `advance_round`.
    RoundComplete,
    /// Session over. Every further action is rejected.
    Finished,
}

/// Who opens each round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOrder {
    /// The same player opens every round.
    Fixed(PlayerId),
    /// Player 1 opens round 1, player 2 opens round 2.
    Alternating,
}

impl TurnOrder {
    #[must_use]
    pub const fn opener(self, round: Round) -> PlayerId {
        match (self, round) {
            (TurnOrder::Fixed(player), _) => player,
            (TurnOrder::Alternating, Round::First) => PlayerId::ONE,
            (TurnOrder::Alternating, Round::Second) => PlayerId::TWO,
        }
    }
}

/// Which player takes a tied outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreak {
    /// The player who opened the round.
    Opener,
    /// A fixed player per round, independent of who opened it.
    PerRound { first: PlayerId, second: PlayerId },
}

impl TieBreak {
    #[must_use]
    pub const fn winner(self, round: Round, opener: PlayerId) -> PlayerId {
        match (self, round) {
            (TieBreak::Opener, _) => opener,
            (TieBreak::PerRound { first, .. }, Round::First) => first,
            (TieBreak::PerRound { second, .. }, Round::Second) => second,
        }
    }
}

/// Whether a larger or a smaller outcome wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Better {
    Higher,
    Lower,
}

/// Pick the single player whose outcome is better, with `tie_winner`
/// taking equal outcomes.
///
/// ```
/// use slagalica_engine::core::{decide, Better, PlayerId, PlayerMap};
///
/// let distances = PlayerMap::new(|p| if p == PlayerId::ONE { 2 } else { 10 });
/// assert_eq!(decide(&distances, Better::Lower, PlayerId::TWO), PlayerId::ONE);
///
/// let lengths = PlayerMap::with_value(5);
/// assert_eq!(decide(&lengths, Better::Higher, PlayerId::TWO), PlayerId::TWO);
/// ```
pub fn decide<T: Ord>(outcomes: &PlayerMap<T>, better: Better, tie_winner: PlayerId) -> PlayerId {
    let ordering = outcomes[PlayerId::ONE].cmp(&outcomes[PlayerId::TWO]);
    match (ordering, better) {
        (Ordering::Equal, _) => tie_winner,
        (Ordering::Greater, Better::Higher) | (Ordering::Less, Better::Lower) => PlayerId::ONE,
        _ => PlayerId::TWO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_numbers() {
        assert_eq!(Round::First.number(), 1);
        assert_eq!(Round::Second.number(), 2);
        assert_eq!(Round::First.next(), Some(Round::Second));
        assert_eq!(Round::Second.next(), None);
        assert_eq!(format!("{}", Round::Second), "Round 2");
    }

    #[test]
    fn test_turn_order() {
        assert_eq!(TurnOrder::Alternating.opener(Round::First), PlayerId::ONE);
        assert_eq!(TurnOrder::Alternating.opener(Round::Second), PlayerId::TWO);
        assert_eq!(TurnOrder::Fixed(PlayerId::ONE).opener(Round::Second), PlayerId::ONE);
    }

    #[test]
    fn test_tie_break() {
        let per_round = TieBreak::PerRound {
            first: PlayerId::ONE,
            second: PlayerId::TWO,
        };
        assert_eq!(per_round.winner(Round::First, PlayerId::ONE), PlayerId::ONE);
        assert_eq!(per_round.winner(Round::Second, PlayerId::ONE), PlayerId::TWO);
        assert_eq!(TieBreak::Opener.winner(Round::Second, PlayerId::TWO), PlayerId::TWO);
    }

    #[test]
    fn test_decide() {
        let outcomes = PlayerMap::new(|p| p.number());
        assert_eq!(decide(&outcomes, Better::Higher, PlayerId::ONE), PlayerId::TWO);
        assert_eq!(decide(&outcomes, Better::Lower, PlayerId::TWO), PlayerId::ONE);

        let tied = PlayerMap::with_value(3);
        assert_eq!(decide(&tied, Better::Lower, PlayerId::TWO), PlayerId::TWO);
    }
}
