//! Mastermind feedback.

use serde::{Deserialize, Serialize};

use super::config::{Sequence, SEQUENCE_LEN};

/// Feedback for one guess.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feedback {
    /// Right symbol, right position.
    pub red: u8,
    /// Right symbol, wrong position.
    pub yellow: u8,
}

impl Feedback {
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.red as usize == SEQUENCE_LEN
    }
}

/// Score `guess` against `secret`.
///
/// Exact matches are counted first. Each remaining guess position then
/// claims the first unclaimed secret position holding the same symbol, so
/// no secret slot is counted twice.
///
/// ```
/// use slagalica_engine::games::skocko::{feedback, Symbol::*};
///
/// let fb = feedback(&[Spades, Hearts, Clubs, Fata], &[Hearts, Spades, Clubs, Diamonds]);
/// assert_eq!((fb.red, fb.yellow), (1, 2));
/// ```
#[must_use]
pub fn feedback(guess: &Sequence, secret: &Sequence) -> Feedback {
    let mut claimed = [false; SEQUENCE_LEN];
    let mut exact = [false; SEQUENCE_LEN];
    let mut result = Feedback::default();

    for i in 0..SEQUENCE_LEN {
        if guess[i] == secret[i] {
            result.red += 1;
            claimed[i] = true;
            exact[i] = true;
        }
    }

    for i in (0..SEQUENCE_LEN).filter(|&i| !exact[i]) {
        if let Some(j) = (0..SEQUENCE_LEN).find(|&j| !claimed[j] && secret[j] == guess[i]) {
            claimed[j] = true;
            result.yellow += 1;
        }
    }

    result
}
