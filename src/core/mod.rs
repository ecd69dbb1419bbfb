//! Core engine types: players, RNG, countdown, rounds, scores, events.
//!
//! This module contains the building blocks every game shares. Games
//! combine these rather than re-implementing turn or score bookkeeping.

pub mod player;
pub mod rng;
pub mod clock;
pub mod turn;
pub mod score;
pub mod event;
pub mod action;
pub mod snapshot;

pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use clock::{Countdown, Tick};
pub use turn::{decide, Better, Phase, Round, TieBreak, TurnOrder};
pub use score::Scoreboard;
pub use event::{score_delta, Events, GameEvent};
pub use action::{ActionRecord, History};
