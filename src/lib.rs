//! # slagalica-engine
//!
//! Round engines for five two-player quiz mini-games: Slagalica, Moj Broj,
//! Skočko, Asocijacije and Spojnice.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Every random draw goes through an injected
//!    [`GameRng`]. Time only moves when the host calls `tick()`.
//!
//! 2. **Engines own their state**: One engine value is one play session.
//!    Actions either apply completely or are rejected with an
//!    [`ActionError`] and change nothing.
//!
//! 3. **Fail fast on configuration**: Engines refuse to start on a
//!    configuration that is not marked configured or fails validation.
//!
//! ## Usage
//!
//! ```
//! use slagalica_engine::games::moj_broj::{MojBrojConfig, MojBrojGame};
//! use slagalica_engine::{GameRng, PlayerId, RoundEngine};
//!
//! let mut game = MojBrojGame::new(&MojBrojConfig::new(500, 321), GameRng::new(7)).unwrap();
//! while game.state().countdown.is_running() {
//!     game.tick();
//! }
//! game.select_number(PlayerId::ONE, 5).unwrap();
//! game.lock_in(PlayerId::ONE).unwrap();
//! assert_eq!(game.current_player(), PlayerId::TWO);
//! ```
//!
//! ## Modules
//!
//! - `core`: players, RNG, countdown, rounds, scores, events, history
//! - `config`: configuration validation and the JSON envelope
//! - `rules`: the `RoundEngine` trait
//! - `games`: the five engines
//! - `error`: error types

pub mod core;
pub mod config;
pub mod rules;
pub mod games;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, Countdown, Events, GameEvent, GameRng, History, Phase, PlayerId,
    PlayerMap, Round, Scoreboard,
};

pub use crate::config::{ConfigEnvelope, GameConfiguration, GameKind, ENVELOPE_VERSION};

pub use crate::rules::{GameResult, RoundEngine};

pub use crate::error::{
    ActionError, ConfigError, EnvelopeError, ExpressionError, InvalidPlayer, SnapshotError,
};
