//! Round engine trait for game implementations.
//!
//! Each mini-game implements `RoundEngine` to define:
//! - Which actions are accepted, and from whom
//! - How actions and ticks change the play state
//! - When a round and the session end
//!
//! Hosts drive every engine through the same surface and never interpret
//! game-specific state beyond rendering it.

pub mod engine;

pub use engine::{GameResult, RoundEngine};
