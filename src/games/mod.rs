//! The five mini-games.
//!
//! Each game directory holds its configuration type and its round engine.
//! Engines share the primitives in `core` and implement
//! [`RoundEngine`](crate::rules::RoundEngine).

pub mod slagalica;
pub mod moj_broj;
pub mod skocko;
pub mod asocijacije;
pub mod spojnice;
