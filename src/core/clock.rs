//! Externally driven countdown.
//!
//! The engines never own a timer. The host calls `tick()` once per elapsed
//! time unit and the countdown reports what that tick did.

use serde::{Deserialize, Serialize};

/// Outcome of a single tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// The countdown was not running; nothing changed.
    Idle,
    /// One unit elapsed and time remains.
    Running { remaining: u32 },
    /// This tick consumed the last unit.
    Expired,
}

/// A countdown measured in ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    remaining: u32,
    running: bool,
}

impl Countdown {
    /// Start a countdown of `ticks` units. A zero-length countdown is
    /// created already stopped.
    #[must_use]
    pub const fn start(ticks: u32) -> Self {
        Self {
            remaining: ticks,
            running: ticks > 0,
        }
    }

    /// Advance by one unit.
    pub fn tick(&mut self) -> Tick {
        if !self.running {
            return Tick::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            Tick::Expired
        } else {
            Tick::Running {
                remaining: self.remaining,
            }
        }
    }

    /// Freeze the countdown where it stands.
    pub fn stop(&mut self) {
        self.running = false;
    }

    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }
}
