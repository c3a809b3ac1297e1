//! Phase clock — maps elapsed session time to a game phase
//!
//! The session loops through a fixed 15-second cycle split into three
//! volatility phases. Phase is a pure function of elapsed time; nothing is
//! persisted and every query recomputes from the session-start anchor.

use std::fmt;
use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Full cycle duration in milliseconds.
pub const LOOP_DURATION_MS: u64 = 15_000;

/// End of the Calm window (exclusive) within one cycle.
pub const CALM_END_MS: u64 = 6_000;

/// End of the Surge window (exclusive) within one cycle.
pub const SURGE_END_MS: u64 = 11_000;

/// Volatility phase of the play cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// High hit frequency, low payouts. `[0s, 6s)` of the cycle.
    Calm,
    /// Mid-tier symbols boosted, 2× payouts. `[6s, 11s)`.
    Surge,
    /// Sparse wins, quantum wilds in play, 5× payouts. `[11s, 15s)`.
    Quantum,
}

impl GamePhase {
    /// All phases in cycle order.
    pub const ALL: [GamePhase; 3] = [GamePhase::Calm, GamePhase::Surge, GamePhase::Quantum];

    /// Win multiplier applied to the base payout during this phase.
    pub const fn multiplier(self) -> u32 {
        match self {
            GamePhase::Calm => 1,
            GamePhase::Surge => 2,
            GamePhase::Quantum => 5,
        }
    }

    /// Phase name as it appears in modifier tags and reports.
    pub const fn name(self) -> &'static str {
        match self {
            GamePhase::Calm => "Calm",
            GamePhase::Surge => "Surge",
            GamePhase::Quantum => "Quantum",
        }
    }

    /// Start of this phase's window within one cycle.
    pub const fn window_start_ms(self) -> u64 {
        match self {
            GamePhase::Calm => 0,
            GamePhase::Surge => CALM_END_MS,
            GamePhase::Quantum => SURGE_END_MS,
        }
    }

    /// End of this phase's window (exclusive) within one cycle.
    pub const fn window_end_ms(self) -> u64 {
        match self {
            GamePhase::Calm => CALM_END_MS,
            GamePhase::Surge => SURGE_END_MS,
            GamePhase::Quantum => LOOP_DURATION_MS,
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps elapsed milliseconds since session start to the active phase.
///
/// Input wraps modulo the loop duration; windows are half-open, so 6000 ms
/// is Surge, 11000 ms is Quantum, and 15000 ms wraps back to Calm.
pub const fn phase_from_elapsed(elapsed_ms: u64) -> GamePhase {
    let t = elapsed_ms % LOOP_DURATION_MS;
    if t < CALM_END_MS {
        GamePhase::Calm
    } else if t < SURGE_END_MS {
        GamePhase::Surge
    } else {
        GamePhase::Quantum
    }
}

/// Wall-clock anchor for a play session.
///
/// The anchor is fixed at construction and never mutated; a driving loop
/// (owned by the presentation layer) samples [`PhaseClock::current_phase`]
/// every frame and reacts to transitions itself.
#[derive(Debug, Clone)]
pub struct PhaseClock {
    session_start: Instant,
}

impl PhaseClock {
    /// Start a session clock anchored at "now".
    pub fn start() -> Self {
        Self {
            session_start: Instant::now(),
        }
    }

    /// Milliseconds elapsed since session start.
    pub fn elapsed_ms(&self) -> u64 {
        self.session_start.elapsed().as_millis() as u64
    }

    /// Phase active at this instant.
    pub fn current_phase(&self) -> GamePhase {
        phase_from_elapsed(self.elapsed_ms())
    }

    /// Position within the current cycle, in `[0, LOOP_DURATION_MS)`.
    pub fn cycle_position_ms(&self) -> u64 {
        self.elapsed_ms() % LOOP_DURATION_MS
    }

    /// Progress through the current phase window, in `[0, 1)`.
    pub fn phase_progress(&self) -> f64 {
        let t = self.cycle_position_ms();
        let phase = phase_from_elapsed(t);
        let start = phase.window_start_ms();
        let len = phase.window_end_ms() - start;
        (t - start) as f64 / len as f64
    }
}

impl Default for PhaseClock {
    fn default() -> Self {
        Self::start()
    }
}
