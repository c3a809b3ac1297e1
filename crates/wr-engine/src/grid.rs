//! Grid generation — phase-conditioned weighted draws
//!
//! Each spin produces a fresh 3×3 grid. Every cell is an independent
//! weighted draw from the active phase's symbol table; no correlation or
//! without-replacement constraint is modeled, so repeats (including
//! multiple wilds) are expected.

use rand::Rng;

use crate::config::{GameConfig, VolatilityProfile};
use crate::phase::GamePhase;
use crate::rng::pick_weighted;
use crate::symbols::Symbol;

/// Rows and columns of the reel grid.
pub const GRID_SIZE: usize = 3;

/// A 3×3 symbol grid, row-major. Immutable once generated.
pub type ReelGrid = [[Symbol; GRID_SIZE]; GRID_SIZE];

/// Builds the weighted symbol table for a phase.
///
/// These tables are tuned game-balance content, not an implementation
/// detail: they set the hit frequency / payout trade-off of each phase.
/// Entries stay in canonical symbol order (see [`Symbol::ALL`]).
///
/// The volatility profile is accepted but not yet consulted — the shipped
/// tables are phase-only and the parameter is the hook for a future
/// difficulty axis.
pub fn symbol_weights(phase: GamePhase, _profile: VolatilityProfile) -> Vec<(Symbol, u32)> {
    // Base table (standard profile).
    let mut cat = 30u32;
    let mut dog = 25;
    let mut bird = 20;
    let mut alligator = 15;
    let mut whale = 10;
    let mut elephant = 5;
    let mut wild = 2;
    let mut quantum_wild = 0;

    match phase {
        GamePhase::Calm => {
            // High hit frequency, low payouts: flood the grid with the
            // cheap animals and starve the top of the paytable.
            cat += 100;
            dog += 80;
            bird += 40;
            wild = 10;
            whale = 1;
            elephant = 0;
        }
        GamePhase::Surge => {
            // Mid-tier boost.
            alligator += 20;
            whale += 10;
            wild = 5;
        }
        GamePhase::Quantum => {
            // Low hit frequency, high payouts: thin out the fillers so
            // lines rarely form, and swap standard wilds for quantum ones.
            cat = 10;
            dog = 10;
            bird = 10;
            quantum_wild = 8;
            wild = 0;
        }
    }

    vec![
        (Symbol::Cat, cat),
        (Symbol::Dog, dog),
        (Symbol::Bird, bird),
        (Symbol::Alligator, alligator),
        (Symbol::Whale, whale),
        (Symbol::Elephant, elephant),
        (Symbol::Wild, wild),
        (Symbol::QuantumWild, quantum_wild),
    ]
}

/// Generates a grid for the given phase.
pub fn generate_grid<R: Rng>(rng: &mut R, phase: GamePhase, config: &GameConfig) -> ReelGrid {
    let weights = symbol_weights(phase, config.volatility_profile);

    let mut grid = [[Symbol::Cat; GRID_SIZE]; GRID_SIZE];
    for row in grid.iter_mut() {
        for cell in row.iter_mut() {
            *cell = *pick_weighted(rng, &weights);
        }
    }
    grid
}
