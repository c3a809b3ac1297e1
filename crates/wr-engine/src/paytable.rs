//! Paytable, payline definitions, and win evaluation

use serde::{Deserialize, Serialize};

use crate::grid::ReelGrid;
use crate::symbols::Symbol;

/// Payout for a line of three standard wilds (mixed `wild`/`quantum_wild`,
/// not all quantum). Independent of the per-symbol paytable.
pub const THREE_WILDS_PAYOUT: f64 = 80.0;

/// Number of paylines evaluated per spin.
pub const PAYLINE_COUNT: usize = 5;

/// Base payout for three-of-a-kind of a symbol, as a bet multiple.
///
/// `Wild` pays 0 (it is never a line target; an all-wild line uses
/// [`THREE_WILDS_PAYOUT`]); `QuantumWild` is the jackpot line value.
pub const fn line_payout(symbol: Symbol) -> f64 {
    match symbol {
        Symbol::Cat => 2.0,
        Symbol::Dog => 4.0,
        Symbol::Bird => 8.0,
        Symbol::Alligator => 15.0,
        Symbol::Whale => 30.0,
        Symbol::Elephant => 50.0,
        Symbol::Wild => 0.0,
        Symbol::QuantumWild => 100.0,
    }
}

/// A fixed payline: three `(row, col)` coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Payline {
    /// Payline index (0-based); also the reveal order downstream.
    pub index: u8,
    /// Grid coordinates read in order.
    pub coords: [(usize, usize); 3],
}

/// The five standard paylines in contract order: top, middle, bottom,
/// diagonal TL-BR, diagonal BL-TR.
///
/// The order is part of the interface — line indices drive the staggered
/// win-reveal animation downstream.
pub const fn standard_paylines() -> [Payline; PAYLINE_COUNT] {
    [
        Payline { index: 0, coords: [(0, 0), (0, 1), (0, 2)] },
        Payline { index: 1, coords: [(1, 0), (1, 1), (1, 2)] },
        Payline { index: 2, coords: [(2, 0), (2, 1), (2, 2)] },
        Payline { index: 3, coords: [(0, 0), (1, 1), (2, 2)] },
        Payline { index: 4, coords: [(2, 0), (1, 1), (0, 2)] },
    ]
}

/// A win on a single payline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineWin {
    /// Index of the winning payline (0–4).
    pub line_id: u8,
    /// Matched symbol; `wild` for an all-wild line, `quantum_wild` for
    /// the jackpot line.
    pub symbol_id: Symbol,
    /// Matching symbol count (always 3; no partial-line payouts).
    pub count: u8,
    /// Base payout, pre-bet and pre-multiplier.
    pub payout: f64,
    /// Coordinates to highlight in the win reveal.
    pub coordinates: [(usize, usize); 3],
}

/// Result of evaluating every payline against a grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Sum of line payouts, pre-bet and pre-multiplier.
    pub base_win: f64,
    /// Wins in payline order.
    pub line_wins: Vec<LineWin>,
}

impl EvaluationResult {
    /// Did any line pay?
    pub fn is_win(&self) -> bool {
        self.base_win > 0.0
    }
}

/// Evaluates the five fixed paylines against a grid.
///
/// Per line, in precedence order:
/// 1. three quantum wilds → jackpot payout, tagged `quantum_wild`;
/// 2. three wilds of any mix → [`THREE_WILDS_PAYOUT`], tagged `wild`;
/// 3. otherwise the first non-wild symbol is the target, and the line
///    wins iff every position is the target or a wild.
///
/// Pure function; evaluating the same grid twice yields identical results.
pub fn evaluate_grid(grid: &ReelGrid) -> EvaluationResult {
    let mut base_win = 0.0;
    let mut line_wins = Vec::new();

    for payline in standard_paylines() {
        let symbols = payline.coords.map(|(r, c)| grid[r][c]);

        if symbols.iter().all(|s| *s == Symbol::QuantumWild) {
            let payout = line_payout(Symbol::QuantumWild);
            base_win += payout;
            line_wins.push(LineWin {
                line_id: payline.index,
                symbol_id: Symbol::QuantumWild,
                count: 3,
                payout,
                coordinates: payline.coords,
            });
            continue;
        }

        let target = symbols.iter().copied().find(|s| !s.is_wild());

        let Some(target) = target else {
            // All wild, but not all quantum: fixed three-wilds payout.
            base_win += THREE_WILDS_PAYOUT;
            line_wins.push(LineWin {
                line_id: payline.index,
                symbol_id: Symbol::Wild,
                count: 3,
                payout: THREE_WILDS_PAYOUT,
                coordinates: payline.coords,
            });
            continue;
        };

        let is_win = symbols.iter().all(|s| *s == target || s.is_wild());
        if is_win {
            let payout = line_payout(target);
            base_win += payout;
            line_wins.push(LineWin {
                line_id: payline.index,
                symbol_id: target,
                count: 3,
                payout,
                coordinates: payline.coords,
            });
        }
    }

    EvaluationResult { base_win, line_wins }
}
