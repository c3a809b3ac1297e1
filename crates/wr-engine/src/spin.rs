//! Spin result value object

use serde::{Deserialize, Serialize};

use crate::grid::ReelGrid;
use crate::paytable::LineWin;

/// Complete outcome of one spin.
///
/// Constructed once per spin and immutable afterwards; the presentation
/// layer consumes it for the reveal sequence and an external collaborator
/// may archive it. Field casing matches the hosting-frame wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpinResult {
    /// The generated grid.
    pub grid: ReelGrid,
    /// Winning lines in payline order.
    pub lines_won: Vec<LineWin>,
    /// Final win: base payout × bet × phase multiplier.
    pub total_win: f64,
    /// Audit/display tags: the phase name and the multiplier (`"x5"`).
    pub applied_modifiers: Vec<String>,
}

impl SpinResult {
    /// Did this spin pay anything?
    pub fn is_win(&self) -> bool {
        self.total_win > 0.0
    }

    /// Win-to-bet ratio for tier classification.
    pub fn win_ratio(&self, bet: f64) -> f64 {
        if bet > 0.0 { self.total_win / bet } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::Symbol;

    #[test]
    fn test_win_ratio() {
        let result = SpinResult {
            grid: [[Symbol::Cat; 3]; 3],
            lines_won: Vec::new(),
            total_win: 12.0,
            applied_modifiers: vec!["Surge".into(), "x2".into()],
        };
        assert!(result.is_win());
        assert_eq!(result.win_ratio(4.0), 3.0);
        assert_eq!(result.win_ratio(0.0), 0.0);
    }

    #[test]
    fn test_wire_shape() {
        let result = SpinResult {
            grid: [[Symbol::Cat; 3]; 3],
            lines_won: Vec::new(),
            total_win: 0.0,
            applied_modifiers: vec!["Calm".into(), "x1".into()],
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"linesWon\":[]"));
        assert!(json.contains("\"totalWin\":0.0"));
        assert!(json.contains("\"appliedModifiers\":[\"Calm\",\"x1\"]"));
    }
}
