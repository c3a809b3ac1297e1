//! Presentation-side state machine contract
//!
//! The core places no lock or debounce around [`crate::resolve_spin`]; the
//! "one spin in flight" rule is presentation policy. This module models
//! that policy as an explicit state machine so embedders share one
//! definition of when a spin may start.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::spin::SpinResult;

/// UI lifecycle of a spin: `Idle → Spinning → ResolvingWin /
/// AnimatingBigWin → Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameState {
    #[default]
    Idle,
    Spinning,
    ResolvingWin,
    AnimatingBigWin,
}

impl GameState {
    /// May the player trigger a spin right now?
    ///
    /// Mirrors the original UI gate: spins are allowed from idle and from
    /// the (skippable) small-win reveal, never mid-spin or during the
    /// big-win celebration.
    pub fn can_spin(self) -> bool {
        matches!(self, GameState::Idle | GameState::ResolvingWin)
    }

    /// Transition for a player-triggered spin. Returns `None` when the
    /// guard rejects it.
    pub fn on_spin_start(self) -> Option<GameState> {
        self.can_spin().then_some(GameState::Spinning)
    }

    /// Transition when the reel animation finishes and the result is
    /// revealed. Big-win classification is the caller-side threshold
    /// comparison from [`GameConfig::is_big_win`].
    pub fn on_spin_complete(self, result: &SpinResult, config: &GameConfig) -> GameState {
        debug_assert_eq!(self, GameState::Spinning);
        if config.is_big_win(result.total_win) {
            GameState::AnimatingBigWin
        } else {
            GameState::ResolvingWin
        }
    }

    /// Transition when the win-reveal / celebration overlay ends.
    pub fn on_presentation_complete(self) -> GameState {
        GameState::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::Symbol;

    fn result_with_win(total_win: f64) -> SpinResult {
        SpinResult {
            grid: [[Symbol::Cat; 3]; 3],
            lines_won: Vec::new(),
            total_win,
            applied_modifiers: vec!["Calm".into(), "x1".into()],
        }
    }

    #[test]
    fn test_spin_gating() {
        assert!(GameState::Idle.can_spin());
        assert!(GameState::ResolvingWin.can_spin());
        assert!(!GameState::Spinning.can_spin());
        assert!(!GameState::AnimatingBigWin.can_spin());

        assert_eq!(GameState::Idle.on_spin_start(), Some(GameState::Spinning));
        assert_eq!(GameState::Spinning.on_spin_start(), None);
    }

    #[test]
    fn test_big_win_routing() {
        let config = GameConfig::with_bet(1.0); // threshold 10×

        let small = GameState::Spinning.on_spin_complete(&result_with_win(4.0), &config);
        assert_eq!(small, GameState::ResolvingWin);

        let big = GameState::Spinning.on_spin_complete(&result_with_win(10.0), &config);
        assert_eq!(big, GameState::AnimatingBigWin);

        let loss = GameState::Spinning.on_spin_complete(&result_with_win(0.0), &config);
        assert_eq!(loss, GameState::ResolvingWin);
    }

    #[test]
    fn test_cycle_returns_to_idle() {
        let config = GameConfig::default();
        let state = GameState::Idle
            .on_spin_start()
            .unwrap()
            .on_spin_complete(&result_with_win(2.0), &config)
            .on_presentation_complete();
        assert_eq!(state, GameState::Idle);
    }
}
