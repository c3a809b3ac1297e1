//! Game configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bet menu offered by the bet-selection UI.
pub const BET_OPTIONS: [f64; 6] = [0.25, 0.50, 1.00, 5.00, 10.00, 25.00];

/// Volatility profile selected for the session.
///
/// Threaded through grid generation as a hook for a future difficulty
/// axis; the shipped weight tables are phase-only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolatilityProfile {
    Low,
    #[default]
    Medium,
    High,
}

/// Player-facing configuration, mutable between spins only.
///
/// The resolver works from a frozen snapshot taken at spin start; live
/// edits (bet changes) never affect a spin already in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    /// Volatility hook (see [`VolatilityProfile`]).
    pub volatility_profile: VolatilityProfile,
    /// Big-win classification threshold, as a multiple of the bet.
    pub big_win_threshold_multiplier: f64,
    /// Currently selected bet amount.
    pub bet_amount: f64,
}

impl GameConfig {
    /// Config with a specific bet and default volatility/threshold.
    pub fn with_bet(bet_amount: f64) -> Self {
        Self {
            bet_amount,
            ..Self::default()
        }
    }

    /// Big-win classification: a threshold comparison against the final
    /// win, done by the caller — never inside spin resolution.
    pub fn is_big_win(&self, total_win: f64) -> bool {
        total_win > 0.0 && total_win >= self.bet_amount * self.big_win_threshold_multiplier
    }

    /// Validates caller-supplied config (e.g. loaded from a file).
    ///
    /// The resolver itself assumes valid input per its contract; this is
    /// for the session layer and tooling.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.bet_amount.is_finite() || self.bet_amount < 0.0 {
            return Err(ConfigError::InvalidBet(self.bet_amount));
        }
        if !self.big_win_threshold_multiplier.is_finite() || self.big_win_threshold_multiplier <= 0.0
        {
            return Err(ConfigError::InvalidBigWinThreshold(
                self.big_win_threshold_multiplier,
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            volatility_profile: VolatilityProfile::Medium,
            big_win_threshold_multiplier: 10.0,
            bet_amount: 1.00,
        }
    }
}

/// Configuration validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid bet amount: {0}")]
    InvalidBet(f64),

    #[error("invalid big-win threshold multiplier: {0}")]
    InvalidBigWinThreshold(f64),
}
