//! # wr-engine — Phase-driven spin resolution engine for WarpReels
//!
//! Deterministic core of a 3×3 slot game whose volatility is driven by a
//! continuously looping time cycle. Elapsed session time maps to a discrete
//! phase (Calm → Surge → Quantum), the phase reshapes the symbol
//! distribution, and wins are scaled by a phase multiplier.
//!
//! ## Architecture
//!
//! ```text
//! PhaseClock ──> GamePhase ──> symbol_weights ──> ReelGrid
//!                                                    │
//!                                                    v
//!                              evaluate_grid ──> EvaluationResult
//!                                                    │
//!                                                    v
//!                         resolve_spin ──> SpinResult (× bet × multiplier)
//! ```
//!
//! The engine is synchronous and side-effect-free apart from the injected
//! random source. Balance, big-win presentation, and messaging belong to
//! the embedding layer; `session` models that layer's state machine.

pub mod config;
pub mod engine;
pub mod grid;
pub mod paytable;
pub mod phase;
pub mod rng;
pub mod session;
pub mod spin;
pub mod symbols;

pub use config::*;
pub use engine::*;
pub use grid::*;
pub use paytable::*;
pub use phase::*;
pub use rng::*;
pub use session::*;
pub use spin::*;
pub use symbols::*;
