//! # Kuhn CFR
//!
//! A vanilla Counterfactual Regret Minimization (CFR) solver that computes
//! an approximate Nash equilibrium for Kuhn poker, the standard 3-card
//! two-player zero-sum benchmark game.
//!
//! Each training iteration traverses the entire game tree once — all 6 card
//! deals, both actions at every decision point — accumulating counterfactual
//! regret per information set and averaging strategies across iterations.
//! The averaged strategies converge to equilibrium; player 1's expected
//! value converges to −1/18.
//!
//! ## Quick Start
//!
//! ```
//! use kuhn_cfr::{CfrSolver, SolveReport};
//!
//! let mut solver = CfrSolver::new();
//! let stats = solver.train(10_000);
//!
//! let report = SolveReport::from_solver(&solver, stats.game_value);
//! assert_eq!(report.info_sets, 12);
//! ```
//!
//! ## Modules
//!
//! - [`cfr`]: the solver, regret storage, and run configuration
//! - [`game`]: the fixed Kuhn game model (cards, histories, payoffs)
//! - [`report`]: sorted per-player strategy tables and JSON export

#![warn(missing_docs)]

/// The CFR engine: solver, storage, and configuration.
pub mod cfr;

/// The fixed Kuhn poker game model.
pub mod game;

/// Result reporting.
pub mod report;

// Re-export commonly used types at crate root for convenience
pub use cfr::{CfrSolver, ConfigError, InfoKey, InfoSet, InfoSetStore, TrainConfig, TrainStats};
pub use game::{Card, History, KuhnAction, Player, Terminal};
pub use report::{SolveReport, StrategyEntry};
