//! The CFR engine: solver, regret storage, and run configuration.
//!
//! Counterfactual Regret Minimization converges to Nash equilibrium by
//! repeatedly traversing the game tree, accumulating per-action regret at
//! every information set, and playing future iterations in proportion to
//! positive regret. The strategy *averaged* over iterations — not the final
//! iteration's strategy — is what approaches equilibrium.
//!
//! This is the vanilla variant: full tree traversal each iteration, no
//! sampling, no discounting, with the chance node enumerated exactly.
//!
//! # References
//!
//! - Zinkevich, M., et al. "Regret Minimization in Games with Incomplete
//!   Information" (2007)

pub mod config;
pub mod solver;
pub mod storage;

// Re-export main types for convenient access
pub use config::{ConfigError, TrainConfig, TrainStats};
pub use solver::CfrSolver;
pub use storage::{InfoKey, InfoSet, InfoSetStore};
