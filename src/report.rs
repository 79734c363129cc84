//! Result reporting: sorted average-strategy tables per player.
//!
//! Purely presentational: the reporter snapshots the solver's store once,
//! partitions the entries by which player acts at each key (history-length
//! parity), and renders them sorted by key.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cfr::CfrSolver;

/// The average strategy at one information set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyEntry {
    /// Display key, e.g. `"K rrcb"`.
    pub key: String,
    /// Average probabilities, check first then bet.
    pub average_strategy: Vec<f64>,
}

/// A complete, serializable solve result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveReport {
    /// Mean game value for player 1 across the run.
    pub game_value: f64,
    /// Training iterations behind this report.
    pub iterations: u64,
    /// Number of information sets discovered.
    pub info_sets: usize,
    /// Player 1's info sets (even history length), sorted by key.
    pub player_one: Vec<StrategyEntry>,
    /// Player 2's info sets (odd history length), sorted by key.
    pub player_two: Vec<StrategyEntry>,
}

impl SolveReport {
    /// Snapshot a solver's average strategies.
    pub fn from_solver(solver: &CfrSolver, game_value: f64) -> Self {
        let mut player_one = Vec::new();
        let mut player_two = Vec::new();

        for (key, info_set) in solver.store().sorted_entries() {
            let entry = StrategyEntry {
                key: key.to_string(),
                average_strategy: info_set.average_strategy().to_vec(),
            };
            if key.history.len() % 2 == 0 {
                player_one.push(entry);
            } else {
                player_two.push(entry);
            }
        }

        SolveReport {
            game_value,
            iterations: solver.iterations(),
            info_sets: solver.store().len(),
            player_one,
            player_two,
        }
    }

    /// Print the report to stdout.
    pub fn print(&self) {
        println!("Player 1 expected value: {:+.4}", self.game_value);
        println!("Player 2 expected value: {:+.4}", -self.game_value);
        println!();

        println!("Player 1 strategies:");
        for entry in &self.player_one {
            Self::print_entry(entry);
        }
        println!();

        println!("Player 2 strategies:");
        for entry in &self.player_two {
            Self::print_entry(entry);
        }
    }

    fn print_entry(entry: &StrategyEntry) {
        println!(
            "{:<8} [{:.2}, {:.2}]",
            entry.key, entry.average_strategy[0], entry.average_strategy[1]
        );
    }

    /// Write the report to a file as pretty-printed JSON.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::from)?;
        std::fs::write(path, json)
    }
}
