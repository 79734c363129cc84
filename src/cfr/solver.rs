//! Vanilla Counterfactual Regret Minimization solver.
//!
//! One training iteration is one full traversal of the Kuhn game tree: the
//! chance node enumerates all 6 card deals, and every decision node explores
//! both actions. No sampling is involved, so a run is fully deterministic.
//!
//! The recursion returns the value of each subtree from the perspective of
//! the player about to act there; callers negate it, since the game is
//! zero-sum and every ply flips the actor.

use std::time::Instant;

use crate::cfr::config::TrainStats;
use crate::cfr::storage::InfoSetStore;
use crate::game::{deals, Card, History, KuhnAction, Player, N_ACTIONS, N_DEALS};

/// The vanilla CFR solver for the fixed Kuhn game.
///
/// Owns the information-set store for the whole run; the store is created
/// before the first iteration and read out after the last, never torn down
/// in between.
///
/// # Example
/// ```
/// use kuhn_cfr::CfrSolver;
///
/// let mut solver = CfrSolver::new();
/// let stats = solver.train(1_000);
/// assert_eq!(stats.info_sets, 12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CfrSolver {
    /// All learned regret-matching state.
    store: InfoSetStore,

    /// Completed iteration count.
    iterations: u64,
}

impl CfrSolver {
    /// Create a solver with an empty information-set store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one full game-tree traversal and return its game value for
    /// player 1.
    ///
    /// Starts from the empty history with unit reach probabilities; the
    /// sentinel cards are never read before the chance node deals real ones.
    /// Does not advance strategy averages — pair with
    /// [`InfoSetStore::advance_iteration`], or use
    /// [`CfrSolver::run_iteration`] which does both.
    pub fn solve(&mut self) -> f64 {
        self.cfr(History::new(), [Card::Jack; 2], 1.0, 1.0, 1.0)
    }

    /// Run one complete training iteration: a full traversal followed by the
    /// per-iteration strategy-average update on every stored info set.
    ///
    /// Returns the iteration's game value for player 1.
    pub fn run_iteration(&mut self) -> f64 {
        let game_value = self.solve();
        self.store.advance_iteration();
        self.iterations += 1;
        game_value
    }

    /// Train for a fixed number of iterations.
    ///
    /// The returned stats cover this call only; `game_value` is the mean of
    /// the per-iteration game values, which converges to the game's value
    /// for player 1 (−1/18 for Kuhn poker).
    pub fn train(&mut self, iterations: u64) -> TrainStats {
        let start = Instant::now();
        let mut total_value = 0.0;

        for _ in 0..iterations {
            total_value += self.run_iteration();
        }

        let mut stats = TrainStats {
            iterations,
            info_sets: self.store.len(),
            game_value: if iterations > 0 {
                total_value / iterations as f64
            } else {
                0.0
            },
            elapsed_seconds: start.elapsed().as_secs_f64(),
            iterations_per_second: 0.0,
        };
        stats.update_rate();
        stats
    }

    /// Total iterations completed so far.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Read access to the information-set store, for reporting.
    pub fn store(&self) -> &InfoSetStore {
        &self.store
    }

    /// Deal every ordered pair of distinct cards, traverse each resulting
    /// subtree, and return the probability-weighted average game value.
    ///
    /// All 6 deals are evaluated sequentially within the iteration, before
    /// any strategy update happens.
    fn chance_util(&mut self) -> f64 {
        let chance_pr = 1.0 / N_DEALS as f64;
        let mut expected_value = 0.0;

        for deal in deals() {
            expected_value += self.cfr(History::after_deal(), deal, 1.0, 1.0, chance_pr);
        }

        expected_value * chance_pr
    }

    /// The recursive traversal.
    ///
    /// Returns the counterfactual value of the subtree at `history` from the
    /// perspective of the player to act there. `pr_1` and `pr_2` are the
    /// players' reach probabilities under the current joint strategy;
    /// `pr_chance` is the chance contribution.
    ///
    /// Depth is bounded by the fixed terminal set: no history grows past the
    /// deepest terminal pattern.
    fn cfr(
        &mut self,
        history: History,
        cards: [Card; 2],
        pr_1: f64,
        pr_2: f64,
        pr_chance: f64,
    ) -> f64 {
        if history.is_chance() {
            return self.chance_util();
        }

        if let Some(terminal) = history.terminal() {
            return terminal.payoff(cards);
        }

        let player = history.to_act();
        let card = cards[player.index()];

        // Copy the strategy out: it is fixed for the whole iteration, and
        // the recursion below needs the store mutable.
        let strategy = {
            let info_set = self.store.get_or_create(history, card);
            info_set.accumulate_reach(match player {
                Player::First => pr_1,
                Player::Second => pr_2,
            });
            *info_set.strategy()
        };

        let mut action_utils = [0.0; N_ACTIONS];
        for (i, action) in KuhnAction::ALL.into_iter().enumerate() {
            let next = history.push(action);
            // Negate: the child's value is from the other player's view.
            action_utils[i] = match player {
                Player::First => -self.cfr(next, cards, pr_1 * strategy[i], pr_2, pr_chance),
                Player::Second => -self.cfr(next, cards, pr_1, pr_2 * strategy[i], pr_chance),
            };
        }

        let util: f64 = strategy
            .iter()
            .zip(&action_utils)
            .map(|(&prob, &value)| prob * value)
            .sum();

        // Counterfactual weighting: the regret contribution is scaled by the
        // reach of everyone except the mover.
        let counterfactual_pr = match player {
            Player::First => pr_2,
            Player::Second => pr_1,
        } * pr_chance;

        let info_set = self.store.get_or_create(history, card);
        for (i, &action_util) in action_utils.iter().enumerate() {
            info_set.add_regret(i, counterfactual_pr * (action_util - util));
        }

        util
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfr::storage::InfoKey;

    /// Kuhn poker's game value for player 1.
    const GAME_VALUE: f64 = -1.0 / 18.0;

    fn average_strategy(solver: &CfrSolver, card: Card, history: History) -> [f64; N_ACTIONS] {
        solver
            .store()
            .get(&InfoKey::new(card, history))
            .expect("info set should exist after training")
            .average_strategy()
    }

    #[test]
    fn test_first_traversal_value_under_uniform_strategies() {
        // With every strategy uniform, the expected value for player 1 works
        // out to exactly 1/8: each deal is worth sign(showdown) + 1/8, and
        // the showdown signs cancel across the 6 ordered deals.
        let mut solver = CfrSolver::new();
        let value = solver.solve();
        assert!((value - 0.125).abs() < 1e-12, "got {}", value);
    }

    #[test]
    fn test_chance_node_averages_the_six_deals() {
        // The root value must equal the arithmetic mean of the 6 per-deal
        // traversals. Replaying each deal against a second fresh solver
        // reproduces the same sub-results because the first iteration's
        // strategies are all uniform.
        let mut whole = CfrSolver::new();
        let root_value = whole.solve();

        let mut total = 0.0;
        for deal in deals() {
            let mut fresh = CfrSolver::new();
            total += fresh.cfr(History::after_deal(), deal, 1.0, 1.0, 1.0 / N_DEALS as f64);
        }

        assert!((root_value - total / N_DEALS as f64).abs() < 1e-12);
    }

    #[test]
    fn test_one_iteration_discovers_all_info_sets() {
        let mut solver = CfrSolver::new();
        solver.run_iteration();

        // 3 cards at each of the 4 decision histories: rr, rrc, rrb, rrcb.
        assert_eq!(solver.store().len(), 12);
        assert_eq!(solver.iterations(), 1);
    }

    #[test]
    fn test_strategies_stay_on_the_simplex() {
        let mut solver = CfrSolver::new();
        solver.train(100);

        for (key, info_set) in solver.store().iter() {
            let total: f64 = info_set.strategy().iter().sum();
            assert!(
                (total - 1.0).abs() < 1e-9,
                "strategy at {} sums to {}",
                key,
                total
            );
            for &prob in info_set.strategy() {
                assert!(prob >= 0.0, "negative probability at {}", key);
            }
        }
    }

    #[test]
    fn test_converges_to_the_known_game_value() {
        let mut solver = CfrSolver::new();
        let stats = solver.train(10_000);

        assert_eq!(stats.info_sets, 12);
        assert!(
            (stats.game_value - GAME_VALUE).abs() < 0.01,
            "mean game value {} should be near -1/18",
            stats.game_value
        );
    }

    #[test]
    fn test_converges_to_known_equilibrium_strategies() {
        let mut solver = CfrSolver::new();
        solver.train(10_000);

        let root = History::after_deal();
        let facing_bet = root.push(KuhnAction::Bet);

        // Player 1 with the Queen at the root almost never bets.
        let queen_root = average_strategy(&solver, Card::Queen, root);
        assert!(queen_root[1] < 0.05, "queen bets {}", queen_root[1]);

        // Player 1's king bets three times as often as the jack bluffs
        // (the equilibrium family ties them together as alpha and 3*alpha).
        let jack_root = average_strategy(&solver, Card::Jack, root);
        let king_root = average_strategy(&solver, Card::King, root);
        assert!(jack_root[1] <= 0.34 + 0.05, "jack bluffs {}", jack_root[1]);
        assert!(
            (king_root[1] - 3.0 * jack_root[1]).abs() < 0.1,
            "king bets {} vs jack {}",
            king_root[1],
            jack_root[1]
        );

        // Player 2 facing a bet: fold the jack, call the king, and call
        // with the queen a third of the time.
        let jack_vs_bet = average_strategy(&solver, Card::Jack, facing_bet);
        let queen_vs_bet = average_strategy(&solver, Card::Queen, facing_bet);
        let king_vs_bet = average_strategy(&solver, Card::King, facing_bet);
        assert!(jack_vs_bet[1] < 0.05, "jack calls {}", jack_vs_bet[1]);
        assert!(king_vs_bet[1] > 0.95, "king calls {}", king_vs_bet[1]);
        assert!(
            (queen_vs_bet[1] - 1.0 / 3.0).abs() < 0.1,
            "queen calls {}",
            queen_vs_bet[1]
        );
    }

    #[test]
    fn test_average_strategies_stabilize() {
        let mut solver = CfrSolver::new();
        solver.train(10_000);

        let before: Vec<[f64; N_ACTIONS]> = solver
            .store()
            .sorted_entries()
            .iter()
            .map(|(_, info_set)| info_set.average_strategy())
            .collect();

        solver.train(1_000);

        let after: Vec<[f64; N_ACTIONS]> = solver
            .store()
            .sorted_entries()
            .iter()
            .map(|(_, info_set)| info_set.average_strategy())
            .collect();

        for (old, new) in before.iter().zip(&after) {
            for (o, n) in old.iter().zip(new) {
                assert!((o - n).abs() < 0.05, "average moved from {} to {}", o, n);
            }
        }
    }
}
