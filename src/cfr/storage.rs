//! Regret-matching state and the information-set store.
//!
//! Each decision point a player cannot distinguish from another — same
//! private card, same public history — shares one [`InfoSet`]. The store
//! owns every info set for the lifetime of the run, creating entries lazily
//! on first visit and never removing them.
//!
//! The traversal is single-threaded, so the store is a plain map mutated
//! through `&mut` rather than behind a lock.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::game::{Card, History, N_ACTIONS};

/// Probabilities below this are treated as numerical noise by
/// [`InfoSet::average_strategy`] and snapped to exactly zero.
const PRUNE_THRESHOLD: f64 = 0.001;

/// Canonical key of an information set: the acting player's private card
/// plus the public action history.
///
/// Distinct reachable `(card, history)` pairs always map to distinct keys,
/// since both components are stored structurally rather than concatenated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InfoKey {
    /// The acting player's private card.
    pub card: Card,
    /// The public history at the decision point.
    pub history: History,
}

impl InfoKey {
    /// Build a key for the acting player's card at `history`.
    pub fn new(card: Card, history: History) -> Self {
        InfoKey { card, history }
    }
}

impl fmt::Display for InfoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.card, self.history)
    }
}

/// Learned state for one information set.
///
/// Holds the accumulated counterfactual regrets, the current regret-matched
/// strategy, and the reach-weighted running sums behind the time-averaged
/// strategy.
#[derive(Debug, Clone)]
pub struct InfoSet {
    /// Accumulated counterfactual regret per action; may be negative.
    regret_sum: [f64; N_ACTIONS],
    /// Current mixed strategy; non-negative, sums to 1.
    strategy: [f64; N_ACTIONS],
    /// Running sum of `reach_pr * strategy` per action across iterations.
    strategy_sum: [f64; N_ACTIONS],
    /// Reach probability accumulated during the current iteration.
    reach_pr: f64,
    /// Running sum of per-iteration reach probabilities.
    reach_pr_sum: f64,
}

impl InfoSet {
    /// A fresh info set: zero regrets, uniform strategy, zero sums.
    fn new() -> Self {
        InfoSet {
            regret_sum: [0.0; N_ACTIONS],
            strategy: [1.0 / N_ACTIONS as f64; N_ACTIONS],
            strategy_sum: [0.0; N_ACTIONS],
            reach_pr: 0.0,
            reach_pr_sum: 0.0,
        }
    }

    /// The current regret-matched strategy.
    pub fn strategy(&self) -> &[f64; N_ACTIONS] {
        &self.strategy
    }

    /// Add the acting player's incoming reach probability for this visit.
    ///
    /// Several traversal branches (one per opponent card) funnel through the
    /// same info set within an iteration; their reach contributions add up
    /// here until [`InfoSet::advance_iteration`] consumes them.
    pub fn accumulate_reach(&mut self, reach_pr: f64) {
        self.reach_pr += reach_pr;
    }

    /// Accumulate counterfactual regret for one action.
    pub fn add_regret(&mut self, action: usize, regret: f64) {
        self.regret_sum[action] += regret;
    }

    /// Recompute the current strategy from accumulated regrets.
    ///
    /// Pure regret matching: each action's weight is its positive regret,
    /// normalized. When no regret is positive the strategy reverts to the
    /// exact uniform distribution.
    pub fn recompute_strategy(&mut self) {
        let mut total = 0.0;
        for (prob, &regret) in self.strategy.iter_mut().zip(&self.regret_sum) {
            *prob = regret.max(0.0);
            total += *prob;
        }

        if total > 0.0 {
            for prob in &mut self.strategy {
                *prob /= total;
            }
        } else {
            self.strategy = [1.0 / N_ACTIONS as f64; N_ACTIONS];
        }
    }

    /// Finish one training iteration for this info set.
    ///
    /// Folds the pre-update strategy, weighted by this iteration's reach
    /// probability, into the running average; recomputes the strategy for
    /// the next iteration; and resets the per-iteration reach accumulator.
    pub fn advance_iteration(&mut self) {
        for (sum, &prob) in self.strategy_sum.iter_mut().zip(&self.strategy) {
            *sum += self.reach_pr * prob;
        }

        self.recompute_strategy();

        self.reach_pr_sum += self.reach_pr;
        self.reach_pr = 0.0;
    }

    /// The time-averaged strategy, which converges to Nash equilibrium.
    ///
    /// Divides the reach-weighted strategy sums by the total reach, snaps
    /// entries below 0.001 to exactly zero, and renormalizes. An info set
    /// never reached keeps its current strategy; a result that is all zero
    /// after thresholding is returned unnormalized.
    pub fn average_strategy(&self) -> [f64; N_ACTIONS] {
        let mut average = self.strategy;

        for (i, prob) in average.iter_mut().enumerate() {
            if self.reach_pr_sum != 0.0 {
                *prob = self.strategy_sum[i] / self.reach_pr_sum;
            }
            if *prob < PRUNE_THRESHOLD {
                *prob = 0.0;
            }
        }

        let total: f64 = average.iter().sum();
        if total == 0.0 {
            return average;
        }

        for prob in &mut average {
            *prob /= total;
        }
        average
    }
}

/// Exclusive owner of every [`InfoSet`] discovered during a run.
#[derive(Debug, Clone, Default)]
pub struct InfoSetStore {
    map: FxHashMap<InfoKey, InfoSet>,
}

impl InfoSetStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the info set for `(card, history)`, creating a fresh one
    /// (uniform strategy, zero regrets) on first visit.
    pub fn get_or_create(&mut self, history: History, card: Card) -> &mut InfoSet {
        self.map
            .entry(InfoKey::new(card, history))
            .or_insert_with(InfoSet::new)
    }

    /// Read access to a stored info set.
    pub fn get(&self, key: &InfoKey) -> Option<&InfoSet> {
        self.map.get(key)
    }

    /// Number of information sets discovered so far.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True iff no info set has been created yet.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over every stored entry, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&InfoKey, &InfoSet)> {
        self.map.iter()
    }

    /// All entries sorted by their display key, for reporting.
    pub fn sorted_entries(&self) -> Vec<(&InfoKey, &InfoSet)> {
        let mut entries: Vec<_> = self.map.iter().collect();
        entries.sort_by_key(|(key, _)| key.to_string());
        entries
    }

    /// Advance every stored info set to the next iteration.
    ///
    /// Must be called exactly once per training iteration, after the
    /// iteration's full traversal has completed.
    pub fn advance_iteration(&mut self) {
        for info_set in self.map.values_mut() {
            info_set.advance_iteration();
        }
    }
}
