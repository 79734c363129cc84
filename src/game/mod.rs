//! The fixed Kuhn poker game model.
//!
//! Kuhn poker is a two-player, zero-sum poker game small enough to solve
//! exactly, which makes it the standard validation target for CFR
//! implementations.
//!
//! ## Game Rules
//!
//! - 3 cards: Jack < Queen < King
//! - Both players ante 1 chip and receive 1 card
//! - Player 1 acts first: Check or Bet (1 chip)
//! - Facing a bet, Check means fold and Bet means call
//! - Higher card wins at showdown
//!
//! ## Game Tree
//!
//! ```text
//! deal (chance, 6 ordered card pairs)
//! └── P1
//!     ├── Check
//!     │   └── P2
//!     │       ├── Check → showdown, pot 1        ("rrcc")
//!     │       └── Bet
//!     │           └── P1
//!     │               ├── Check → P2 wins 1      ("rrcbc")
//!     │               └── Bet → showdown, pot 2  ("rrcbb")
//!     └── Bet
//!         └── P2
//!             ├── Check → P1 wins 1              ("rrbc")
//!             └── Bet → showdown, pot 2          ("rrbb")
//! ```
//!
//! Histories carry the forced `rr` deal/ante prefix, so the acting player is
//! always `history length % 2` (even → player 1). See [`History`].

use std::fmt;

mod history;

pub use history::{History, Terminal, MAX_DECISIONS};

/// Number of actions available at every decision point.
pub const N_ACTIONS: usize = 2;

/// Number of ordered ways to deal two distinct cards from the 3-card deck.
pub const N_DEALS: usize = 6;

/// One of the three cards in the fixed deck.
///
/// The derived ordering (`Jack < Queen < King`) decides showdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Card {
    /// Lowest card.
    Jack,
    /// Middle card.
    Queen,
    /// Highest card.
    King,
}

impl Card {
    /// The full deck, lowest card first.
    pub const DECK: [Card; 3] = [Card::Jack, Card::Queen, Card::King];

    /// One-letter symbol used in info-set keys.
    pub fn symbol(self) -> char {
        match self {
            Card::Jack => 'J',
            Card::Queen => 'Q',
            Card::King => 'K',
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A seat at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    /// Player 1, acts at even history lengths.
    First,
    /// Player 2, acts at odd history lengths.
    Second,
}

impl Player {
    /// The opposing seat.
    pub fn other(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Index into a `[card_1, card_2]` deal.
    pub fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }
}

/// One of the two actions available at every decision point.
///
/// `Check` folds when facing a bet; `Bet` calls when facing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KuhnAction {
    /// Check, or fold when facing a bet.
    Check,
    /// Bet one chip, or call when facing a bet.
    Bet,
}

impl KuhnAction {
    /// Both actions, in strategy-vector order.
    pub const ALL: [KuhnAction; N_ACTIONS] = [KuhnAction::Check, KuhnAction::Bet];

    /// One-letter symbol used in history strings.
    pub fn symbol(self) -> char {
        match self {
            KuhnAction::Check => 'c',
            KuhnAction::Bet => 'b',
        }
    }
}

impl fmt::Display for KuhnAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Enumerate every ordered pair of distinct cards as `[card_1, card_2]`.
///
/// All 6 deals are equally likely; the chance probability of each is
/// `1.0 / N_DEALS as f64`.
pub fn deals() -> impl Iterator<Item = [Card; 2]> {
    Card::DECK.iter().flat_map(|&first| {
        Card::DECK
            .iter()
            .filter_map(move |&second| (first != second).then_some([first, second]))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_order() {
        assert!(Card::Jack < Card::Queen);
        assert!(Card::Queen < Card::King);
        assert_eq!(Card::DECK.len(), 3);
    }

    #[test]
    fn test_deals_are_distinct_ordered_pairs() {
        let all: Vec<[Card; 2]> = deals().collect();
        assert_eq!(all.len(), N_DEALS);

        for deal in &all {
            assert_ne!(deal[0], deal[1]);
        }

        // Ordered pairs: both (J, Q) and (Q, J) present, no duplicates.
        assert!(all.contains(&[Card::Jack, Card::Queen]));
        assert!(all.contains(&[Card::Queen, Card::Jack]));
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_player_alternation() {
        assert_eq!(Player::First.other(), Player::Second);
        assert_eq!(Player::Second.other(), Player::First);
        assert_eq!(Player::First.index(), 0);
        assert_eq!(Player::Second.index(), 1);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Card::King.to_string(), "K");
        assert_eq!(KuhnAction::Check.to_string(), "c");
        assert_eq!(KuhnAction::Bet.to_string(), "b");
    }
}
