//! Action histories and terminal classification.

use std::fmt;

use super::{Card, KuhnAction, Player};

/// Maximum number of player decisions in any history (`cbc` / `cbb`).
pub const MAX_DECISIONS: usize = 3;

/// Full length of the forced deal/ante prefix (`rr`).
const PREFIX_LEN: usize = 2;

/// An immutable path through the game tree.
///
/// The two forced `rr` steps (deal and antes) are part of every post-deal
/// history but carry no choice, so only the player decisions are stored; the
/// prefix is implicit in [`History::len`]. The empty history (`len() == 0`)
/// is the chance node before the deal.
///
/// Copying a history is free, and extending one ([`History::push`]) never
/// allocates: decisions live in a fixed-capacity array sized by the deepest
/// terminal pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct History {
    decisions: [KuhnAction; MAX_DECISIONS],
    len: u8,
}

impl History {
    /// The empty history: the chance node before cards are dealt.
    pub const fn new() -> Self {
        History {
            decisions: [KuhnAction::Check; MAX_DECISIONS],
            len: 0,
        }
    }

    /// The `rr` history: deal and antes done, player 1 to act.
    pub const fn after_deal() -> Self {
        History {
            decisions: [KuhnAction::Check; MAX_DECISIONS],
            len: PREFIX_LEN as u8,
        }
    }

    /// Full length including the forced `rr` prefix; 0 before the deal.
    ///
    /// The acting player is decided by the parity of this length (even →
    /// player 1), prefix included.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// True iff this is the pre-deal chance node.
    pub fn is_chance(&self) -> bool {
        self.len == 0
    }

    /// The player to act, by history-length parity.
    pub fn to_act(&self) -> Player {
        if self.len() % 2 == 0 {
            Player::First
        } else {
            Player::Second
        }
    }

    /// The player decisions taken so far, prefix excluded.
    pub fn decisions(&self) -> &[KuhnAction] {
        &self.decisions[..self.len().saturating_sub(PREFIX_LEN)]
    }

    /// Extend this history with one more decision.
    ///
    /// Must not be called on the chance node or past the deepest terminal
    /// pattern; the bound holds by construction since the solver stops at
    /// terminals.
    pub fn push(self, action: KuhnAction) -> Self {
        debug_assert!(self.len >= PREFIX_LEN as u8, "push before the deal");
        debug_assert!(
            self.len() < PREFIX_LEN + MAX_DECISIONS,
            "push past the deepest terminal"
        );

        let mut next = self;
        next.decisions[next.len() - PREFIX_LEN] = action;
        next.len += 1;
        next
    }

    /// Classify this history as terminal, if it is one.
    pub fn terminal(&self) -> Option<Terminal> {
        use KuhnAction::{Bet, Check};

        match self.decisions() {
            [Check, Check] => Some(Terminal::CheckCheck),
            [Bet, Check] => Some(Terminal::BetFold),
            [Check, Bet, Check] => Some(Terminal::CheckBetFold),
            [Bet, Bet] => Some(Terminal::BetCall),
            [Check, Bet, Bet] => Some(Terminal::CheckBetCall),
            _ => None,
        }
    }
}

impl Default for History {
    fn default() -> Self {
        History::new()
    }
}

impl fmt::Display for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_chance() {
            return Ok(());
        }
        write!(f, "rr")?;
        for action in self.decisions() {
            write!(f, "{}", action)?;
        }
        Ok(())
    }
}

/// The closed set of ways a hand can end.
///
/// Every history that ends play matches exactly one variant, so payoff code
/// cannot be reached with an unrecognized history: the classification gap
/// of the string-matching formulation is unrepresentable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    /// `rrcc`: both checked, showdown for the antes.
    CheckCheck,
    /// `rrbc`: player 1 bet, player 2 folded.
    BetFold,
    /// `rrcbc`: player 2 bet after a check, player 1 folded.
    CheckBetFold,
    /// `rrbb`: player 1 bet, player 2 called, showdown for the doubled pot.
    BetCall,
    /// `rrcbb`: player 2 bet after a check, player 1 called, showdown.
    CheckBetCall,
}

impl Terminal {
    /// The player to move at this terminal history, by length parity.
    ///
    /// Payoffs are expressed from this player's perspective; the solver
    /// negates returned values at every ply.
    pub fn mover(self) -> Player {
        match self {
            // Full length 4.
            Terminal::CheckCheck | Terminal::BetFold | Terminal::BetCall => Player::First,
            // Full length 5.
            Terminal::CheckBetFold | Terminal::CheckBetCall => Player::Second,
        }
    }

    /// Payoff to the player to move, for the deal `[card_1, card_2]`.
    ///
    /// Fold terminals pay one ante to the mover regardless of cards;
    /// showdowns compare cards for the checked pot (1) or the bet pot (2).
    /// Ties are impossible since the two cards are distinct.
    pub fn payoff(self, cards: [Card; 2]) -> f64 {
        debug_assert_ne!(cards[0], cards[1], "players cannot hold the same card");

        let (mover, opponent) = match self.mover() {
            Player::First => (cards[0], cards[1]),
            Player::Second => (cards[1], cards[0]),
        };

        match self {
            Terminal::BetFold | Terminal::CheckBetFold => 1.0,
            Terminal::CheckCheck => {
                if mover > opponent {
                    1.0
                } else {
                    -1.0
                }
            }
            Terminal::BetCall | Terminal::CheckBetCall => {
                if mover > opponent {
                    2.0
                } else {
                    -2.0
                }
            }
        }
    }
}
