//! Pure predicates deciding whether a small group of cards is a legal meld.
//!
//! None of these fail: any group that breaks a rule simply returns `false`
//! (or `None` for [`is_valid_meld`]).

use crate::engine::models::{Card, MeldKind};

/// 3 or 4 cards of one rank, no suit repeated.
pub fn is_valid_set(cards: &[Card]) -> bool {
    if !(3..=4).contains(&cards.len()) {
        return false;
    }
    let rank = cards[0].rank;
    let mut seen = 0u8;
    for c in cards {
        let bit = 1u8 << c.suit.index();
        if c.rank != rank || seen & bit != 0 {
            return false;
        }
        seen |= bit;
    }
    true
}

/// 3+ cards of one suit whose ranks step by exactly one, Ace low, no wraparound.
pub fn is_valid_run(cards: &[Card]) -> bool {
    if cards.len() < 3 {
        return false;
    }
    let suit = cards[0].suit;
    if cards.iter().any(|c| c.suit != suit) {
        return false;
    }
    let mut orders: Vec<u8> = cards.iter().map(|c| c.rank.order()).collect();
    orders.sort_unstable();
    orders.windows(2).all(|w| w[1] == w[0] + 1)
}

/// Classify a group. Sets are checked first.
pub fn is_valid_meld(cards: &[Card]) -> Option<MeldKind> {
    if is_valid_set(cards) {
        Some(MeldKind::Set)
    } else if is_valid_run(cards) {
        Some(MeldKind::Run)
    } else {
        None
    }
}
