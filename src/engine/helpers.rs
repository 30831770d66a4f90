//! Sorting and formatting helpers for showing hands.
//!
//! The engine never depends on card order; these exist for callers that
//! display hands the way a player would arrange them.

use crate::engine::models::{Card, Suit};

fn suit_rank(s: Suit) -> u8 {
    match s {
        Suit::Spades   => 0,
        Suit::Hearts   => 1,
        Suit::Clubs    => 2,
        Suit::Diamonds => 3,
    }
}

/// Group by suit (spades, hearts, clubs, diamonds), Ace low within a suit.
pub fn sort_by_suit_then_rank(cards: &[Card]) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_by_key(|c| (suit_rank(c.suit), c.rank.order()));
    sorted
}

/// Ace low first; ties broken by the same suit order.
pub fn sort_by_rank_then_suit(cards: &[Card]) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_by_key(|c| (c.rank.order(), suit_rank(c.suit)));
    sorted
}

/// Format cards as a space-separated string (e.g. "7h 7d 10s").
pub fn cards_str(cards: &[Card]) -> String {
    cards.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
}
