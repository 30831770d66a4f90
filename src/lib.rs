//! # gin_rummy_engine
//!
//! Meld detection and optimal-arrangement engine for Gin Rummy.
//!
//! Given any hand of cards, the engine finds every set and run it contains,
//! searches for the combination of non-overlapping melds that leaves the
//! least deadwood, and answers the rule questions built on top of that:
//! can this hand knock, is it Gin, which cards can be laid off, and how does
//! a round score.
//!
//! ## How it works
//!
//! 1. Build a hand with [`parse_hand`] (`"7h 7d 7c 4s 5s 6s"`), from the UI's
//!    JSON with [`client_adapter::hand_from_json`], or deal one with
//!    [`generate_deal`].
//! 2. Call [`find_optimal_melds`] — candidates come from [`find_all_melds`]
//!    and a backtracking search picks the partition with minimum deadwood.
//! 3. Ask [`can_knock`], [`is_gin`], [`find_layoffs`] or [`score_round`].
//!
//! Every engine call is a pure function of its input: no shared state, no
//! randomness (shuffling lives in [`generate_deal`] only), safe to call from
//! any thread.
//!
//! ## Quick start
//!
//! ```rust
//! use gin_rummy_engine::{can_knock, find_optimal_melds, parse_hand};
//!
//! let hand = parse_hand("7h 7d 7c 4s 5s 6s Kd 2c 9s Ad").unwrap();
//! let best = find_optimal_melds(&hand);
//! assert_eq!(best.deadwood_value, 22);
//! assert!(!can_knock(&hand).can_knock);
//! ```
//!
//! Hands are assumed to come from a single deck: no two cards with the same
//! rank and suit. The engine does not check this.

pub mod client_adapter;
pub mod engine;

// Convenience re-exports so callers can use `gin_rummy_engine::find_optimal_melds`
// directly without reaching into `engine::`.
pub use engine::{
    calculate_deadwood, can_knock, can_knock_with, can_lay_off, find_all_melds, find_all_runs,
    find_all_sets, find_layoffs, find_optimal_melds, generate_deal, is_gin, is_valid_meld,
    is_valid_run, is_valid_set, parse_hand, score_deadwood, score_round, Card, CardId, Deal,
    DealRequest, EngineError, GinReport, KnockReport, Layoff, Meld, MeldKind, PartitionResult,
    Rank, RoundOutcome, RoundScore, RuleConfig, Side, Suit, KNOCK_THRESHOLD,
};
