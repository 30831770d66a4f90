//! Core engine — card model, meld rules, partition search and round scoring.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Cards, ranks, suits, melds and result structs |
//! | `error`      | `EngineError` for the fallible edges (parsing, dealing, scoring) |
//! | `validator`  | Is this group a valid set / run? |
//! | `enumerator` | Every candidate set and run in a hand |
//! | `search`     | Deadwood counting and the optimal meld partition |
//! | `rules`      | Knock, Gin and layoff checks; `RuleConfig` |
//! | `scoring`    | Knock / Gin / Undercut round scoring with layoffs |
//! | `deck`       | 52-card deck with Fisher-Yates shuffle and round-robin dealing |
//! | `generator`  | Seeded `generate_deal()` for practice hands |
//! | `helpers`    | Sorting and formatting for display |

pub mod deck;
pub mod enumerator;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod rules;
pub mod scoring;
pub mod search;
pub mod validator;

pub use enumerator::{find_all_melds, find_all_runs, find_all_sets};
pub use error::EngineError;
pub use generator::{generate_deal, Deal, DealRequest};
pub use models::{
    parse_hand, Card, CardId, GinReport, KnockReport, Layoff, Meld, MeldKind,
    PartitionResult, Rank, Suit,
};
pub use rules::{
    can_knock, can_knock_with, can_lay_off, find_layoffs, is_gin, RuleConfig, KNOCK_THRESHOLD,
};
pub use scoring::{score_deadwood, score_round, RoundOutcome, RoundScore, Side};
pub use search::{calculate_deadwood, find_optimal_melds};
pub use validator::{is_valid_meld, is_valid_run, is_valid_set};
