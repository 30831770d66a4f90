//! Game rules built on the partition search: knocking, Gin and layoffs.

use serde::{Deserialize, Serialize};

use crate::engine::{
    error::EngineError,
    models::{Card, GinReport, KnockReport, Layoff, Meld, MeldKind, Rank},
    search::find_optimal_melds,
};

/// Highest deadwood value a player may knock with.
pub const KNOCK_THRESHOLD: u32 = 10;

/// Tunable rule constants. Missing fields take the standard values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    pub knock_threshold: u32,
    pub gin_bonus: u32,
    pub undercut_bonus: u32,
}

impl Default for RuleConfig {
    fn default() -> Self {
        RuleConfig {
            knock_threshold: KNOCK_THRESHOLD,
            gin_bonus: 25,
            undercut_bonus: 25,
        }
    }
}

impl RuleConfig {
    /// Parse from JSON, e.g. `{"gin_bonus": 20}`.
    pub fn from_json(s: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(s)?)
    }
}

pub fn can_knock(hand: &[Card]) -> KnockReport {
    can_knock_with(hand, &RuleConfig::default())
}

/// Knock check against a custom threshold. The threshold is inclusive.
pub fn can_knock_with(hand: &[Card], rules: &RuleConfig) -> KnockReport {
    let best = find_optimal_melds(hand);
    KnockReport {
        can_knock: best.deadwood_value <= rules.knock_threshold,
        deadwood_value: best.deadwood_value,
        melds: best.melds,
        deadwood: best.deadwood,
    }
}

pub fn is_gin(hand: &[Card]) -> GinReport {
    let best = find_optimal_melds(hand);
    GinReport { is_gin: best.deadwood_value == 0, melds: best.melds }
}

/// Can `card` legally extend someone else's meld?
///
/// A set takes only its missing fourth suit. A run takes the same suit one
/// rank below its low end or above its high end, never past Ace or King.
pub fn can_lay_off(card: Card, meld: &Meld) -> bool {
    let Some(first) = meld.cards.first() else {
        return false;
    };
    match meld.kind {
        MeldKind::Set => {
            meld.len() == 3
                && card.rank == first.rank
                && meld.cards.iter().all(|c| c.suit != card.suit)
        }
        MeldKind::Run => {
            if card.suit != first.suit {
                return false;
            }
            let orders = meld.cards.iter().map(|c| c.rank.order());
            let (low, high) = orders.fold((u8::MAX, 0), |(lo, hi), o| (lo.min(o), hi.max(o)));
            let order = card.rank.order();
            (low > Rank::ACE.order() && order + 1 == low)
                || (high < Rank::KING.order() && order == high + 1)
        }
    }
}

/// Every (deadwood card, meld) pairing that is legal right now.
///
/// A card fitting several melds is listed once per meld; choosing between
/// them is left to the caller.
pub fn find_layoffs(deadwood: &[Card], melds: &[Meld]) -> Vec<Layoff> {
    deadwood
        .iter()
        .flat_map(|&card| {
            melds
                .iter()
                .enumerate()
                .filter(move |(_, meld)| can_lay_off(card, meld))
                .map(move |(meld_index, _)| Layoff { card, meld_index })
        })
        .collect()
}
