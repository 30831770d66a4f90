//! Round scoring after a knock.
//!
//! | Outcome  | Winner   | Points                                   |
//! |----------|----------|------------------------------------------|
//! | Gin      | knocker  | gin bonus + defender deadwood            |
//! | Undercut | defender | undercut bonus + (knocker - defender)    |
//! | Knock    | knocker  | defender deadwood - knocker deadwood     |
//!
//! Ties on deadwood go to the defender as an undercut.

use std::collections::HashSet;
use std::fmt;
use serde::{Deserialize, Serialize};

use crate::engine::{
    error::EngineError,
    models::{Card, Meld, MeldKind},
    rules::{can_lay_off, RuleConfig},
    search::{calculate_deadwood, find_optimal_melds},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Knock,
    Gin,
    Undercut,
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundOutcome::Knock    => write!(f, "Knock"),
            RoundOutcome::Gin      => write!(f, "Gin"),
            RoundOutcome::Undercut => write!(f, "Undercut"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Knocker,
    Defender,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundScore {
    pub outcome: RoundOutcome,
    pub winner: Side,
    pub points: u32,
    pub knocker_deadwood: u32,
    /// Defender deadwood after layoffs.
    pub defender_deadwood: u32,
    /// Defender cards laid off onto the knocker's melds.
    pub laid_off: Vec<Card>,
}

/// Score from deadwood totals alone (no layoffs applied here).
pub fn score_deadwood(
    knocker_deadwood: u32,
    defender_deadwood: u32,
    gin: bool,
    rules: &RuleConfig,
) -> RoundScore {
    let (outcome, winner, points) = if gin {
        (RoundOutcome::Gin, Side::Knocker, rules.gin_bonus + defender_deadwood)
    } else if defender_deadwood <= knocker_deadwood {
        (
            RoundOutcome::Undercut,
            Side::Defender,
            rules.undercut_bonus + (knocker_deadwood - defender_deadwood),
        )
    } else {
        (RoundOutcome::Knock, Side::Knocker, defender_deadwood - knocker_deadwood)
    };
    RoundScore {
        outcome,
        winner,
        points,
        knocker_deadwood,
        defender_deadwood,
        laid_off: Vec::new(),
    }
}

/// One arrangement of layoffs reached during the search.
#[derive(Clone)]
struct Layout {
    melds: Vec<Meld>,
    laid: Vec<Card>,
    left: Vec<Card>,
    value: u32,
}

/// Walks every order of layoffs. Layouts already seen (same cards on the
/// same melds) are skipped.
struct LayoffSearch {
    seen: HashSet<Vec<u64>>,
}

impl LayoffSearch {
    fn explore(&mut self, layout: Layout) -> Layout {
        if layout.value == 0 || !self.seen.insert(layout.melds.iter().map(Meld::mask).collect()) {
            return layout;
        }
        let mut best = layout.clone();
        for (ci, &card) in layout.left.iter().enumerate() {
            for (mi, meld) in layout.melds.iter().enumerate() {
                if !can_lay_off(card, meld) {
                    continue;
                }
                let mut next = layout.clone();
                next.left.remove(ci);
                next.value -= card.value();
                next.laid.push(card);
                let target = &mut next.melds[mi];
                target.cards.push(card);
                if target.kind == MeldKind::Run {
                    target.cards.sort_by_key(|c| c.rank.order());
                }
                let child = self.explore(next);
                if child.value < best.value {
                    best = child;
                }
            }
        }
        best
    }
}

/// Lay off `deadwood` onto `melds`, choosing the arrangement that leaves the
/// least deadwood.
///
/// Melds grow as cards land on them, so a 10 laid on J-Q-K lets a 9 follow.
/// A card fitting two melds is tried on each. `melds` ends up holding the
/// chosen arrangement. Returns the cards laid off and the cards still left.
pub fn apply_layoffs(deadwood: &[Card], melds: &mut [Meld]) -> (Vec<Card>, Vec<Card>) {
    let start = Layout {
        melds: melds.to_vec(),
        laid: Vec::new(),
        left: deadwood.to_vec(),
        value: calculate_deadwood(deadwood),
    };
    let best = LayoffSearch { seen: HashSet::new() }.explore(start);
    melds.clone_from_slice(&best.melds);
    (best.laid, best.left)
}

/// Score a full round from both hands.
///
/// Fails if the knocker's best deadwood is above the knock threshold. The
/// defender may not lay off against Gin.
pub fn score_round(
    knocker_hand: &[Card],
    defender_hand: &[Card],
    rules: &RuleConfig,
) -> Result<RoundScore, EngineError> {
    let knocker = find_optimal_melds(knocker_hand);
    if knocker.deadwood_value > rules.knock_threshold {
        return Err(EngineError::CannotKnock {
            deadwood: knocker.deadwood_value,
            threshold: rules.knock_threshold,
        });
    }
    let gin = knocker.deadwood_value == 0;

    let defender = find_optimal_melds(defender_hand);
    let (laid_off, left) = if gin {
        (Vec::new(), defender.deadwood)
    } else {
        let mut melds = knocker.melds;
        apply_layoffs(&defender.deadwood, &mut melds)
    };
    let defender_deadwood = calculate_deadwood(&left);

    let mut score = score_deadwood(knocker.deadwood_value, defender_deadwood, gin, rules);
    score.laid_off = laid_off;
    log::debug!(
        "round scored: {} for {:?}, {} points ({} vs {})",
        score.outcome, score.winner, score.points, score.knocker_deadwood, score.defender_deadwood
    );
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::models::parse_hand;

    fn cards(s: &str) -> Vec<Card> {
        parse_hand(s).unwrap()
    }

    #[test]
    fn deadwood_scoring_matches_standard_values() {
        let rules = RuleConfig::default();
        let knock = score_deadwood(6, 15, false, &rules);
        assert_eq!((knock.outcome, knock.winner, knock.points), (RoundOutcome::Knock, Side::Knocker, 9));

        let gin = score_deadwood(0, 22, true, &rules);
        assert_eq!((gin.outcome, gin.points), (RoundOutcome::Gin, 47));

        let under = score_deadwood(8, 5, false, &rules);
        assert_eq!((under.outcome, under.winner, under.points), (RoundOutcome::Undercut, Side::Defender, 28));

        let tie = score_deadwood(10, 10, false, &rules);
        assert_eq!((tie.winner, tie.points), (Side::Defender, 25));
    }

    #[test]
    fn layoffs_chain_along_a_run() {
        let mut melds = vec![Meld::from_cards(cards("Jh Qh Kh")).unwrap()];
        let (laid, left) = apply_layoffs(&cards("9h 10h 4c"), &mut melds);
        assert_eq!(laid, cards("10h 9h"));
        assert_eq!(left, cards("4c"));
        assert_eq!(melds[0].cards, cards("9h 10h Jh Qh Kh"));
    }

    #[test]
    fn layoffs_prefer_the_meld_that_frees_more_cards() {
        // 5s fits the set and the run; only the run lets 4s follow.
        let mut melds = vec![
            Meld::from_cards(cards("5h 5d 5c")).unwrap(),
            Meld::from_cards(cards("6s 7s 8s")).unwrap(),
        ];
        let (laid, left) = apply_layoffs(&cards("5s 4s"), &mut melds);
        assert_eq!(laid, cards("5s 4s"));
        assert!(left.is_empty());
        assert_eq!(melds[0].len(), 3);
        assert_eq!(melds[1].cards, cards("4s 5s 6s 7s 8s"));
    }

    #[test]
    fn nothing_fits_leaves_melds_untouched() {
        let mut melds = vec![Meld::from_cards(cards("5h 5d 5c")).unwrap()];
        let (laid, left) = apply_layoffs(&cards("Kd 2c"), &mut melds);
        assert!(laid.is_empty());
        assert_eq!(left, cards("Kd 2c"));
        assert_eq!(melds[0].cards, cards("5h 5d 5c"));
    }

    #[test]
    fn defender_undercuts_after_laying_off() {
        // Knocker: 7s set, 4-5-6s, deadwood 2c 8s = 10.
        let knocker = cards("7h 7d 7c 4s 5s 6s 2c 8s");
        // Defender melds Ks and Qs; 3s goes on the spade run, leaving 8d.
        let defender = cards("Kh Kd Kc Qh Qd Qc 3s 8d");
        let score = score_round(&knocker, &defender, &RuleConfig::default()).unwrap();
        assert_eq!(score.laid_off, cards("3s"));
        assert_eq!(score.defender_deadwood, 8);
        assert_eq!(
            (score.outcome, score.winner, score.points),
            (RoundOutcome::Undercut, Side::Defender, 25 + 2)
        );
    }

    #[test]
    fn round_applies_defender_layoffs() {
        // Knocker: 7s set, 4-5-6s, deadwood 2c 8s = 10.
        let knocker = cards("7h 7d 7c 4s 5s 6s 2c 8s");
        // Defender 7s lays onto the set and 3s onto the run.
        let defender = cards("7s 3s Kd Qc 9h");
        let score = score_round(&knocker, &defender, &RuleConfig::default()).unwrap();
        assert_eq!(score.knocker_deadwood, 10);
        assert_eq!(score.laid_off.len(), 2);
        assert_eq!(score.defender_deadwood, 29);
        assert_eq!((score.outcome, score.points), (RoundOutcome::Knock, 19));
    }

    #[test]
    fn gin_blocks_layoffs() {
        let knocker = cards("As 2s 3s 7h 7d 7c 10c Jc Qc Kc");
        let defender = cards("4s 7s 9d");
        let score = score_round(&knocker, &defender, &RuleConfig::default()).unwrap();
        assert_eq!(score.outcome, RoundOutcome::Gin);
        assert!(score.laid_off.is_empty());
        assert_eq!(score.points, 25 + 20);
    }

    #[test]
    fn knocking_above_threshold_fails() {
        let err = score_round(&cards("Kh Qd 9c"), &cards("As"), &RuleConfig::default());
        assert!(matches!(err, Err(EngineError::CannotKnock { deadwood: 29, threshold: 10 })));
    }
}
