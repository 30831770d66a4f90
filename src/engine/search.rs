//! Optimal partition search.
//!
//! Backtracking over combinations of non-overlapping candidate melds. Hands
//! never exceed 11 cards, so the walk is exhaustive with no memoisation; the
//! only pruning is stopping once a branch reaches zero deadwood. Card use is
//! tracked as a bitmask over [`CardId`](crate::engine::models::CardId).
//!
//! Each call returns the best partition of its own subtree and the caller
//! keeps a child's result only when it is strictly lower, so among equal
//! partitions the first one visited wins. Candidates are taken in pool order
//! (sets before runs), each combination visited once.

use crate::engine::{
    enumerator::find_all_melds,
    models::{Card, Meld, PartitionResult},
};

/// Sum of point values. Works on any group of cards, not just a full hand.
pub fn calculate_deadwood(cards: &[Card]) -> u32 {
    cards.iter().map(|c| c.value()).sum()
}

/// Best node found beneath (and including) one point of the search.
struct Best {
    chosen: Vec<usize>,
    value: u32,
}

struct Search<'a> {
    hand: &'a [Card],
    masks: Vec<u64>,
}

impl Search<'_> {
    fn remaining_value(&self, used: u64) -> u32 {
        self.hand
            .iter()
            .filter(|c| used & c.id().bit() == 0)
            .map(|c| c.value())
            .sum()
    }

    fn explore(&self, start: usize, used: u64, path: &mut Vec<usize>) -> Best {
        let mut best = Best { chosen: path.clone(), value: self.remaining_value(used) };
        if best.value == 0 {
            return best;
        }
        for (i, &mask) in self.masks.iter().enumerate().skip(start) {
            if mask & used != 0 {
                continue;
            }
            path.push(i);
            let child = self.explore(i + 1, used | mask, path);
            path.pop();
            if child.value < best.value {
                log::trace!("deadwood {} -> {} via {:?}", best.value, child.value, child.chosen);
                best = child;
            }
        }
        best
    }
}

/// Split `hand` into the melds that leave the least deadwood.
///
/// The hand is assumed to hold no two cards with the same id; that is not
/// checked here.
pub fn find_optimal_melds(hand: &[Card]) -> PartitionResult {
    let candidates = find_all_melds(hand);
    if candidates.is_empty() {
        return PartitionResult {
            melds: Vec::new(),
            deadwood: hand.to_vec(),
            deadwood_value: calculate_deadwood(hand),
        };
    }

    log::debug!("searching {} candidate melds over {} cards", candidates.len(), hand.len());
    let search = Search { hand, masks: candidates.iter().map(Meld::mask).collect() };
    let best = search.explore(0, 0, &mut Vec::new());

    let used = best.chosen.iter().fold(0u64, |m, &i| m | search.masks[i]);
    let melds: Vec<Meld> = best.chosen.iter().map(|&i| candidates[i].clone()).collect();
    let deadwood: Vec<Card> = hand.iter().copied().filter(|c| used & c.id().bit() == 0).collect();
    log::debug!("best partition: {} melds, {} deadwood", melds.len(), best.value);

    PartitionResult { melds, deadwood, deadwood_value: best.value }
}
