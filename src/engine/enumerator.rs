//! Candidate meld enumeration.
//!
//! Produces every set and run a player could form from a hand. The search
//! draws from this pool, so anything missing here can never be chosen.

use crate::engine::models::{Card, Meld, MeldKind, Rank, Suit};

/// Every candidate set, ranks visited Ace to King.
///
/// A rank held three times yields that one group. A rank held four times
/// yields the full group plus each 3-card subset, so the search can decide
/// whether to keep the fourth card in the set or free it.
pub fn find_all_sets(hand: &[Card]) -> Vec<Vec<Card>> {
    let mut sets = Vec::new();
    for rank in Rank::ALL {
        let group: Vec<Card> = hand.iter().copied().filter(|c| c.rank == rank).collect();
        match group.len() {
            3 => sets.push(group),
            4 => {
                sets.push(group.clone());
                for skip in 0..4 {
                    let subset = group
                        .iter()
                        .enumerate()
                        .filter(|&(i, _)| i != skip)
                        .map(|(_, &c)| c)
                        .collect();
                    sets.push(subset);
                }
            }
            _ => {}
        }
    }
    sets
}

/// Every candidate run, suits visited in deck order.
///
/// From each start card in a suit, the run grows upward one rank at a time and
/// every prefix of length 3+ is emitted, so a 5-card stretch gives 3, 4 and 5
/// card runs from its lowest card, then from the next, and so on. A gap ends
/// the scan for that start; a repeated rank is skipped.
pub fn find_all_runs(hand: &[Card]) -> Vec<Vec<Card>> {
    let mut runs = Vec::new();
    for suit in Suit::ALL {
        let mut sorted: Vec<Card> = hand.iter().copied().filter(|c| c.suit == suit).collect();
        if sorted.len() < 3 {
            continue;
        }
        sorted.sort_by_key(|c| c.rank.order());

        for start in 0..sorted.len() - 2 {
            let mut run = vec![sorted[start]];
            for &next in &sorted[start + 1..] {
                let last = run[run.len() - 1].rank.order();
                let cur = next.rank.order();
                if cur == last + 1 {
                    run.push(next);
                    if run.len() >= 3 {
                        runs.push(run.clone());
                    }
                } else if cur > last + 1 {
                    break;
                }
            }
        }
    }
    runs
}

/// All sets followed by all runs, tagged with their kind.
pub fn find_all_melds(hand: &[Card]) -> Vec<Meld> {
    let sets = find_all_sets(hand).into_iter().map(|c| Meld::new(MeldKind::Set, c));
    let runs = find_all_runs(hand).into_iter().map(|c| Meld::new(MeldKind::Run, c));
    sets.chain(runs).collect()
}
