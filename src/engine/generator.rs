use rand::{rngs::StdRng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::engine::{deck::Deck, error::EngineError, models::Card};

/// What to deal. Pass `rng_seed: Some(_)` to reproduce the same deal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealRequest {
    pub players: usize,
    pub cards_per_hand: usize,
    pub rng_seed: Option<u64>,
}

impl DealRequest {
    /// Standard two-player, ten-card deal with a seed.
    pub fn seeded(seed: u64) -> Self {
        DealRequest { rng_seed: Some(seed), ..DealRequest::default() }
    }
}

impl Default for DealRequest {
    fn default() -> Self {
        DealRequest { players: 2, cards_per_hand: 10, rng_seed: None }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deal {
    pub deal_id: String,
    pub hands: Vec<Vec<Card>>,
    /// First card of the discard pile, turned after the hands are dealt.
    pub upcard: Option<Card>,
    pub stock: Vec<Card>,
}

/// Shuffle a fresh deck and deal hands, then turn the upcard.
pub fn generate_deal(request: &DealRequest) -> Result<Deal, EngineError> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    let deal_id = format!("GR-{:08X}", rng.next_u32());
    let mut deck = Deck::new_shuffled(&mut rng);
    let hands = deck.deal_hands(request.players, request.cards_per_hand)?;
    let upcard = deck.deal();
    log::debug!(
        "deal {}: {} hands of {}, {} in stock",
        deal_id, hands.len(), request.cards_per_hand, deck.remaining()
    );

    Ok(Deal { deal_id, hands, upcard, stock: deck.into_remaining() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_deal() {
        let a = generate_deal(&DealRequest::seeded(7)).unwrap();
        let b = generate_deal(&DealRequest::seeded(7)).unwrap();
        assert_eq!(a.deal_id, b.deal_id);
        assert_eq!(a.hands, b.hands);
        assert_eq!(a.upcard, b.upcard);
        assert_eq!(a.stock, b.stock);
    }

    #[test]
    fn standard_deal_accounts_for_every_card() {
        let deal = generate_deal(&DealRequest::seeded(1)).unwrap();
        assert_eq!(deal.hands.len(), 2);
        assert!(deal.hands.iter().all(|h| h.len() == 10));
        assert!(deal.upcard.is_some());
        assert_eq!(deal.stock.len(), 31);
        assert!(deal.deal_id.starts_with("GR-"));
    }

    #[test]
    fn too_many_players_is_an_error() {
        let request = DealRequest { players: 6, cards_per_hand: 10, rng_seed: Some(3) };
        assert!(matches!(generate_deal(&request), Err(EngineError::DeckExhausted { .. })));
    }

    #[test]
    fn overflowing_requests_are_errors() {
        let no_players = DealRequest { players: 0, cards_per_hand: usize::MAX, rng_seed: Some(3) };
        let deal = generate_deal(&no_players).unwrap();
        assert!(deal.hands.is_empty());
        assert_eq!(deal.stock.len(), 51);

        let huge = DealRequest { players: usize::MAX, cards_per_hand: 2, rng_seed: Some(3) };
        assert!(matches!(generate_deal(&huge), Err(EngineError::DeckExhausted { .. })));
    }

    #[test]
    fn entropy_deal_is_valid() {
        let deal = generate_deal(&DealRequest::default()).unwrap();
        assert_eq!(deal.hands.iter().map(Vec::len).sum::<usize>(), 20);
    }
}
