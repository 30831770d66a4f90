use rand::Rng;
use crate::engine::{
    error::EngineError,
    models::{Card, Rank, Suit},
};

/// A standard 52-card deck that can be shuffled and dealt from.
pub struct Deck {
    cards: Vec<Card>,
    cursor: usize,
}

impl Deck {
    /// Fresh deck in suit-major order: hearts A..K, diamonds, clubs, spades.
    pub fn new_ordered() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card { rank, suit }))
            .collect();
        Deck { cards, cursor: 0 }
    }

    /// Build a fresh ordered deck and shuffle it with `rng`.
    pub fn new_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Deck::new_ordered();

        // Fisher-Yates shuffle
        for i in (1..deck.cards.len()).rev() {
            let j = rng.gen_range(0..=i);
            deck.cards.swap(i, j);
        }

        deck
    }

    /// Deal one card, or `None` once the deck is exhausted.
    pub fn deal(&mut self) -> Option<Card> {
        let card = self.cards.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(card)
    }

    /// Deal `n` cards at once. Nothing is dealt if fewer than `n` remain.
    pub fn deal_n(&mut self, n: usize) -> Result<Vec<Card>, EngineError> {
        self.ensure(n)?;
        let cards = self.cards[self.cursor..self.cursor + n].to_vec();
        self.cursor += n;
        Ok(cards)
    }

    /// Deal `per_hand` cards to each of `hands` players, one card at a time
    /// around the table.
    ///
    /// Fails without dealing if the deck cannot cover every hand, or if there
    /// are more hands than cards in a full deck.
    pub fn deal_hands(&mut self, hands: usize, per_hand: usize) -> Result<Vec<Vec<Card>>, EngineError> {
        if hands > self.cards.len() {
            return Err(EngineError::DeckExhausted { requested: hands, remaining: self.remaining() });
        }
        let total = hands.checked_mul(per_hand).ok_or(EngineError::DeckExhausted {
            requested: usize::MAX,
            remaining: self.remaining(),
        })?;
        self.ensure(total)?;
        if total == 0 {
            return Ok(vec![Vec::new(); hands]);
        }
        let mut dealt: Vec<Vec<Card>> = (0..hands).map(|_| Vec::with_capacity(per_hand)).collect();
        for _ in 0..per_hand {
            for hand in dealt.iter_mut() {
                hand.push(self.cards[self.cursor]);
                self.cursor += 1;
            }
        }
        Ok(dealt)
    }

    /// Remaining cards available.
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// All dealt cards so far (useful for integrity checks).
    pub fn dealt_cards(&self) -> &[Card] {
        &self.cards[..self.cursor]
    }

    /// Consume the deck, keeping the undealt cards in order.
    pub fn into_remaining(self) -> Vec<Card> {
        self.cards[self.cursor..].to_vec()
    }

    fn ensure(&self, requested: usize) -> Result<(), EngineError> {
        if requested > self.remaining() {
            return Err(EngineError::DeckExhausted { requested, remaining: self.remaining() });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn deck_has_52_unique_cards() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut deck = Deck::new_shuffled(&mut rng);
        let all: Vec<Card> = std::iter::from_fn(|| deck.deal()).collect();

        let mut seen = std::collections::HashSet::new();
        for c in &all {
            assert!(seen.insert(c.id()), "Duplicate card: {}", c);
        }
        assert_eq!(all.len(), 52);
        assert!(deck.deal().is_none());
    }

    #[test]
    fn deck_is_deterministic_with_seed() {
        let make = |seed: u64| -> Vec<Card> {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut deck = Deck::new_shuffled(&mut rng);
            deck.deal_n(5).unwrap()
        };
        assert_eq!(make(99), make(99));
        assert_ne!(make(99), make(100));
    }

    #[test]
    fn ordered_deck_ids_follow_position() {
        let deck = Deck::new_ordered();
        let ids: Vec<u8> = deck.into_remaining().iter().map(|c| c.id().0).collect();
        assert_eq!(ids, (0..52).collect::<Vec<u8>>());
    }

    #[test]
    fn hands_are_dealt_round_robin() {
        let mut deck = Deck::new_ordered();
        let hands = deck.deal_hands(2, 3).unwrap();
        let ranks = |h: &Vec<Card>| h.iter().map(|c| c.rank.0).collect::<Vec<_>>();
        assert_eq!(ranks(&hands[0]), vec![1, 3, 5]);
        assert_eq!(ranks(&hands[1]), vec![2, 4, 6]);
        assert_eq!(deck.remaining(), 46);
        assert_eq!(deck.dealt_cards().len(), 6);
    }

    #[test]
    fn oversized_hand_requests_fail_cleanly() {
        let mut deck = Deck::new_ordered();
        assert!(matches!(
            deck.deal_hands(usize::MAX, 2),
            Err(EngineError::DeckExhausted { .. })
        ));
        assert!(matches!(
            deck.deal_hands(0, usize::MAX),
            Ok(ref hands) if hands.is_empty()
        ));
        assert!(matches!(
            deck.deal_hands(3, usize::MAX),
            Err(EngineError::DeckExhausted { requested: usize::MAX, remaining: 52 })
        ));
        assert!(deck.deal_hands(53, 0).is_err());
        assert_eq!(deck.remaining(), 52);
    }

    #[test]
    fn overdealing_fails_without_consuming() {
        let mut deck = Deck::new_ordered();
        deck.deal_n(50).unwrap();
        let err = deck.deal_n(3).unwrap_err();
        assert!(matches!(err, EngineError::DeckExhausted { requested: 3, remaining: 2 }));
        assert_eq!(deck.remaining(), 2);
    }
}
