use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::engine::{error::EngineError, validator};

// ---------------------------------------------------------------------------
// Card primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// Deck order: hearts, diamonds, clubs, spades.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn index(self) -> u8 {
        match self {
            Suit::Hearts   => 0,
            Suit::Diamonds => 1,
            Suit::Clubs    => 2,
            Suit::Spades   => 3,
        }
    }

    /// Lowercase name, as used in card ids ("7-hearts").
    pub fn name(self) -> &'static str {
        match self {
            Suit::Hearts   => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs    => "clubs",
            Suit::Spades   => "spades",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Hearts   => '\u{2665}',
            Suit::Diamonds => '\u{2666}',
            Suit::Clubs    => '\u{2663}',
            Suit::Spades   => '\u{2660}',
        }
    }

    fn from_char(c: char) -> Option<Suit> {
        match c {
            'h' | 'H' | '\u{2665}' => Some(Suit::Hearts),
            'd' | 'D' | '\u{2666}' => Some(Suit::Diamonds),
            'c' | 'C' | '\u{2663}' => Some(Suit::Clubs),
            's' | 'S' | '\u{2660}' => Some(Suit::Spades),
            _ => None,
        }
    }

    /// Accepts the lowercase name or a single suit letter/symbol.
    pub fn from_name(s: &str) -> Option<Suit> {
        match s {
            "hearts"   => Some(Suit::Hearts),
            "diamonds" => Some(Suit::Diamonds),
            "clubs"    => Some(Suit::Clubs),
            "spades"   => Some(Suit::Spades),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Suit::from_char(c),
                    _ => None,
                }
            }
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suit::Hearts   => write!(f, "h"),
            Suit::Diamonds => write!(f, "d"),
            Suit::Clubs    => write!(f, "c"),
            Suit::Spades   => write!(f, "s"),
        }
    }
}

/// Rank 1..=13 where 1 = Ace and 13 = King. Ace is always low.
///
/// Deserializing rejects anything outside 1..=13. Building `Rank(n)` directly
/// with an out-of-range `n` gives card ids that may collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct Rank(pub u8);

impl TryFrom<u8> for Rank {
    type Error = EngineError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        if (1..=13).contains(&n) {
            Ok(Rank(n))
        } else {
            Err(EngineError::ParseCard(format!("rank {n}")))
        }
    }
}

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const TEN: Rank = Rank(10);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    pub const ALL: [Rank; 13] = [
        Rank(1), Rank(2), Rank(3), Rank(4), Rank(5), Rank(6), Rank(7),
        Rank(8), Rank(9), Rank(10), Rank(11), Rank(12), Rank(13),
    ];

    /// Position in a run: A=0, 2=1, ..., K=12.
    pub fn order(self) -> u8 {
        self.0.saturating_sub(1)
    }

    /// Deadwood points: A=1, 2-10 face value, J/Q/K=10.
    pub fn value(self) -> u32 {
        u32::from(self.0.min(10))
    }

    pub fn symbol(self) -> &'static str {
        match self.0 {
            1 => "A", 2 => "2", 3 => "3", 4 => "4", 5 => "5", 6 => "6",
            7 => "7", 8 => "8", 9 => "9", 10 => "10",
            11 => "J", 12 => "Q", 13 => "K",
            _ => "?",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Rank> {
        let rank = match s {
            "A" | "a" | "1" => 1,
            "10" | "T" | "t" => 10,
            "J" | "j" => 11,
            "Q" | "q" => 12,
            "K" | "k" => 13,
            _ => match s.parse::<u8>() {
                Ok(n @ 2..=9) => n,
                _ => return None,
            },
        };
        Some(Rank(rank))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Identity of a card within a single 52-card deck.
///
/// Used only for equality and membership, never for ordering hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Single-bit mask for this id; ids fit in 52 bits.
    pub fn bit(self) -> u64 {
        1u64.checked_shl(u32::from(self.0)).unwrap_or(0)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = Suit::ALL.get(usize::from(self.0 / 13)).map_or("?", |s| s.name());
        write!(f, "{}-{}", Rank(self.0 % 13 + 1), suit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }

    pub fn id(self) -> CardId {
        CardId((self.suit.index() * 13).saturating_add(self.rank.order()))
    }

    pub fn value(self) -> u32 {
        self.rank.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = EngineError;

    /// Parses "7h", "10s", "Td", "QC" or "K♠".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || EngineError::ParseCard(s.to_string());
        let suit_ch = s.chars().last().ok_or_else(err)?;
        let rank_str = &s[..s.len() - suit_ch.len_utf8()];
        let suit = Suit::from_char(suit_ch).ok_or_else(err)?;
        let rank = Rank::from_symbol(rank_str).ok_or_else(err)?;
        Ok(Card { rank, suit })
    }
}

/// Parse a whitespace- or comma-separated list of cards, e.g. "7h 7d 7c".
pub fn parse_hand(s: &str) -> Result<Vec<Card>, EngineError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|tok| !tok.is_empty())
        .map(str::parse::<Card>)
        .collect()
}

// ---------------------------------------------------------------------------
// Melds
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeldKind {
    Set,
    Run,
}

impl fmt::Display for MeldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeldKind::Set => write!(f, "set"),
            MeldKind::Run => write!(f, "run"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meld {
    pub kind: MeldKind,
    pub cards: Vec<Card>,
}

impl Meld {
    /// Build a meld without checking it. Enumerated candidates go through here.
    pub fn new(kind: MeldKind, cards: Vec<Card>) -> Self {
        Meld { kind, cards }
    }

    /// Classify `cards` and build a meld, or fail if they are neither a set nor a run.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, EngineError> {
        match validator::is_valid_meld(&cards) {
            Some(kind) => Ok(Meld { kind, cards }),
            None => Err(EngineError::InvalidMeld {
                cards: cards.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" "),
            }),
        }
    }

    /// Shared rank of a set (first card's rank for any meld).
    pub fn rank(&self) -> Option<Rank> {
        self.cards.first().map(|c| c.rank)
    }

    /// Shared suit of a run (first card's suit for any meld).
    pub fn suit(&self) -> Option<Suit> {
        self.cards.first().map(|c| c.suit)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Bitmask of the card ids in this meld.
    pub fn mask(&self) -> u64 {
        self.cards.iter().fold(0, |m, c| m | c.id().bit())
    }
}

impl fmt::Display for Meld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cards = self.cards.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ");
        write!(f, "{} [{}]", self.kind, cards)
    }
}

// ---------------------------------------------------------------------------
// Engine results
// ---------------------------------------------------------------------------

/// Best split of a hand into non-overlapping melds plus leftover deadwood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionResult {
    pub melds: Vec<Meld>,
    pub deadwood: Vec<Card>,
    pub deadwood_value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnockReport {
    pub can_knock: bool,
    pub deadwood_value: u32,
    pub melds: Vec<Meld>,
    pub deadwood: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GinReport {
    pub is_gin: bool,
    pub melds: Vec<Meld>,
}

/// A deadwood card that may extend the meld at `meld_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layoff {
    pub card: Card,
    pub meld_index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_follow_rank() {
        let values: Vec<u32> = Rank::ALL.iter().map(|r| r.value()).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10]);
        assert_eq!(Rank::ACE.order(), 0);
        assert_eq!(Rank::KING.order(), 12);
    }

    #[test]
    fn parses_and_displays_cards() {
        let ten: Card = "10s".parse().unwrap();
        assert_eq!(ten, Card::new(Rank::TEN, Suit::Spades));
        assert_eq!("Ts".parse::<Card>().unwrap(), ten);
        assert_eq!(ten.to_string(), "10s");
        assert_eq!("QC".parse::<Card>().unwrap(), Card::new(Rank::QUEEN, Suit::Clubs));
        assert_eq!("K\u{2660}".parse::<Card>().unwrap(), Card::new(Rank::KING, Suit::Spades));
        assert!("1x".parse::<Card>().is_err());
        assert!("".parse::<Card>().is_err());
        assert!("11h".parse::<Card>().is_err());
    }

    #[test]
    fn deserialized_ranks_must_be_in_range() {
        let seven: Card = serde_json::from_str(r#"{"rank":7,"suit":"hearts"}"#).unwrap();
        assert_eq!(seven, Card::new(Rank(7), Suit::Hearts));
        assert!(serde_json::from_str::<Card>(r#"{"rank":14,"suit":"hearts"}"#).is_err());
        assert!(serde_json::from_str::<Card>(r#"{"rank":0,"suit":"spades"}"#).is_err());
        assert!(matches!(Rank::try_from(13), Ok(Rank::KING)));
        assert!(Rank::try_from(14).is_err());
    }

    #[test]
    fn hand_accepts_spaces_and_commas() {
        let hand = parse_hand("7h, 7d  7c").unwrap();
        assert_eq!(hand.len(), 3);
        assert!(matches!(parse_hand("7h 7z"), Err(EngineError::ParseCard(t)) if t == "7z"));
    }

    #[test]
    fn ids_are_unique_and_named_by_rank_and_suit() {
        let ids: std::collections::HashSet<CardId> = Suit::ALL
            .iter()
            .flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s).id()))
            .collect();
        assert_eq!(ids.len(), 52);
        assert_eq!(Card::new(Rank(7), Suit::Hearts).id().to_string(), "7-hearts");
        assert_eq!(Card::new(Rank::JACK, Suit::Diamonds).id().to_string(), "J-diamonds");
    }

    #[test]
    fn meld_from_cards_classifies_or_fails() {
        let run = Meld::from_cards(parse_hand("4s 5s 6s").unwrap()).unwrap();
        assert_eq!(run.kind, MeldKind::Run);
        assert_eq!(run.suit(), Some(Suit::Spades));
        let err = Meld::from_cards(parse_hand("4s 5s 7s").unwrap()).unwrap_err();
        assert!(err.to_string().contains("4s 5s 7s"));
    }
}
