use serde::Deserialize;
use serde_json::{json, Value};
use crate::engine::{
    error::EngineError,
    models::{Card, Layoff, Meld, PartitionResult, Rank, Suit},
};

/// Card shape used by the lesson UI: `{ id, suit, rank, value }` with
/// `id = "<rank>-<suit>"`, e.g. `"10-spades"`.
fn client_card(c: &Card) -> Value {
    json!({
        "id": c.id().to_string(),
        "suit": c.suit.name(),
        "rank": c.rank.symbol(),
        "value": c.value(),
    })
}

fn client_cards(cards: &[Card]) -> Value {
    Value::Array(cards.iter().map(client_card).collect())
}

fn client_meld(m: &Meld) -> Value {
    json!({
        "type": m.kind.to_string(),
        "cards": client_cards(&m.cards),
    })
}

/// Map a partition to the `{ melds, deadwood, deadwoodValue }` object the UI reads.
pub fn partition_to_json(result: &PartitionResult) -> Value {
    json!({
        "melds": result.melds.iter().map(client_meld).collect::<Vec<_>>(),
        "deadwood": client_cards(&result.deadwood),
        "deadwoodValue": result.deadwood_value,
    })
}

/// Map layoffs to `[{ card, meldIndex }]`.
pub fn layoffs_to_json(layoffs: &[Layoff]) -> Value {
    Value::Array(
        layoffs
            .iter()
            .map(|l| json!({ "card": client_card(&l.card), "meldIndex": l.meld_index }))
            .collect(),
    )
}

#[derive(Deserialize)]
struct ClientCard {
    suit: String,
    rank: String,
}

/// Read a hand sent by the UI as `[{ "suit": "hearts", "rank": "7" }, ...]`.
/// Extra fields (`id`, `value`, `faceUp`) are ignored; the id is re-derived.
pub fn hand_from_json(value: &Value) -> Result<Vec<Card>, EngineError> {
    let raw: Vec<ClientCard> = serde_json::from_value(value.clone())
        .map_err(|e| EngineError::Client(e.to_string()))?;
    raw.into_iter()
        .map(|c| {
            let suit = Suit::from_name(&c.suit);
            let rank = Rank::from_symbol(&c.rank);
            match (rank, suit) {
                (Some(rank), Some(suit)) => Ok(Card { rank, suit }),
                _ => Err(EngineError::Client(format!("unknown card {}-{}", c.rank, c.suit))),
            }
        })
        .collect()
}
