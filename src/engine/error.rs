use thiserror::Error;

/// Failures surfaced by the fallible edges of the engine.
///
/// The validators and the partition search never fail; malformed hands give
/// an unspecified but non-panicking result there. Only parsing, explicit meld
/// construction, configuration, dealing and round scoring return this.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("cannot parse card: {0:?}")]
    ParseCard(String),

    #[error("cards do not form a set or run: {cards}")]
    InvalidMeld { cards: String },

    #[error("deck exhausted: requested {requested}, {remaining} remaining")]
    DeckExhausted { requested: usize, remaining: usize },

    #[error("knocker holds {deadwood} deadwood, threshold is {threshold}")]
    CannotKnock { deadwood: u32, threshold: u32 },

    #[error("invalid client payload: {0}")]
    Client(String),

    #[error("invalid rule configuration: {0}")]
    Config(#[from] serde_json::Error),
}
