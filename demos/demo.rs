//! End-to-end demo of the meld engine.
//!
//! Run with: `RUST_LOG=debug cargo run --example demo`
//!
//! 1. **Reference hand**: the optimal partition of a fixed hand, printed both
//!    as text and as the JSON the lesson UI consumes.
//! 2. **Seeded deal**: two ten-card hands dealt from a fixed seed, each one
//!    checked for knock and Gin.
//! 3. **Round scoring**: the first hand knocks (if it can) against the second,
//!    with the defender's layoffs applied.

use gin_rummy_engine::{
    can_knock, client_adapter, engine::helpers::{cards_str, sort_by_suit_then_rank},
    find_layoffs, find_optimal_melds, generate_deal, is_gin, parse_hand, score_round,
    Card, DealRequest, RuleConfig,
};

fn print_hand(label: &str, hand: &[Card]) {
    let best = find_optimal_melds(hand);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{label}]  {}", cards_str(&sort_by_suit_then_rank(hand)));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for meld in &best.melds {
        println!("  meld     {meld}");
    }
    println!("  deadwood {}  ({} points)", cards_str(&best.deadwood), best.deadwood_value);
    let knock = can_knock(hand);
    println!("  knock: {}  gin: {}", knock.can_knock, is_gin(hand).is_gin);
    println!();
}

fn main() {
    env_logger::init();

    let hand = parse_hand("7h 7d 7c 4s 5s 6s Kd 2c 9s Ad").expect("reference hand");
    print_hand("Reference", &hand);
    let json = client_adapter::partition_to_json(&find_optimal_melds(&hand));
    println!("{}", serde_json::to_string_pretty(&json).expect("json"));
    println!();

    let deal = generate_deal(&DealRequest::seeded(42)).expect("deal");
    println!("Deal {}  upcard: {}", deal.deal_id,
        deal.upcard.map(|c| c.to_string()).unwrap_or_default());
    println!();
    for (i, hand) in deal.hands.iter().enumerate() {
        print_hand(&format!("Player {}", i + 1), hand);
    }

    let (knocker, defender) = (&deal.hands[0], &deal.hands[1]);
    let knocker_best = find_optimal_melds(knocker);
    let defender_best = find_optimal_melds(defender);
    let layoffs = find_layoffs(&defender_best.deadwood, &knocker_best.melds);
    println!("Defender layoffs: {}", client_adapter::layoffs_to_json(&layoffs));

    match score_round(knocker, defender, &RuleConfig::default()) {
        Ok(score) => println!(
            "{}: {:?} scores {} ({} vs {} deadwood)",
            score.outcome, score.winner, score.points,
            score.knocker_deadwood, score.defender_deadwood
        ),
        Err(e) => println!("Player 1 cannot knock yet: {e}"),
    }
}
