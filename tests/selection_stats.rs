//! Statistical tests for random selection
//!
//! Seeded so they are deterministic, but loose enough to hold for any
//! reasonable uniform generator.

use cider_rs::core::{CardEntry, Deck, DeckColor};
use cider_rs::selector::CardSelector;
use std::collections::HashMap;

fn numbered_deck(size: usize) -> Deck {
    let mut deck = Deck::new(DeckColor::Red);
    for i in 0..size {
        deck.insert(CardEntry::new(format!("Card {i}"), format!("Flavor {i}")));
    }
    deck
}

#[test]
fn test_draws_are_roughly_uniform() {
    let size = 10;
    let draws = 20_000;
    let deck = numbered_deck(size);
    let mut selector = CardSelector::with_seed(2024);

    let mut counts: HashMap<String, usize> = HashMap::new();
    for _ in 0..draws {
        let card = selector.draw(&deck).unwrap();
        *counts.entry(card.key.clone()).or_default() += 1;
    }

    assert_eq!(counts.len(), size, "every card should be drawn at least once");

    let expected = draws / size;
    for (key, count) in &counts {
        let deviation = (*count as f64 - expected as f64).abs() / expected as f64;
        assert!(
            deviation < 0.1,
            "{key} drawn {count} times, expected about {expected}"
        );
    }
}

#[test]
fn test_different_seeds_give_different_sequences() {
    let deck = numbered_deck(50);
    let mut a = CardSelector::with_seed(1);
    let mut b = CardSelector::with_seed(2);

    let seq_a: Vec<String> = (0..20).map(|_| a.draw(&deck).unwrap().key.clone()).collect();
    let seq_b: Vec<String> = (0..20).map(|_| b.draw(&deck).unwrap().key.clone()).collect();

    assert_ne!(seq_a, seq_b);
}
