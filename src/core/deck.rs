//! Deck of cards keyed by their word
//!
//! Entries keep the order they were inserted in, which is the order random
//! draws index into. Keys are unique: the first card inserted under a key
//! wins and later duplicates are ignored.

use crate::core::{CardEntry, DeckColor};
use crate::{CiderError, Result};
use rand::Rng;
use rustc_hash::FxHashMap;

/// A red or green deck
#[derive(Debug, Clone)]
pub struct Deck {
    color: DeckColor,
    cards: Vec<CardEntry>,
    /// Key -> position in `cards`
    index: FxHashMap<String, usize>,
}

impl Deck {
    /// Create an empty deck
    pub fn new(color: DeckColor) -> Self {
        Deck {
            color,
            cards: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    pub fn color(&self) -> DeckColor {
        self.color
    }

    /// Add a card. Returns `false` (and leaves the deck unchanged) if a card
    /// with the same key is already present.
    pub fn insert(&mut self, card: CardEntry) -> bool {
        if self.index.contains_key(&card.key) {
            return false;
        }
        self.index.insert(card.key.clone(), self.cards.len());
        self.cards.push(card);
        true
    }

    /// Look up a card by its exact key
    pub fn get(&self, key: &str) -> Option<&CardEntry> {
        self.index.get(key).map(|&i| &self.cards[i])
    }

    /// Value stored under `key`, or `KeyNotFound`
    pub fn lookup(&self, key: &str) -> Result<&str> {
        self.get(key)
            .map(|card| card.value.as_str())
            .ok_or_else(|| CiderError::KeyNotFound {
                color: self.color,
                key: key.to_string(),
            })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Pick a card uniformly at random
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&CardEntry> {
        if self.cards.is_empty() {
            return Err(CiderError::EmptyDeck(self.color));
        }
        let i = rng.gen_range(0..self.cards.len());
        Ok(&self.cards[i])
    }

    /// Cards in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, CardEntry> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a CardEntry;
    type IntoIter = std::slice::Iter<'a, CardEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
