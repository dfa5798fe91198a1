//! Card entries and deck colors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two decks a card belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckColor {
    /// Nouns, valued by flavor text
    Red,
    /// Adjectives, valued by synonyms
    Green,
}

impl fmt::Display for DeckColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckColor::Red => write!(f, "red"),
            DeckColor::Green => write!(f, "green"),
        }
    }
}

/// A single card: the word printed on it and the text underneath
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEntry {
    /// Noun (red) or adjective (green)
    pub key: String,

    /// Flavor text or synonyms, possibly naming the set the card ships in
    pub value: String,
}

impl CardEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        CardEntry {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for CardEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}
