//! Core card and deck types

pub mod card;
pub mod category;
pub mod deck;

pub use card::{CardEntry, DeckColor};
pub use category::Category;
pub use deck::Deck;
