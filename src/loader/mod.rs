//! Deck loaders
//!
//! Parsers for the tab-delimited red and green deck files

pub mod deck;
pub mod split;

pub use deck::{DeckLoader, LoadOptions, LoadReport, MalformedLinePolicy};
pub use split::split_by_delimiter;
