//! Deck file loader (tab-delimited `KEY<TAB>VALUE` lines)

use crate::core::category::is_allowed;
use crate::core::{CardEntry, Category, Deck, DeckColor};
use crate::loader::split::split_by_delimiter;
use crate::{CiderError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Separates a card's key from its value
pub const FIELD_DELIMITER: char = '\t';

/// What to do with a non-blank line that has no value part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MalformedLinePolicy {
    /// Log a warning and carry on with the next line
    #[default]
    Skip,
    /// Abort the load with `CiderError::MalformedLine`
    Fail,
}

/// Options for a single deck load
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Only keep cards whose value mentions one of these sets (empty = keep all)
    pub categories: Vec<Category>,
    pub malformed: MalformedLinePolicy,
}

impl LoadOptions {
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    pub fn with_malformed(mut self, policy: MalformedLinePolicy) -> Self {
        self.malformed = policy;
        self
    }
}

/// Per-line outcome counts of a load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Cards inserted into the deck
    pub accepted: usize,
    /// Well-formed lines rejected by the set filter
    pub filtered: usize,
    /// Well-formed lines whose key was already in the deck
    pub duplicates: usize,
    /// Lines without a value part (only non-zero under `Skip`)
    pub malformed: usize,
    pub blank: usize,
}

/// Deck loader for tab-delimited card files
pub struct DeckLoader;

impl DeckLoader {
    /// Load a new deck of `color` from a file
    pub fn load_from_file(
        path: &Path,
        color: DeckColor,
        options: &LoadOptions,
    ) -> Result<(Deck, LoadReport)> {
        let mut deck = Deck::new(color);
        let report = Self::load_into(path, &mut deck, options)?;
        Ok((deck, report))
    }

    /// Load cards from a file into an existing deck
    pub fn load_into(path: &Path, deck: &mut Deck, options: &LoadOptions) -> Result<LoadReport> {
        let file = File::open(path).map_err(|e| CiderError::io(path, e))?;
        let reader = BufReader::new(file);
        let mut report = LoadReport::default();

        for (i, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| CiderError::io(path, e))?;
            Self::ingest_line(&line, i + 1, deck, options, &mut report)?;
        }

        tracing::debug!(
            path = %path.display(),
            deck = %deck.color(),
            accepted = report.accepted,
            filtered = report.filtered,
            duplicates = report.duplicates,
            malformed = report.malformed,
            "loaded deck file"
        );
        Ok(report)
    }

    /// Parse deck text into an existing deck
    pub fn parse_into(content: &str, deck: &mut Deck, options: &LoadOptions) -> Result<LoadReport> {
        let mut report = LoadReport::default();
        for (i, line) in content.lines().enumerate() {
            Self::ingest_line(line, i + 1, deck, options, &mut report)?;
        }
        Ok(report)
    }

    /// Parse one non-blank line into a card
    pub fn parse_line(line: &str, line_number: usize) -> Result<CardEntry> {
        match split_by_delimiter(line, FIELD_DELIMITER).as_slice() {
            [key, value, ..] => Ok(CardEntry::new(*key, *value)),
            _ => Err(CiderError::MalformedLine {
                line: line_number,
                content: line.to_string(),
            }),
        }
    }

    fn ingest_line(
        line: &str,
        line_number: usize,
        deck: &mut Deck,
        options: &LoadOptions,
        report: &mut LoadReport,
    ) -> Result<()> {
        if line.trim().is_empty() {
            report.blank += 1;
            return Ok(());
        }

        let card = match Self::parse_line(line, line_number) {
            Ok(card) => card,
            Err(e) => match options.malformed {
                MalformedLinePolicy::Fail => return Err(e),
                MalformedLinePolicy::Skip => {
                    tracing::warn!(deck = %deck.color(), "skipping {e}");
                    report.malformed += 1;
                    return Ok(());
                }
            },
        };

        if !is_allowed(&card.value, &options.categories) {
            tracing::trace!(key = %card.key, "not in an allowed set");
            report.filtered += 1;
            return Ok(());
        }

        let key = card.key.clone();
        if deck.insert(card) {
            report.accepted += 1;
        } else {
            tracing::debug!(line = line_number, key = %key, "duplicate card ignored");
            report.duplicates += 1;
        }
        Ok(())
    }
}
