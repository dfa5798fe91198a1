//! Error types for cider

use crate::core::DeckColor;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CiderError {
    #[error("cannot read deck file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed line {line}: expected KEY<TAB>VALUE, got {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("card {key:?} not found in the {color} deck")]
    KeyNotFound { color: DeckColor, key: String },

    #[error("cannot draw from the {0} deck: it is empty")]
    EmptyDeck(DeckColor),

    #[error("unknown set: {0}")]
    UnknownCategory(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CiderError {
    /// Wrap an I/O failure with the path that caused it
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CiderError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CiderError>;
