//! cider - red/green card deck loader and drawer
//!
//! Loads a noun deck (red) and an adjective deck (green) from tab-delimited
//! text files, then draws random cards or looks cards up by name.

pub mod core;
pub mod error;
pub mod loader;
pub mod logging;
pub mod selector;

pub use error::{CiderError, Result};
