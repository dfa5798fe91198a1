//! Diagnostic output
//!
//! Card output goes to stdout; everything the library reports through
//! `tracing` goes to stderr, filtered by a verbosity level.

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

/// How much diagnostic output to show
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum VerbosityLevel {
    /// Silent - no diagnostics at all
    Silent = 0,
    /// Minimal - errors only
    Minimal = 1,
    /// Normal - errors and warnings such as skipped lines (default)
    #[default]
    Normal = 2,
    /// Verbose - load reports and per-card decisions
    Verbose = 3,
}

impl VerbosityLevel {
    pub fn level_filter(self) -> LevelFilter {
        match self {
            VerbosityLevel::Silent => LevelFilter::OFF,
            VerbosityLevel::Minimal => LevelFilter::ERROR,
            VerbosityLevel::Normal => LevelFilter::WARN,
            VerbosityLevel::Verbose => LevelFilter::DEBUG,
        }
    }
}

/// Install the global stderr subscriber. Safe to call more than once; only
/// the first call takes effect.
pub fn init(verbosity: VerbosityLevel) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(verbosity.level_filter())
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
