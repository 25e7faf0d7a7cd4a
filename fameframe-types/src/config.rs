//! Configuration for a single load invocation.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::one_or_many::OneOrMany;

/// How sources are visited during retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SourceStrategy {
    /// Visit sources one after another in the order given.
    #[default]
    Sequential,
    /// Retrieve all sources concurrently and join before tabulating.
    Concurrent,
}

/// Wildcard pattern used to enumerate every series of a store.
pub const DEFAULT_WILDCARD: &str = "*";

/// Inbound parameters of a load.
///
/// Mirrors the builder on `fameframe::FameLoader`; useful when the request is
/// read from a file. Scalar-or-list fields accept both shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    /// One or more database paths. Required.
    pub sources: OneOrMany<PathBuf>,
    /// Series names to load; `None` loads every series of each source.
    pub series: Option<OneOrMany<String>>,
    /// Start date as `YYYY` or `YYYYQ#`; `None` starts at the first observation.
    pub start: Option<String>,
    /// End date as `YYYY` or `YYYYQ#`; `None` ends at the last observation.
    pub end: Option<String>,
    /// Explicit source mnemonics; `None` derives them from file names.
    pub mnemonics: Option<OneOrMany<String>>,
    /// Pattern used to enumerate series when `series` is `None`.
    pub wildcard: String,
    /// Whether sources are retrieved sequentially or concurrently.
    pub source_strategy: SourceStrategy,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            sources: OneOrMany::default(),
            series: None,
            start: None,
            end: None,
            mnemonics: None,
            wildcard: DEFAULT_WILDCARD.to_string(),
            source_strategy: SourceStrategy::default(),
        }
    }
}
