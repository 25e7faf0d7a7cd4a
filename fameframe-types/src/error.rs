use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the fameframe workspace.
///
/// This wraps argument validation errors, date-ordering failures, store-tagged
/// failures, not-found conditions and data inconsistencies surfaced while
/// reshaping observations into tables.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FameError {
    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The start date falls after the end date once both are normalized.
    #[error("dates are not in correct order: start {start} is after end {end}")]
    DateOrder {
        /// Normalized start period label.
        start: String,
        /// Normalized end period label.
        end: String,
    },

    /// A series or other named resource could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "series GDP in gdp.db".
        what: String,
    },

    /// The external store returned an error.
    #[error("{store} failed: {msg}")]
    Store {
        /// Label of the store that failed (mnemonic or path).
        store: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Issues with returned data (unknown calendar labels, length mismatches).
    #[error("data issue: {0}")]
    Data(String),

    /// The requested operation is not supported (e.g. non-quarterly tables).
    #[error("unsupported: {capability}")]
    Unsupported {
        /// Description of the unsupported operation.
        capability: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl FameError {
    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `Store` error with the store label and message.
    pub fn store(store: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Store {
            store: store.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `Unsupported` error.
    #[must_use]
    pub fn unsupported(capability: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: capability.into(),
        }
    }

    /// Returns true if this error should be surfaced to users as actionable.
    ///
    /// A missing series is an expected outcome of resolution and is reported
    /// as a warning rather than a failure.
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        !matches!(self, Self::NotFound { .. })
    }
}
