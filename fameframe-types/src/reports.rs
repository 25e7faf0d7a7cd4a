//! Result envelope produced by a load.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::FameError;
use crate::frequency::Frequency;
use crate::period::PeriodRange;
use crate::table::PeriodTable;

/// Message carried by [`Tables::NoData`].
pub const NO_DATA_MESSAGE: &str = "No data available for given query.";

/// Combined tables of a load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Tables {
    /// Exactly one source was loaded and at least one series resolved.
    Single(PeriodTable),
    /// Exactly one source was loaded and no series resolved.
    NoData,
    /// Several sources were loaded; keyed by mnemonic. Sources without any
    /// resolved series are omitted.
    Multi(BTreeMap<String, PeriodTable>),
}

impl Tables {
    /// The single-source table, if this is a single-source result with data.
    #[must_use]
    pub const fn single(&self) -> Option<&PeriodTable> {
        match self {
            Self::Single(t) => Some(t),
            _ => None,
        }
    }

    /// Table of one source in a multi-source result.
    #[must_use]
    pub fn by_mnemonic(&self, mnemonic: &str) -> Option<&PeriodTable> {
        match self {
            Self::Multi(m) => m.get(mnemonic),
            _ => None,
        }
    }

    /// True for the single-source "no data" marker.
    #[must_use]
    pub const fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }
}

/// Everything produced by one load invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FameData {
    /// Source paths in input order.
    pub paths: Vec<PathBuf>,
    /// Mnemonics aligned with `paths`.
    pub mnemonics: Vec<String>,
    /// Resolved series per mnemonic (sorted; possibly empty).
    pub series: BTreeMap<String, Vec<String>>,
    /// Actual period coverage per mnemonic and series.
    pub ranges: BTreeMap<String, BTreeMap<String, PeriodRange>>,
    /// Frequency per mnemonic and series.
    pub frequencies: BTreeMap<String, BTreeMap<String, Frequency>>,
    /// Combined table(s).
    pub data: Tables,
    /// Cross-source tables keyed by series name; `None` for single-source loads.
    pub compare: Option<BTreeMap<String, PeriodTable>>,
    /// Non-fatal issues: rejected series and close failures.
    pub warnings: Vec<FameError>,
}
