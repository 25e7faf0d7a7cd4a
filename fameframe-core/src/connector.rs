use core::fmt;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::native::{NativeDate, NativeIndex};
use crate::{FameError, Frequency};

/// Conversions between a store's native indices and calendar labels.
pub trait NativeCalendar: Send + Sync {
    /// Label of the period at `index`, or `None` when the index is undefined.
    fn index_to_date(&self, index: NativeIndex) -> Option<NativeDate>;

    /// Index of the period labelled `date`, if the calendar covers it.
    fn date_to_index(&self, date: NativeDate) -> Option<NativeIndex>;
}

/// Observations of one series as returned by a store fetch.
///
/// `first_index`/`last_index` are `None` when the fetch returned no
/// observations.
#[derive(Clone)]
pub struct ObservationList {
    /// Observation values in time order.
    pub values: Vec<f64>,
    /// Frequency label reported by the store (e.g. `QUARTERLY`).
    pub frequency: String,
    /// Native index of the first observation.
    pub first_index: Option<NativeIndex>,
    /// Native index of the last observation.
    pub last_index: Option<NativeIndex>,
    /// Calendar used to label the indices.
    pub calendar: Arc<dyn NativeCalendar>,
}

impl ObservationList {
    /// Parsed frequency of the series.
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        Frequency::from_label(&self.frequency)
    }

    /// Calendar label of the first observation.
    #[must_use]
    pub fn first_date(&self) -> Option<NativeDate> {
        self.first_index
            .and_then(|i| self.calendar.index_to_date(i))
    }

    /// Calendar label of the last observation.
    #[must_use]
    pub fn last_date(&self) -> Option<NativeDate> {
        self.last_index.and_then(|i| self.calendar.index_to_date(i))
    }

    /// True when no observations were returned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for ObservationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservationList")
            .field("values", &self.values)
            .field("frequency", &self.frequency)
            .field("first_index", &self.first_index)
            .field("last_index", &self.last_index)
            .finish_non_exhaustive()
    }
}

/// An open handle on one database file.
///
/// Implementations wrap the vendor's native API. Every method maps to a
/// single call into that API; none of them retry.
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Names of all series matching a wildcard pattern (`*` matches all).
    async fn match_wildcard(&self, pattern: &str) -> Result<Vec<String>, FameError>;

    /// Fetch every observation of a series.
    ///
    /// # Errors
    /// Returns `NotFound` when the series does not exist in this store.
    async fn fetch(&self, name: &str) -> Result<ObservationList, FameError>;

    /// Fetch the observations of a series between two native indices, inclusive.
    ///
    /// # Errors
    /// Returns `NotFound` when the series does not exist in this store.
    async fn fetch_range(
        &self,
        name: &str,
        start: NativeIndex,
        end: NativeIndex,
    ) -> Result<ObservationList, FameError>;

    /// Convert a year and 1-based month to a native index (the store's date helper).
    fn ymd_to_index(&self, year: i32, month: u32) -> Result<NativeIndex, FameError>;

    /// Release the handle.
    async fn close(&self) -> Result<(), FameError>;
}

/// Entry point into a native time-series database API.
#[async_trait]
pub trait FameConnector: Send + Sync {
    /// A stable identifier used in logs and error tags.
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Open the database at `path`.
    ///
    /// # Errors
    /// Returns an error when the path cannot be opened as a database.
    async fn open(&self, path: &Path) -> Result<Box<dyn DataStore>, FameError>;
}
