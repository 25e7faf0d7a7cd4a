//! fameframe loads series from FAME-style time-series databases into
//! quarterly period tables.
//!
//! Overview
//! - Opens one or more database files through a [`FameConnector`].
//! - Resolves the series to load: an explicit list (missing names become
//!   warnings) or every series matching a wildcard.
//! - Retrieves observations, whole or between `YYYY`/`YYYYQ#` bounds, and
//!   clamps the requested bounds to the coverage actually stored.
//! - Builds one table per source, aligned on the period index, and for
//!   multi-source loads one comparison table per series shared by all sources.
//!
//! Key behaviors and trade-offs
//! - Tables are quarterly only; other frequencies fail with `Unsupported`.
//! - A series with no observations in range still gets a column of missing
//!   cells over the requested index.
//! - Stores are always closed once opened, including on failure.
//! - `SourceStrategy::Concurrent` retrieves all sources at once; the default
//!   visits them in order.
//!
//! Example
//! ```rust,ignore
//! use fameframe::{FameLoader, Tables};
//!
//! let data = FameLoader::builder()
//!     .sources(["/data/us/macro.db", "/data/us/revised/macro.db"])
//!     .series(["GDP"])
//!     .start("2020")
//!     .build()?
//!     .load(&connector)
//!     .await?;
//!
//! if let Tables::Multi(tables) = &data.data {
//!     // one table per mnemonic
//! }
//! let gdp_vintages = &data.compare.as_ref().unwrap()["GDP"];
//! ```
//!
//! See `demos/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
/// Per-source pipeline stages.
pub mod pipeline;

pub use core::{FameLoader, FameLoaderBuilder, tag_err};

pub use fameframe_core::{
    BoundRole, DataStore, FameConnector, NativeCalendar, NativeDate, NativeIndex,
    ObservationList,
};
#[cfg(feature = "dataframe")]
pub use fameframe_core::ToDataFrame;

// Re-export value types for convenience
pub use fameframe_types::{
    DEFAULT_WILDCARD, FameData, FameError, Frequency, LoadConfig, NO_DATA_MESSAGE, OneOrMany,
    Period, PeriodRange, PeriodTable, SourceStrategy, TableColumn, Tables,
};
