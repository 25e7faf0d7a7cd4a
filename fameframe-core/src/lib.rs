//! fameframe-core
//!
//! Store traits, native date handling and period-table utilities shared
//! across the fameframe ecosystem.
//!
//! - `types`: re-exported value types (periods, tables, errors, config).
//! - `connector`: the `FameConnector` and `DataStore` collaborator traits.
//! - `native`: native store indices and `Mon YYYY` labels.
//! - `timeseries`: date normalization, reconciliation and table building.
//! - `mnemonics`: unique source labels.
//!
//! The traits are async (`async-trait`) and assume a Tokio 1.x runtime in
//! callers, though nothing here spawns tasks.
//!
#![warn(missing_docs)]

/// Collaborator traits for native time-series databases.
pub mod connector;
/// Polars conversion for period tables.
#[cfg(feature = "dataframe")]
pub mod dataframe;
/// Source label derivation and de-duplication.
pub mod mnemonics;
/// Native indices and calendar labels.
pub mod native;
/// Period-table utilities.
pub mod timeseries;
pub mod types;

pub use connector::{DataStore, FameConnector, NativeCalendar, ObservationList};
#[cfg(feature = "dataframe")]
pub use dataframe::ToDataFrame;
pub use mnemonics::{assign_mnemonics, derive_mnemonic};
pub use native::{NativeDate, NativeIndex};
pub use timeseries::concat::{common_series, compare_series, concat_columns};
pub use timeseries::normalize::normalize_dates;
pub use timeseries::reconcile::{native_to_period, reconcile};
pub use timeseries::tabulate::{period_range, quarter_range, tabularize};
pub use types::*;
