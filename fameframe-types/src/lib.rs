//! Shared fameframe value types: period labels, frequencies, scalar-or-list
//! arguments, load configuration, tables and the result envelope.
#![warn(missing_docs)]

mod config;
mod error;
mod frequency;
mod one_or_many;
mod period;
mod reports;
mod table;

pub use config::{DEFAULT_WILDCARD, LoadConfig, SourceStrategy};
pub use error::FameError;
pub use frequency::Frequency;
pub use one_or_many::OneOrMany;
pub use period::{BoundRole, Period, PeriodRange};
pub use reports::{FameData, NO_DATA_MESSAGE, Tables};
pub use table::{PeriodTable, TableColumn};
