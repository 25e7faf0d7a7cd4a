//! Re-export of foundational types from `fameframe-types`.
// Consolidated so downstream crates can depend on `fameframe-core` only

pub use fameframe_types::{
    BoundRole, DEFAULT_WILDCARD, FameData, FameError, Frequency, LoadConfig, NO_DATA_MESSAGE,
    OneOrMany, Period, PeriodRange, PeriodTable, SourceStrategy, TableColumn, Tables,
};
