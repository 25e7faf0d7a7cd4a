// Shared fixtures so tests can `use helpers::*;`
#![allow(dead_code)]

use std::path::Path;

pub use fameframe_mock::fixtures::{LABOUR_PATH, MACRO_PATH, MACRO_REVISED_PATH};
pub use fameframe_mock::{MockBehavior, MockConnector, MockSeries, MockStore};

use fameframe::{FameData, FameError, FameLoader, Period, PeriodTable, Tables};

/// Parse a period label with infallible expectations.
pub fn q(label: &str) -> Period {
    label.parse().expect("valid static period label")
}

/// Connector serving the standard fixture stores.
pub fn fixtures() -> MockConnector {
    MockConnector::with_fixtures()
}

/// Load `sources` with an optional series list and bounds through `conn`.
pub async fn load(
    conn: &MockConnector,
    sources: &[&str],
    series: Option<&[&str]>,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<FameData, FameError> {
    let mut b = FameLoader::builder().sources(sources.to_vec());
    if let Some(s) = series {
        b = b.series(s);
    }
    if let Some(s) = start {
        b = b.start(s);
    }
    if let Some(e) = end {
        b = b.end(e);
    }
    b.build()?.load(conn).await
}

/// The single-source table of a result, panicking with context otherwise.
pub fn single(data: &FameData) -> &PeriodTable {
    match &data.data {
        Tables::Single(t) => t,
        other => panic!("expected a single table, got {other:?}"),
    }
}

/// Period labels of a table's index.
pub fn labels(table: &PeriodTable) -> Vec<String> {
    table.index().iter().map(ToString::to_string).collect()
}

/// True if the store served at `path` saw exactly one close and is closed.
pub fn closed_once(conn: &MockConnector, path: impl AsRef<Path>) -> bool {
    conn.probe(path)
        .is_some_and(|p| p.closes() == 1 && !p.is_open())
}
