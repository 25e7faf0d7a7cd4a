use chrono::Month;

use crate::{MockSeries, MockStore};

/// Path of the national accounts fixture.
pub const MACRO_PATH: &str = "/data/us/macro.db";
/// Path of a second, revised vintage of the national accounts fixture.
pub const MACRO_REVISED_PATH: &str = "/data/us/revised/macro.db";
/// Path of the labour market fixture.
pub const LABOUR_PATH: &str = "/data/us/labour.db";

/// `GDP` and `CPI` quarterly from 2019Q1 to 2021Q4, plus an empty `INV` series.
#[must_use]
pub fn macro_store() -> MockStore {
    MockStore::new()
        .with_series(
            "GDP",
            MockSeries::quarterly(
                2019,
                1,
                vec![
                    100.0, 101.2, 102.1, 103.0, 98.4, 91.7, 96.9, 99.3, 101.0, 102.4, 103.9, 105.1,
                ],
            ),
        )
        .with_series(
            "CPI",
            MockSeries::quarterly(
                2019,
                1,
                vec![
                    251.1, 252.8, 253.4, 254.9, 256.0, 255.1, 257.6, 259.3, 262.2, 267.1, 272.8,
                    278.5,
                ],
            ),
        )
        .with_series("INV", MockSeries::empty("QUARTERLY"))
}

/// A later vintage: `GDP` revised and extended to 2022Q2, `CPI` absent.
#[must_use]
pub fn macro_revised_store() -> MockStore {
    MockStore::new()
        .with_series(
            "GDP",
            MockSeries::quarterly(
                2020,
                1,
                vec![98.6, 91.2, 97.3, 99.8, 101.4, 102.9, 104.2, 105.6, 106.1, 106.9],
            ),
        )
        .with_series("INV", MockSeries::quarterly(2021, 1, vec![12.0, 12.4]))
}

/// `UNEMP` quarterly from 2020Q1 and a monthly `CLAIMS` series.
#[must_use]
pub fn labour_store() -> MockStore {
    MockStore::new()
        .with_series(
            "UNEMP",
            MockSeries::quarterly(2020, 1, vec![3.8, 13.0, 8.8, 6.8, 6.2, 5.9, 5.1, 4.2]),
        )
        .with_series(
            "CLAIMS",
            MockSeries::monthly(2020, Month::January, vec![211.0, 214.0, 2_920.0]),
        )
}
