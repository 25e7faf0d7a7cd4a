use chrono::Month;
use fameframe_core::{FameError, NativeDate, NativeIndex};

use crate::calendar::MonthlyCalendar;

/// Instruction for how a fetch of one series should behave.
#[derive(Clone, Debug)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(FameError),
    /// Hang indefinitely (simulate a stalled store).
    Hang,
}

/// A stored series: a frequency label and evenly spaced observations.
#[derive(Clone, Debug, PartialEq)]
pub struct MockSeries {
    frequency: String,
    first: Option<NativeDate>,
    step_months: i64,
    values: Vec<f64>,
}

impl MockSeries {
    /// Series with an explicit frequency label, first observation and spacing.
    #[must_use]
    pub fn new(
        frequency: impl Into<String>,
        first: NativeDate,
        step_months: i64,
        values: Vec<f64>,
    ) -> Self {
        Self {
            frequency: frequency.into(),
            first: Some(first),
            step_months,
            values,
        }
    }

    /// Quarterly series whose first observation is `year`Q`quarter`.
    #[must_use]
    pub fn quarterly(year: i32, quarter: u8, values: Vec<f64>) -> Self {
        let month = match quarter {
            1 => Month::January,
            2 => Month::April,
            3 => Month::July,
            _ => Month::October,
        };
        Self::new("QUARTERLY", NativeDate { year, month }, 3, values)
    }

    /// Monthly series starting at `year`/`month`.
    #[must_use]
    pub fn monthly(year: i32, month: Month, values: Vec<f64>) -> Self {
        Self::new("MONTHLY", NativeDate { year, month }, 1, values)
    }

    /// A series that exists but has no observations.
    #[must_use]
    pub fn empty(frequency: impl Into<String>) -> Self {
        Self {
            frequency: frequency.into(),
            first: None,
            step_months: 3,
            values: Vec::new(),
        }
    }

    /// Frequency label reported by fetches.
    #[must_use]
    pub fn frequency(&self) -> &str {
        &self.frequency
    }

    /// Observations paired with their native index.
    pub(crate) fn observations(&self) -> Vec<(NativeIndex, f64)> {
        let Some(first) = self.first else {
            return Vec::new();
        };
        let base = MonthlyCalendar::index_of(first.year, first.month_number()).get();
        self.values
            .iter()
            .zip(0i64..)
            .map(|(v, i)| (NativeIndex(base + i * self.step_months), *v))
            .collect()
    }
}
