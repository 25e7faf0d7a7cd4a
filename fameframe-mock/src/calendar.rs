use fameframe_core::{NativeCalendar, NativeDate, NativeIndex};

/// Calendar where every month is one native step: `index = year * 12 + month - 1`.
///
/// Quarterly series advance three indices per observation.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthlyCalendar;

impl MonthlyCalendar {
    /// Index of a year and 1-based month.
    #[must_use]
    pub const fn index_of(year: i32, month: u32) -> NativeIndex {
        NativeIndex(year as i64 * 12 + month as i64 - 1)
    }
}

impl NativeCalendar for MonthlyCalendar {
    fn index_to_date(&self, index: NativeIndex) -> Option<NativeDate> {
        let year = i32::try_from(index.get().div_euclid(12)).ok()?;
        let month = u32::try_from(index.get().rem_euclid(12)).ok()? + 1;
        NativeDate::from_ym(year, month).ok()
    }

    fn date_to_index(&self, date: NativeDate) -> Option<NativeIndex> {
        Some(Self::index_of(date.year, date.month_number()))
    }
}
