use crate::{FameError, Frequency, Period, PeriodRange, PeriodTable, TableColumn};

/// Inclusive run of quarters from the quarter containing `start` to the
/// quarter containing `end`. Empty when `start` falls after `end`.
#[must_use]
pub fn quarter_range(start: Period, end: Period) -> Vec<Period> {
    let (start, end) = (start.to_quarterly(), end.to_quarterly());
    let mut out = Vec::new();
    let mut cur = start;
    while cur <= end {
        out.push(cur);
        cur = cur.next_quarter();
    }
    out
}

/// Period index for `range` at `frequency`.
///
/// Ranges missing either bound produce an empty index.
///
/// # Errors
/// Returns `Unsupported` for any frequency other than quarterly.
pub fn period_range(range: PeriodRange, frequency: &Frequency) -> Result<Vec<Period>, FameError> {
    if *frequency != Frequency::Quarterly {
        return Err(FameError::unsupported(format!(
            "period index at {frequency} frequency"
        )));
    }
    Ok(range
        .bounds()
        .map(|(s, e)| quarter_range(s, e))
        .unwrap_or_default())
}

/// Build the table of one series over its resolved range.
///
/// With no values, the table holds the full index and a single column of
/// missing cells. Otherwise the values fill the column in order; NaN becomes
/// a missing cell.
///
/// # Errors
/// - `Unsupported` for non-quarterly frequencies.
/// - `Data` when the number of values differs from the number of periods.
pub fn tabularize(
    values: &[f64],
    name: &str,
    range: PeriodRange,
    frequency: &Frequency,
) -> Result<PeriodTable, FameError> {
    let index = period_range(range, frequency)?;
    let cells = if values.is_empty() {
        vec![None; index.len()]
    } else {
        values
            .iter()
            .map(|v| if v.is_nan() { None } else { Some(*v) })
            .collect()
    };
    PeriodTable::new(index, vec![TableColumn::new(name, cells)])
}
