use chrono::Month;

use crate::native::NativeDate;
use crate::{FameError, Period, PeriodRange};

/// Convert a native label to its quarterly period.
///
/// Quarterly stores label observations by the first month of the quarter, so
/// only January, April, July and October are recognized.
///
/// # Errors
/// Returns `Data` for any other month.
pub fn native_to_period(date: NativeDate) -> Result<Period, FameError> {
    let quarter = match date.month {
        Month::January => 1,
        Month::April => 2,
        Month::July => 3,
        Month::October => 4,
        _ => {
            return Err(FameError::Data(format!(
                "native date '{date}' does not start a quarter"
            )));
        }
    };
    Ok(Period::Quarter {
        year: date.year,
        quarter,
    })
}

/// Intersect the requested bounds with the coverage a store actually returned.
///
/// The start becomes the later of the requested start and the first returned
/// date; the end becomes the earlier of the requested end and the last
/// returned date. An absent side on either input leaves the other one in place.
/// Requested monthly bounds are compared as their containing quarter, so the
/// result is always quarterly.
///
/// ```
/// use fameframe_core::PeriodRange;
/// use fameframe_core::native::NativeDate;
/// use fameframe_core::timeseries::reconcile::reconcile;
///
/// let first: NativeDate = "Jan2020".parse().unwrap();
/// let last: NativeDate = "Oct2021".parse().unwrap();
/// let r = reconcile(PeriodRange::default(), Some(first), Some(last)).unwrap();
/// assert_eq!(r.start.unwrap().to_string(), "2020Q1");
/// assert_eq!(r.end.unwrap().to_string(), "2021Q4");
/// ```
///
/// # Errors
/// Returns `Data` when a returned date does not map to a quarter.
pub fn reconcile(
    requested: PeriodRange,
    first: Option<NativeDate>,
    last: Option<NativeDate>,
) -> Result<PeriodRange, FameError> {
    let requested = PeriodRange::new(
        requested.start.map(Period::to_quarterly),
        requested.end.map(Period::to_quarterly),
    );
    let first = first.map(native_to_period).transpose()?;
    let last = last.map(native_to_period).transpose()?;

    let start = match (requested.start, first) {
        (Some(req), Some(actual)) => Some(req.max(actual)),
        (req, actual) => req.or(actual),
    };
    let end = match (requested.end, last) {
        (Some(req), Some(actual)) => Some(req.min(actual)),
        (req, actual) => req.or(actual),
    };

    #[cfg(feature = "tracing")]
    {
        if start != requested.start || end != requested.end {
            tracing::debug!(
                requested_start = ?requested.start,
                requested_end = ?requested.end,
                start = ?start,
                end = ?end,
                "clamped requested range to stored coverage"
            );
        }
    }

    Ok(PeriodRange::new(start, end))
}
