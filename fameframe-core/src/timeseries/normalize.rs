use crate::{BoundRole, FameError, Period, PeriodRange};

/// Expand a bare year (`1000`–`2999`) into the first or last quarter of that
/// year depending on `role`. Returns `None` for anything that is not exactly a
/// four-digit year in that span.
#[must_use]
pub fn expand_year(raw: &str, role: BoundRole) -> Option<Period> {
    let b = raw.as_bytes();
    if b.len() != 4 || !matches!(b[0], b'1' | b'2') || !b.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let year: i32 = raw.parse().ok()?;
    Some(match role {
        BoundRole::Start => Period::start_of_year(year),
        BoundRole::End => Period::end_of_year(year),
    })
}

/// Parse one user-supplied date bound: a bare year is expanded, anything
/// else must already be a period label.
///
/// # Errors
/// Returns `InvalidArg` if the string is neither a year nor a period label.
pub fn parse_bound(raw: &str, role: BoundRole) -> Result<Period, FameError> {
    let raw = raw.trim();
    match expand_year(raw, role) {
        Some(p) => Ok(p),
        None => raw.parse(),
    }
}

/// Normalize optional start/end date strings into quarterly bounds.
///
/// Monthly labels snap to the quarter containing them, so `2020M11` becomes
/// `2020Q4` on either side.
///
/// ```
/// use fameframe_core::timeseries::normalize::normalize_dates;
///
/// let r = normalize_dates(Some("2020"), Some("2021")).unwrap();
/// assert_eq!(r.start.unwrap().to_string(), "2020Q1");
/// assert_eq!(r.end.unwrap().to_string(), "2021Q4");
///
/// assert!(normalize_dates(Some("2021"), Some("2020")).is_err());
/// ```
///
/// # Errors
/// - `InvalidArg` for malformed dates.
/// - `DateOrder` when the normalized start falls after the normalized end.
pub fn normalize_dates(start: Option<&str>, end: Option<&str>) -> Result<PeriodRange, FameError> {
    let start = start
        .map(|s| parse_bound(s, BoundRole::Start).map(Period::to_quarterly))
        .transpose()?;
    let end = end
        .map(|e| parse_bound(e, BoundRole::End).map(Period::to_quarterly))
        .transpose()?;
    if let (Some(s), Some(e)) = (start, end)
        && s > e
    {
        return Err(FameError::DateOrder {
            start: s.to_string(),
            end: e.to_string(),
        });
    }
    Ok(PeriodRange::new(start, end))
}
