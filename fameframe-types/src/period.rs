//! Canonical period labels used to index tables.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::FameError;

/// A calendar period label.
///
/// The canonical form is quarterly (`YYYYQ#`). A monthly form (`YYYYMmm`) is
/// accepted on input so that a raw month can be handed to a store's date
/// helper; tables are always indexed by quarters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    /// Calendar quarter, `quarter` in `1..=4`.
    Quarter {
        /// Four-digit year.
        year: i32,
        /// Quarter number.
        quarter: u8,
    },
    /// Calendar month, `month` in `1..=12`.
    Month {
        /// Four-digit year.
        year: i32,
        /// Month number.
        month: u8,
    },
}

impl Period {
    /// Build a quarterly period.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `quarter` is outside `1..=4`.
    pub fn quarter(year: i32, quarter: u8) -> Result<Self, FameError> {
        if !(1..=4).contains(&quarter) {
            return Err(FameError::InvalidArg(format!(
                "quarter must be between 1 and 4, got {quarter}"
            )));
        }
        Ok(Self::Quarter { year, quarter })
    }

    /// Build a monthly period.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `month` is outside `1..=12`.
    pub fn month(year: i32, month: u8) -> Result<Self, FameError> {
        if !(1..=12).contains(&month) {
            return Err(FameError::InvalidArg(format!(
                "month must be between 1 and 12, got {month}"
            )));
        }
        Ok(Self::Month { year, month })
    }

    /// First quarter of `year`.
    #[must_use]
    pub const fn start_of_year(year: i32) -> Self {
        Self::Quarter { year, quarter: 1 }
    }

    /// Last quarter of `year`.
    #[must_use]
    pub const fn end_of_year(year: i32) -> Self {
        Self::Quarter { year, quarter: 4 }
    }

    /// Calendar year of the period.
    #[must_use]
    pub const fn year(self) -> i32 {
        match self {
            Self::Quarter { year, .. } | Self::Month { year, .. } => year,
        }
    }

    /// First calendar month covered by the period (Q*n* → (n-1)*3+1).
    #[must_use]
    pub const fn first_month(self) -> u8 {
        match self {
            Self::Quarter { quarter, .. } => (quarter - 1) * 3 + 1,
            Self::Month { month, .. } => month,
        }
    }

    /// Quarter number containing the period.
    #[must_use]
    pub const fn quarter_number(self) -> u8 {
        match self {
            Self::Quarter { quarter, .. } => quarter,
            Self::Month { month, .. } => (month - 1) / 3 + 1,
        }
    }

    /// The quarter containing this period.
    #[must_use]
    pub const fn to_quarterly(self) -> Self {
        Self::Quarter {
            year: self.year(),
            quarter: self.quarter_number(),
        }
    }

    /// The quarter following the quarter that contains this period.
    #[must_use]
    pub const fn next_quarter(self) -> Self {
        let q = self.quarter_number();
        if q == 4 {
            Self::Quarter {
                year: self.year() + 1,
                quarter: 1,
            }
        } else {
            Self::Quarter {
                year: self.year(),
                quarter: q + 1,
            }
        }
    }

    // Periods group by containing quarter; a month sorts after its quarter
    // and before the next one.
    const fn sort_key(self) -> (i32, u8, u8) {
        match self {
            Self::Quarter { year, quarter } => (year, quarter, 0),
            Self::Month { year, month } => (year, self.quarter_number(), month),
        }
    }
}

impl Ord for Period {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Period {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quarter { year, quarter } => write!(f, "{year:04}Q{quarter}"),
            Self::Month { year, month } => write!(f, "{year:04}M{month:02}"),
        }
    }
}

impl FromStr for Period {
    type Err = FameError;

    /// Parse `YYYYQ#` (case-insensitive `q`) or a monthly `YYYYMmm`,
    /// `YYYY-MM` or `YYYYMM` label. A bare year is rejected here; see
    /// `normalize_dates` for year expansion.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FameError::InvalidArg(format!("invalid period label: '{s}'"));
        let s_trim = s.trim();
        if s_trim.len() < 5 || !s_trim.is_ascii() {
            return Err(invalid());
        }
        let (year_part, rest) = s_trim.split_at(4);
        if !year_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let year: i32 = year_part.parse().map_err(|_| invalid())?;

        let rest = rest.as_bytes();
        match rest {
            [q, d] if q.eq_ignore_ascii_case(&b'Q') && d.is_ascii_digit() => {
                Self::quarter(year, d - b'0').map_err(|_| invalid())
            }
            [sep, m1, m2] if (sep.eq_ignore_ascii_case(&b'M') || *sep == b'-')
                && m1.is_ascii_digit()
                && m2.is_ascii_digit() =>
            {
                Self::month(year, (m1 - b'0') * 10 + (m2 - b'0')).map_err(|_| invalid())
            }
            [m1, m2] if m1.is_ascii_digit() && m2.is_ascii_digit() => {
                Self::month(year, (m1 - b'0') * 10 + (m2 - b'0')).map_err(|_| invalid())
            }
            _ => Err(invalid()),
        }
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Which side of a range a date bound sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoundRole {
    /// Lower bound; absent dates resolve to the first stored observation.
    Start,
    /// Upper bound; absent dates resolve to the last stored observation.
    End,
}

/// Resolved `[start, end]` coverage of one series.
///
/// Either side is `None` when neither the request nor the store supplied a
/// bound (typically a series with no observations).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PeriodRange {
    /// Inclusive first period.
    pub start: Option<Period>,
    /// Inclusive last period.
    pub end: Option<Period>,
}

impl PeriodRange {
    /// Build a range from optional bounds.
    #[must_use]
    pub const fn new(start: Option<Period>, end: Option<Period>) -> Self {
        Self { start, end }
    }

    /// Both bounds, when both are present.
    #[must_use]
    pub const fn bounds(&self) -> Option<(Period, Period)> {
        match (self.start, self.end) {
            (Some(s), Some(e)) => Some((s, e)),
            _ => None,
        }
    }
}
