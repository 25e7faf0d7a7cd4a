//! Native date and index representations used by stores.

use core::fmt;
use core::str::FromStr;

use chrono::Month;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::FameError;

/// A store's internal integer time position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NativeIndex(pub i64);

impl NativeIndex {
    /// Raw index value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for NativeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A store calendar label in month-name + year form, e.g. `Jan2020`.
///
/// Stores label a quarterly observation by the first month of its quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeDate {
    /// Calendar year.
    pub year: i32,
    /// Calendar month.
    pub month: Month,
}

impl NativeDate {
    /// Build a native date from a year and a 1-based month number.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `month` is outside `1..=12`.
    pub fn from_ym(year: i32, month: u32) -> Result<Self, FameError> {
        let m = u8::try_from(month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .ok_or_else(|| FameError::InvalidArg(format!("invalid month number: {month}")))?;
        Ok(Self { year, month: m })
    }

    /// 1-based month number.
    #[must_use]
    pub fn month_number(self) -> u32 {
        self.month.number_from_month()
    }
}

impl Ord for NativeDate {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        (self.year, self.month_number()).cmp(&(other.year, other.month_number()))
    }
}

impl PartialOrd for NativeDate {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for NativeDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", &self.month.name()[..3], self.year)
    }
}

impl FromStr for NativeDate {
    type Err = FameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FameError::Data(format!("invalid native date label: '{s}'"));
        let s = s.trim();
        if s.len() != 7 || !s.is_ascii() {
            return Err(invalid());
        }
        let (month, year) = s.split_at(3);
        let month = Month::from_str(month).map_err(|_| invalid())?;
        if !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let year = year.parse().map_err(|_| invalid())?;
        Ok(Self { year, month })
    }
}

impl Serialize for NativeDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NativeDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
