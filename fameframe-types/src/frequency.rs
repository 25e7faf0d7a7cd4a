use core::fmt;

use serde::{Deserialize, Serialize};

/// Sampling frequency reported by a store for one series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Frequency {
    /// One observation per year.
    Annual,
    /// One observation per calendar quarter.
    Quarterly,
    /// One observation per calendar month.
    Monthly,
    /// One observation per week.
    Weekly,
    /// One observation per business day.
    Business,
    /// One observation per calendar day.
    Daily,
    /// Any label the crate does not model, kept verbatim.
    Other(String),
}

impl Frequency {
    /// Interpret a store frequency label such as `QUARTERLY` or
    /// `QUARTERLY(DECEMBER)`. Matching is case-insensitive on the prefix.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let upper = label.trim().to_ascii_uppercase();
        let known = [
            ("ANNUAL", Self::Annual),
            ("QUARTERLY", Self::Quarterly),
            ("MONTHLY", Self::Monthly),
            ("WEEKLY", Self::Weekly),
            ("BUSINESS", Self::Business),
            ("DAILY", Self::Daily),
        ];
        known
            .into_iter()
            .find(|(prefix, _)| upper.starts_with(prefix))
            .map_or_else(|| Self::Other(label.trim().to_string()), |(_, f)| f)
    }

    /// Canonical upper-case label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Annual => "ANNUAL",
            Self::Quarterly => "QUARTERLY",
            Self::Monthly => "MONTHLY",
            Self::Weekly => "WEEKLY",
            Self::Business => "BUSINESS",
            Self::Daily => "DAILY",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for Frequency {
    fn from(label: &str) -> Self {
        Self::from_label(label)
    }
}
