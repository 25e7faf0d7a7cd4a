//! Scalar-or-list arguments.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Either a single value or a list of values.
///
/// Builder arguments and configuration files accept both shapes; consumers
/// always work with the list form via [`OneOrMany::into_vec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// A single value.
    One(T),
    /// Any number of values.
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Convert into a list; a single value yields a one-element list.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(v) => vec![v],
            Self::Many(v) => v,
        }
    }

    /// Number of contained values.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(v) => v.len(),
        }
    }

    /// True when this is an empty list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(v: Vec<T>) -> Self {
        Self::Many(v)
    }
}

impl From<&str> for OneOrMany<String> {
    fn from(s: &str) -> Self {
        Self::One(s.to_string())
    }
}

impl From<String> for OneOrMany<String> {
    fn from(s: String) -> Self {
        Self::One(s)
    }
}

impl From<Vec<&str>> for OneOrMany<String> {
    fn from(v: Vec<&str>) -> Self {
        Self::Many(v.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for OneOrMany<String> {
    fn from(v: &[&str]) -> Self {
        Self::Many(v.iter().map(|s| (*s).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for OneOrMany<String> {
    fn from(v: [&str; N]) -> Self {
        Self::Many(v.into_iter().map(str::to_string).collect())
    }
}

impl From<&str> for OneOrMany<PathBuf> {
    fn from(s: &str) -> Self {
        Self::One(PathBuf::from(s))
    }
}

impl From<String> for OneOrMany<PathBuf> {
    fn from(s: String) -> Self {
        Self::One(PathBuf::from(s))
    }
}

impl From<PathBuf> for OneOrMany<PathBuf> {
    fn from(p: PathBuf) -> Self {
        Self::One(p)
    }
}

impl From<&Path> for OneOrMany<PathBuf> {
    fn from(p: &Path) -> Self {
        Self::One(p.to_path_buf())
    }
}

impl From<Vec<&str>> for OneOrMany<PathBuf> {
    fn from(v: Vec<&str>) -> Self {
        Self::Many(v.into_iter().map(PathBuf::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for OneOrMany<PathBuf> {
    fn from(v: [&str; N]) -> Self {
        Self::Many(v.into_iter().map(PathBuf::from).collect())
    }
}
