//! Period-indexed tables.

use serde::{Deserialize, Serialize};

use crate::error::FameError;
use crate::period::Period;

/// One named column of a [`PeriodTable`]. Missing cells are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableColumn {
    /// Column header (series name or source mnemonic).
    pub name: String,
    /// Cell values aligned with the table index.
    pub values: Vec<Option<f64>>,
}

impl TableColumn {
    /// Build a column from its header and cells.
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// True when every cell is missing.
    #[must_use]
    pub fn is_all_missing(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }
}

/// A table with one row per period and one column per series.
///
/// Every column has exactly as many cells as the index has periods.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PeriodTable {
    index: Vec<Period>,
    columns: Vec<TableColumn>,
}

impl PeriodTable {
    /// Build a table, checking that every column matches the index length.
    ///
    /// # Errors
    /// Returns `Data` if any column length differs from the index length.
    pub fn new(index: Vec<Period>, columns: Vec<TableColumn>) -> Result<Self, FameError> {
        if let Some(bad) = columns.iter().find(|c| c.values.len() != index.len()) {
            return Err(FameError::Data(format!(
                "length mismatch for column '{}': {} values for {} periods",
                bad.name,
                bad.values.len(),
                index.len()
            )));
        }
        Ok(Self { index, columns })
    }

    /// The period index, in ascending order.
    #[must_use]
    pub fn index(&self) -> &[Period] {
        &self.index
    }

    /// All columns in insertion order.
    #[must_use]
    pub fn columns(&self) -> &[TableColumn] {
        &self.columns
    }

    /// Column headers in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Look up a column by header.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&TableColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Value of `column` at `period`; `None` if either is absent or the cell is missing.
    #[must_use]
    pub fn get(&self, period: &Period, column: &str) -> Option<f64> {
        let row = self.index.binary_search(period).ok()?;
        self.column(column)?.values.get(row).copied().flatten()
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.index.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// First and last period of the index.
    #[must_use]
    pub fn span(&self) -> Option<(Period, Period)> {
        Some((*self.index.first()?, *self.index.last()?))
    }

    /// Split into index and columns.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Period>, Vec<TableColumn>) {
        (self.index, self.columns)
    }
}
