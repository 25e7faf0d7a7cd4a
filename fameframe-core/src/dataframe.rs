use polars::prelude::{Column, DataFrame};

use crate::{FameError, PeriodTable};

/// Conversion of fameframe tables into polars data frames.
pub trait ToDataFrame {
    /// Build a frame with a leading `period` label column followed by one
    /// nullable `f64` column per table column.
    ///
    /// # Errors
    /// Returns `Data` if polars rejects the columns.
    fn to_dataframe(&self) -> Result<DataFrame, FameError>;
}

impl ToDataFrame for PeriodTable {
    fn to_dataframe(&self) -> Result<DataFrame, FameError> {
        let labels: Vec<String> = self.index().iter().map(ToString::to_string).collect();
        let mut columns = Vec::with_capacity(self.width() + 1);
        columns.push(Column::new("period".into(), labels));
        for col in self.columns() {
            columns.push(Column::new(col.name.as_str().into(), col.values.clone()));
        }
        DataFrame::new(columns).map_err(|e| FameError::Data(format!("dataframe: {e}")))
    }
}
