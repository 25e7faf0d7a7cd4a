use std::collections::{BTreeMap, BTreeSet};

use crate::{FameError, Period, PeriodTable, TableColumn};

/// Place tables side by side, aligning rows on the period index.
///
/// The resulting index is the sorted union of all input indices; a column
/// has missing cells for periods its source table does not cover. Columns
/// keep input order.
///
/// # Errors
/// Only fails if an input table violates the column-length invariant.
pub fn concat_columns<I>(tables: I) -> Result<PeriodTable, FameError>
where
    I: IntoIterator<Item = PeriodTable>,
{
    let tables: Vec<PeriodTable> = tables.into_iter().collect();
    let index: Vec<Period> = tables
        .iter()
        .flat_map(|t| t.index().iter().copied())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let row_of: BTreeMap<Period, usize> = index.iter().enumerate().map(|(i, p)| (*p, i)).collect();

    let mut columns: Vec<TableColumn> = Vec::new();
    for table in tables {
        let (own_index, own_columns) = table.into_parts();
        for col in own_columns {
            let mut cells = vec![None; index.len()];
            for (period, value) in own_index.iter().zip(col.values) {
                if let Some(&row) = row_of.get(period) {
                    cells[row] = value;
                }
            }
            columns.push(TableColumn::new(col.name, cells));
        }
    }
    PeriodTable::new(index, columns)
}

/// Series names present in every list. Empty when there are no lists.
pub fn common_series<'a, I>(lists: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a [String]>,
{
    let mut iter = lists.into_iter();
    let Some(first) = iter.next() else {
        return BTreeSet::new();
    };
    let mut common: BTreeSet<String> = first.iter().cloned().collect();
    for list in iter {
        let other: BTreeSet<&String> = list.iter().collect();
        common.retain(|s| other.contains(s));
    }
    common
}

/// One series across several sources: one column per source, headed by the
/// source label, aligned on the period index.
///
/// # Errors
/// Returns `NotFound` if a source table lacks the series column.
pub fn compare_series<'a, I>(series: &str, sources: I) -> Result<PeriodTable, FameError>
where
    I: IntoIterator<Item = (&'a str, &'a PeriodTable)>,
{
    let mut parts = Vec::new();
    for (label, table) in sources {
        let col = table
            .column(series)
            .ok_or_else(|| FameError::not_found(format!("series {series} in {label}")))?;
        parts.push(PeriodTable::new(
            table.index().to_vec(),
            vec![TableColumn::new(label, col.values.clone())],
        )?);
    }
    concat_columns(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(s: &str) -> Period {
        s.parse().unwrap()
    }

    fn table(name: &str, periods: &[&str], values: &[f64]) -> PeriodTable {
        PeriodTable::new(
            periods.iter().map(|p| q(p)).collect(),
            vec![TableColumn::new(
                name,
                values.iter().copied().map(Some).collect(),
            )],
        )
        .unwrap()
    }

    #[test]
    fn outer_join_fills_gaps_with_missing() {
        let a = table("A", &["2020Q1", "2020Q2"], &[1.0, 2.0]);
        let b = table("B", &["2020Q2", "2020Q3"], &[20.0, 30.0]);
        let t = concat_columns([a, b]).unwrap();

        assert_eq!(t.index(), &[q("2020Q1"), q("2020Q2"), q("2020Q3")]);
        assert_eq!(t.column("A").unwrap().values, vec![Some(1.0), Some(2.0), None]);
        assert_eq!(t.column("B").unwrap().values, vec![None, Some(20.0), Some(30.0)]);
    }

    #[test]
    fn concat_of_nothing_is_empty() {
        let t = concat_columns(Vec::new()).unwrap();
        assert_eq!(t.height(), 0);
        assert_eq!(t.width(), 0);
    }

    #[test]
    fn common_series_is_intersection() {
        let a = vec!["GDP".to_string(), "CPI".to_string()];
        let b = vec!["CPI".to_string(), "UNEMP".to_string()];
        let common = common_series([a.as_slice(), b.as_slice()]);
        assert_eq!(common.into_iter().collect::<Vec<_>>(), ["CPI"]);
    }

    #[test]
    fn compare_series_uses_labels_as_headers() {
        let x = table("GDP", &["2020Q1"], &[1.0]);
        let y = table("GDP", &["2020Q1", "2020Q2"], &[1.5, 2.5]);
        let t = compare_series("GDP", [("x0", &x), ("x1", &y)]).unwrap();
        assert_eq!(t.column_names().collect::<Vec<_>>(), ["x0", "x1"]);
        assert_eq!(t.get(&q("2020Q2"), "x0"), None);
        assert_eq!(t.get(&q("2020Q2"), "x1"), Some(2.5));
    }
}
