use std::collections::BTreeMap;

use fameframe_core::{
    FameError, PeriodTable, Tables, common_series, compare_series, concat_columns,
};

use super::SourceOutcome;

/// Shape the per-source tables into the result layout.
///
/// One source yields its table or the no-data marker and no comparison.
/// Several sources yield a map keyed by mnemonic (sources without series are
/// left out) and one comparison table per series resolved in every source.
///
/// # Errors
/// Propagates table construction failures.
pub fn assemble(
    outcomes: &[SourceOutcome],
) -> Result<(Tables, Option<BTreeMap<String, PeriodTable>>), FameError> {
    if let [only] = outcomes {
        let data = match &only.table {
            Some(t) => Tables::Single(t.clone()),
            None => Tables::NoData,
        };
        return Ok((data, None));
    }

    let tables: BTreeMap<String, PeriodTable> = outcomes
        .iter()
        .filter_map(|o| o.table.clone().map(|t| (o.label.clone(), t)))
        .collect();

    let mut compare = BTreeMap::new();
    for name in common_series(outcomes.iter().map(|o| o.series.as_slice())) {
        let sources = outcomes
            .iter()
            .filter_map(|o| o.table.as_ref().map(|t| (o.label.as_str(), t)));
        let table = compare_series(&name, sources)?;
        compare.insert(name, table);
    }
    Ok((Tables::Multi(tables), Some(compare)))
}

/// Combine the per-series tables of one source; `None` when there are none.
///
/// # Errors
/// Propagates table construction failures.
pub fn combine(tables: Vec<PeriodTable>) -> Result<Option<PeriodTable>, FameError> {
    if tables.is_empty() {
        return Ok(None);
    }
    concat_columns(tables).map(Some)
}
