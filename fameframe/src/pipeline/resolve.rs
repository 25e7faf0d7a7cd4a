use std::collections::BTreeSet;

use fameframe_core::{DataStore, FameError, Frequency};

use crate::core::tag_err;

/// Series resolved for one source plus the rejections reported along the way.
#[derive(Debug, Default)]
pub struct Resolution {
    /// Accepted names, sorted and de-duplicated.
    pub series: Vec<String>,
    /// One `NotFound` warning per rejected name.
    pub rejected: Vec<FameError>,
}

/// Resolve which series to load from `store`.
///
/// Without a requested list every name matching `wildcard` is taken. With a
/// list, each name is probed with a fetch; names whose fetch fails are
/// dropped and reported as `<error> in <label>.db` without aborting.
///
/// # Errors
/// Only a failing wildcard enumeration aborts resolution.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "fameframe::pipeline::resolve_series",
        skip(store, requested),
        fields(store = label, requested = requested.map_or(0, <[String]>::len)),
    )
)]
pub async fn resolve_series(
    store: &dyn DataStore,
    requested: Option<&[String]>,
    label: &str,
    wildcard: &str,
) -> Result<Resolution, FameError> {
    let Some(requested) = requested else {
        let names = store
            .match_wildcard(wildcard)
            .await
            .map_err(|e| tag_err(label, e))?;
        return Ok(Resolution {
            series: names
                .into_iter()
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect(),
            rejected: Vec::new(),
        });
    };

    let mut accepted = BTreeSet::new();
    let mut rejected = Vec::new();
    for name in requested.iter().collect::<BTreeSet<_>>() {
        match store.fetch(name).await {
            Ok(_) => {
                accepted.insert(name.clone());
            }
            Err(e) => {
                let what = match e {
                    FameError::NotFound { what } => what,
                    other => format!("series {name}: {other}"),
                };
                let warning = FameError::not_found(format!("{what} in {label}.db"));
                #[cfg(feature = "tracing")]
                tracing::warn!(store = %label, series = %name, warning = %warning, "rejected series");
                rejected.push(warning);
            }
        }
    }
    Ok(Resolution {
        series: accepted.into_iter().collect(),
        rejected,
    })
}

/// Frequency of a series as reported by the store.
///
/// # Errors
/// Propagates the fetch failure tagged with `label`.
pub async fn series_frequency(
    store: &dyn DataStore,
    name: &str,
    label: &str,
) -> Result<Frequency, FameError> {
    store
        .fetch(name)
        .await
        .map(|obs| obs.frequency())
        .map_err(|e| tag_err(label, e))
}
