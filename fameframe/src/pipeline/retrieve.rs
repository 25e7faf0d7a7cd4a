use fameframe_core::{BoundRole, DataStore, FameError, NativeDate, NativeIndex, Period};

use crate::core::tag_err;

/// Observations of one series with the native labels actually present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObservationSet {
    /// Values in time order.
    pub values: Vec<f64>,
    /// Label of the first observation returned.
    pub first: Option<NativeDate>,
    /// Label of the last observation returned.
    pub last: Option<NativeDate>,
}

/// Native index for one bound of a series.
///
/// With a period, the year and first month of its containing quarter go
/// through the store's date helper, since quarterly observations are labelled
/// by that month. Without one, the series is fetched and its stored
/// first (start) or last (end) index is used; empty series yield `None`.
///
/// # Errors
/// Propagates store failures.
pub async fn native_index(
    store: &dyn DataStore,
    series: &str,
    period: Option<Period>,
    role: BoundRole,
) -> Result<Option<NativeIndex>, FameError> {
    if let Some(p) = period.map(Period::to_quarterly) {
        return store
            .ymd_to_index(p.year(), u32::from(p.first_month()))
            .map(Some);
    }
    let obs = store.fetch(series).await?;
    Ok(match role {
        BoundRole::Start => obs.first_index,
        BoundRole::End => obs.last_index,
    })
}

/// Fetch every observation of a series.
///
/// # Errors
/// Propagates store failures tagged with `label`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "fameframe::pipeline::copy_all",
        skip(store),
        fields(store = label),
    )
)]
pub async fn copy_all(
    store: &dyn DataStore,
    series: &str,
    label: &str,
) -> Result<ObservationSet, FameError> {
    let obs = store.fetch(series).await.map_err(|e| tag_err(label, e))?;
    Ok(ObservationSet {
        first: obs.first_date(),
        last: obs.last_date(),
        values: obs.values,
    })
}

/// Fetch the observations of a series between two optional bounds.
///
/// An absent bound falls back to the series' own first or last index. If
/// either index stays unknown the series is empty and so is the result.
///
/// # Errors
/// Propagates store failures tagged with `label`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "fameframe::pipeline::copy_range",
        skip(store),
        fields(store = label),
    )
)]
pub async fn copy_range(
    store: &dyn DataStore,
    series: &str,
    start: Option<Period>,
    end: Option<Period>,
    label: &str,
) -> Result<ObservationSet, FameError> {
    let first = native_index(store, series, start, BoundRole::Start)
        .await
        .map_err(|e| tag_err(label, e))?;
    let last = native_index(store, series, end, BoundRole::End)
        .await
        .map_err(|e| tag_err(label, e))?;
    let (Some(first), Some(last)) = (first, last) else {
        return Ok(ObservationSet::default());
    };

    let obs = store
        .fetch_range(series, first, last)
        .await
        .map_err(|e| tag_err(label, e))?;
    Ok(ObservationSet {
        first: obs.first_date(),
        last: obs.last_date(),
        values: obs.values,
    })
}
