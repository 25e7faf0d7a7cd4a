use std::path::Path;

use crate::helpers::*;
use fameframe::pipeline::resolve::resolve_series;
use fameframe::{FameConnector, FameError, FameLoader};
use proptest::prelude::*;

#[tokio::test]
async fn missing_series_become_warnings() {
    let conn = fixtures();
    let data = load(&conn, &[MACRO_PATH], Some(&["GDP", "NOPE"]), None, None)
        .await
        .unwrap();
    assert_eq!(data.series["macro"], ["GDP"]);
    assert_eq!(
        data.warnings,
        vec![FameError::not_found("series NOPE in macro.db")]
    );
    assert!(data.warnings.iter().all(|w| !w.is_actionable()));
}

#[tokio::test]
async fn failing_probe_is_reported_with_source_label() {
    let store = MockStore::new()
        .with_series("OK", MockSeries::quarterly(2020, 1, vec![1.0]))
        .with_behavior("BAD", MockBehavior::Fail(FameError::Other("boom".into())));
    let conn = MockConnector::new().with_store("/s/rates.db", store);

    let data = load(&conn, &["/s/rates.db"], Some(&["BAD", "OK"]), None, None)
        .await
        .unwrap();
    assert_eq!(data.series["rates"], ["OK"]);
    assert_eq!(
        data.warnings,
        vec![FameError::not_found(
            "series BAD: unknown error: boom in rates.db"
        )]
    );
}

#[tokio::test]
async fn requested_names_are_sorted_and_deduplicated() {
    let conn = fixtures();
    let data = load(&conn, &[MACRO_PATH], Some(&["GDP", "CPI", "GDP"]), None, None)
        .await
        .unwrap();
    assert_eq!(data.series["macro"], ["CPI", "GDP"]);
    assert_eq!(single(&data).width(), 2);
}

#[tokio::test]
async fn wildcard_pattern_limits_enumeration() {
    let conn = fixtures();
    let data = FameLoader::builder()
        .source(MACRO_PATH)
        .wildcard("G*")
        .build()
        .unwrap()
        .load(&conn)
        .await
        .unwrap();
    assert_eq!(data.series["macro"], ["GDP"]);
}

proptest! {
    #[test]
    fn resolution_is_idempotent_as_a_set(
        picks in proptest::collection::vec(
            prop::sample::select(vec!["GDP", "CPI", "INV", "NOPE", "X"]),
            0..8,
        )
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let (first, second) = rt.block_on(async {
            let conn = fixtures();
            let store = conn.open(Path::new(MACRO_PATH)).await.unwrap();
            let requested: Vec<String> = picks.iter().map(|s| (*s).to_string()).collect();
            let first = resolve_series(store.as_ref(), Some(requested.as_slice()), "macro", "*")
                .await
                .unwrap();
            let second = resolve_series(store.as_ref(), Some(first.series.as_slice()), "macro", "*")
                .await
                .unwrap();
            store.close().await.unwrap();
            (first, second)
        });

        let expected: std::collections::BTreeSet<&str> = picks
            .iter()
            .copied()
            .filter(|s| ["GDP", "CPI", "INV"].contains(s))
            .collect();
        prop_assert_eq!(
            first.series.iter().map(String::as_str).collect::<Vec<_>>(),
            expected.into_iter().collect::<Vec<_>>()
        );
        prop_assert_eq!(&second.series, &first.series);
        prop_assert!(second.rejected.is_empty());
    }
}
