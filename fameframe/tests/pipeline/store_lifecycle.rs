use crate::helpers::*;
use fameframe::{FameError, FameLoader};

#[tokio::test]
async fn stores_are_closed_after_success() {
    let conn = fixtures();
    load(&conn, &[MACRO_PATH, LABOUR_PATH], Some(&["GDP"]), None, None)
        .await
        .unwrap();
    assert!(closed_once(&conn, MACRO_PATH));
    assert!(closed_once(&conn, LABOUR_PATH));
}

#[tokio::test]
async fn opened_stores_are_closed_when_a_later_open_fails() {
    let conn = fixtures().fail_open("/data/locked.db", FameError::Other("locked".into()));
    let err = load(&conn, &[MACRO_PATH, "/data/locked.db"], None, None, None)
        .await
        .unwrap_err();
    assert_eq!(err, FameError::store("locked", "unknown error: locked"));
    assert!(closed_once(&conn, MACRO_PATH));
}

#[tokio::test]
async fn open_error_survives_failed_cleanup_close() {
    let store = MockStore::new()
        .with_series("GDP", MockSeries::quarterly(2020, 1, vec![1.0]))
        .with_close_error(FameError::Other("flush failed".into()));
    let conn = MockConnector::new()
        .with_store("/data/gdp.db", store)
        .fail_open("/data/locked.db", FameError::Other("locked".into()));

    let err = load(&conn, &["/data/gdp.db", "/data/locked.db"], None, None, None)
        .await
        .unwrap_err();
    assert_eq!(err, FameError::store("locked", "unknown error: locked"));
    assert!(closed_once(&conn, "/data/gdp.db"));
}

#[tokio::test]
async fn unknown_path_is_a_store_error() {
    let conn = fixtures();
    let err = load(&conn, &["/nowhere/x.db"], None, None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, FameError::Store { .. }));
}

#[tokio::test]
async fn stores_are_closed_when_retrieval_fails() {
    let store = MockStore::new()
        .with_series("GDP", MockSeries::quarterly(2020, 1, vec![1.0]))
        .with_behavior("CPI", MockBehavior::Fail(FameError::Other("io".into())));
    let conn = fixtures().with_store("/data/flaky.db", store);

    // CPI is rejected during resolution, so list it only through the wildcard
    let err = FameLoader::builder()
        .sources([MACRO_PATH, "/data/flaky.db"])
        .build()
        .unwrap()
        .load(&conn)
        .await
        .unwrap_err();
    assert_eq!(err, FameError::store("flaky", "unknown error: io"));
    assert!(closed_once(&conn, MACRO_PATH));
    assert!(closed_once(&conn, "/data/flaky.db"));
}

#[tokio::test]
async fn close_failures_become_warnings() {
    let store = MockStore::new()
        .with_series("GDP", MockSeries::quarterly(2020, 1, vec![1.0, 2.0]))
        .with_close_error(FameError::Other("flush failed".into()));
    let conn = MockConnector::new().with_store("/data/gdp.db", store);

    let data = load(&conn, &["/data/gdp.db"], None, None, None).await.unwrap();
    assert_eq!(single(&data).height(), 2);
    assert_eq!(
        data.warnings,
        vec![FameError::store("gdp", "unknown error: flush failed")]
    );
}
