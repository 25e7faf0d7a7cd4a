use crate::helpers::*;
use fameframe::{Frequency, PeriodRange, Tables};

#[tokio::test]
async fn loads_every_series_when_none_requested() {
    let conn = fixtures();
    let data = load(&conn, &[MACRO_PATH], None, None, None).await.unwrap();

    assert_eq!(data.mnemonics, ["macro"]);
    assert_eq!(data.series["macro"], ["CPI", "GDP", "INV"]);
    assert!(data.compare.is_none());
    assert!(data.warnings.is_empty());

    let t = single(&data);
    assert_eq!(t.column_names().collect::<Vec<_>>(), ["CPI", "GDP", "INV"]);
    assert_eq!(t.height(), 12);
    assert_eq!(t.span(), Some((q("2019Q1"), q("2021Q4"))));
    assert_eq!(t.get(&q("2020Q2"), "GDP"), Some(91.7));
    assert!(t.column("INV").unwrap().is_all_missing());
}

#[tokio::test]
async fn reports_actual_ranges_and_frequencies() {
    let conn = fixtures();
    let data = load(&conn, &[MACRO_PATH], None, None, None).await.unwrap();

    let ranges = &data.ranges["macro"];
    assert_eq!(
        ranges["GDP"],
        PeriodRange::new(Some(q("2019Q1")), Some(q("2021Q4")))
    );
    assert_eq!(ranges["INV"], PeriodRange::default());
    assert_eq!(data.frequencies["macro"]["CPI"], Frequency::Quarterly);
}

#[tokio::test]
async fn no_resolved_series_is_no_data() {
    let conn = fixtures();
    let data = load(&conn, &[MACRO_PATH], Some(&["NOPE"]), None, None)
        .await
        .unwrap();
    assert_eq!(data.data, Tables::NoData);
    assert!(data.series["macro"].is_empty());
    assert_eq!(data.warnings.len(), 1);
}

#[tokio::test]
async fn non_quarterly_series_aborts_the_load() {
    let conn = fixtures();
    let err = load(&conn, &[LABOUR_PATH], Some(&["CLAIMS"]), None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, fameframe::FameError::Data(_)));
    assert!(closed_once(&conn, LABOUR_PATH));
}
