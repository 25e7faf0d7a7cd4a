use std::time::Duration;

use crate::helpers::*;
use fameframe::{FameError, FameLoader, SourceStrategy, Tables};

#[tokio::test]
async fn duplicate_file_names_get_numbered_mnemonics() {
    let conn = fixtures();
    let data = load(&conn, &[MACRO_PATH, MACRO_REVISED_PATH], Some(&["GDP"]), None, None)
        .await
        .unwrap();
    assert_eq!(data.mnemonics, ["macro0", "macro1"]);
    let Tables::Multi(tables) = &data.data else {
        panic!("expected a table per source");
    };
    assert_eq!(tables.keys().collect::<Vec<_>>(), ["macro0", "macro1"]);
    assert_eq!(tables["macro1"].span(), Some((q("2020Q1"), q("2022Q2"))));
}

#[tokio::test]
async fn comparison_covers_series_present_everywhere() {
    let conn = fixtures();
    let data = load(
        &conn,
        &[MACRO_PATH, MACRO_REVISED_PATH],
        Some(&["GDP", "CPI"]),
        None,
        None,
    )
    .await
    .unwrap();

    assert_eq!(data.series["macro0"], ["CPI", "GDP"]);
    assert_eq!(data.series["macro1"], ["GDP"]);
    assert_eq!(
        data.warnings,
        vec![FameError::not_found("series CPI in macro1.db")]
    );

    let compare = data.compare.as_ref().unwrap();
    assert_eq!(compare.keys().collect::<Vec<_>>(), ["GDP"]);
    let gdp = &compare["GDP"];
    assert_eq!(gdp.column_names().collect::<Vec<_>>(), ["macro0", "macro1"]);
    assert_eq!(gdp.height(), 14);
    assert_eq!(gdp.get(&q("2019Q1"), "macro0"), Some(100.0));
    assert_eq!(gdp.get(&q("2019Q1"), "macro1"), None);
    assert_eq!(gdp.get(&q("2020Q2"), "macro1"), Some(91.2));
    assert_eq!(gdp.get(&q("2022Q2"), "macro0"), None);
}

#[tokio::test]
async fn sources_without_series_are_omitted() {
    let conn = fixtures();
    let data = load(&conn, &[MACRO_PATH, LABOUR_PATH], Some(&["GDP"]), None, None)
        .await
        .unwrap();
    assert!(data.series["labour"].is_empty());
    assert!(data.data.by_mnemonic("labour").is_none());
    assert!(data.data.by_mnemonic("macro").is_some());
    assert_eq!(data.compare.as_ref().map(|c| c.len()), Some(0));
}

#[tokio::test]
async fn explicit_mnemonics_label_sources() {
    let conn = fixtures();
    let data = FameLoader::builder()
        .sources([MACRO_PATH, MACRO_REVISED_PATH])
        .mnemonics(["first", "revised"])
        .series("GDP")
        .start("2021")
        .build()
        .unwrap()
        .load(&conn)
        .await
        .unwrap();
    let gdp = &data.compare.as_ref().unwrap()["GDP"];
    assert_eq!(gdp.column_names().collect::<Vec<_>>(), ["first", "revised"]);
    assert_eq!(labels(gdp), ["2021Q1", "2021Q2", "2021Q3", "2021Q4", "2022Q1", "2022Q2"]);
}

#[tokio::test]
async fn concurrent_strategy_matches_sequential() {
    let slow = MockConnector::with_fixtures().with_store(
        "/data/slow/labour.db",
        MockStore::new()
            .with_series("GDP", MockSeries::quarterly(2021, 1, vec![7.0, 8.0]))
            .with_latency(Duration::from_millis(10)),
    );
    let sources = [MACRO_PATH, MACRO_REVISED_PATH, "/data/slow/labour.db"];

    let run = |strategy| {
        FameLoader::builder()
            .sources(sources)
            .series(["GDP", "INV"])
            .source_strategy(strategy)
            .build()
            .unwrap()
    };
    let sequential = run(SourceStrategy::Sequential).load(&slow).await.unwrap();
    let concurrent = run(SourceStrategy::Concurrent).load(&slow).await.unwrap();

    assert_eq!(sequential, concurrent);
    assert!(slow.all_closed());
}
