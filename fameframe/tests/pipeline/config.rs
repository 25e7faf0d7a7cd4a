use crate::helpers::*;
use fameframe::{FameError, FameLoader, LoadConfig, SourceStrategy};

#[tokio::test]
async fn loader_from_json_config() {
    let cfg: LoadConfig = serde_json::from_str(&format!(
        r#"{{
            "sources": "{MACRO_PATH}",
            "series": ["GDP"],
            "start": "2021",
            "source_strategy": "Concurrent"
        }}"#
    ))
    .unwrap();
    assert_eq!(cfg.source_strategy, SourceStrategy::Concurrent);

    let loader = FameLoader::from_config(cfg).unwrap();
    assert_eq!(loader.mnemonics(), ["macro"]);
    assert_eq!(loader.range().start, Some(q("2021Q1")));

    let data = loader.load(&fixtures()).await.unwrap();
    assert_eq!(labels(single(&data)), ["2021Q1", "2021Q2", "2021Q3", "2021Q4"]);
}

#[test]
fn mnemonic_count_must_match_sources() {
    let err = FameLoader::builder()
        .sources([MACRO_PATH, LABOUR_PATH])
        .mnemonics("only-one")
        .build()
        .unwrap_err();
    assert!(matches!(err, FameError::InvalidArg(_)));
}

#[test]
fn malformed_dates_are_rejected_at_build() {
    let err = FameLoader::builder()
        .source(MACRO_PATH)
        .end("21Q4")
        .build()
        .unwrap_err();
    assert!(matches!(err, FameError::InvalidArg(_)));
}
