use crate::helpers::*;
use fameframe::PeriodRange;

#[tokio::test]
async fn year_bounds_cover_whole_years() {
    let conn = fixtures();
    let data = load(&conn, &[MACRO_PATH], Some(&["GDP"]), Some("2020"), Some("2020"))
        .await
        .unwrap();
    let t = single(&data);
    assert_eq!(labels(t), ["2020Q1", "2020Q2", "2020Q3", "2020Q4"]);
    assert_eq!(
        t.column("GDP").unwrap().values,
        vec![Some(98.4), Some(91.7), Some(96.9), Some(99.3)]
    );
}

#[tokio::test]
async fn bounds_outside_coverage_are_clamped() {
    let conn = fixtures();
    let data = load(&conn, &[MACRO_PATH], Some(&["GDP"]), Some("2015"), Some("2030"))
        .await
        .unwrap();
    assert_eq!(
        data.ranges["macro"]["GDP"],
        PeriodRange::new(Some(q("2019Q1")), Some(q("2021Q4")))
    );
    assert_eq!(single(&data).height(), 12);
}

#[tokio::test]
async fn start_only_runs_to_last_observation() {
    let conn = fixtures();
    let data = load(&conn, &[MACRO_PATH], Some(&["GDP"]), Some("2021Q3"), None)
        .await
        .unwrap();
    let t = single(&data);
    assert_eq!(labels(t), ["2021Q3", "2021Q4"]);
    assert_eq!(t.get(&q("2021Q4"), "GDP"), Some(105.1));
}

#[tokio::test]
async fn empty_series_in_range_is_a_placeholder() {
    let conn = fixtures();
    let data = load(&conn, &[MACRO_PATH], Some(&["INV"]), Some("2020"), Some("2020"))
        .await
        .unwrap();
    let t = single(&data);
    assert_eq!(t.height(), 4);
    assert!(t.column("INV").unwrap().is_all_missing());
    assert_eq!(
        data.ranges["macro"]["INV"],
        PeriodRange::new(Some(q("2020Q1")), Some(q("2020Q4")))
    );
}

#[tokio::test]
async fn monthly_start_bound_snaps_to_containing_quarter() {
    let conn = fixtures();
    let data = load(&conn, &[MACRO_PATH], Some(&["GDP"]), Some("2020M05"), Some("2020Q4"))
        .await
        .unwrap();
    let t = single(&data);
    assert_eq!(labels(t), ["2020Q2", "2020Q3", "2020Q4"]);
    assert_eq!(t.get(&q("2020Q2"), "GDP"), Some(91.7));
}

#[tokio::test]
async fn monthly_window_inside_one_quarter() {
    let conn = fixtures();
    let data = load(&conn, &[MACRO_PATH], Some(&["GDP"]), Some("2020M11"), Some("2020M12"))
        .await
        .unwrap();
    let t = single(&data);
    assert_eq!(labels(t), ["2020Q4"]);
    assert_eq!(t.get(&q("2020Q4"), "GDP"), Some(99.3));
    assert_eq!(
        data.ranges["macro"]["GDP"],
        PeriodRange::new(Some(q("2020Q4")), Some(q("2020Q4")))
    );
}

#[tokio::test]
async fn monthly_end_bound_keeps_its_quarter() {
    let conn = fixtures();
    let data = load(&conn, &[MACRO_PATH], Some(&["GDP"]), Some("2020"), Some("2020M08"))
        .await
        .unwrap();
    let t = single(&data);
    assert_eq!(labels(t), ["2020Q1", "2020Q2", "2020Q3"]);
    assert_eq!(t.get(&q("2020Q3"), "GDP"), Some(96.9));
    assert_eq!(
        data.ranges["macro"]["GDP"],
        PeriodRange::new(Some(q("2020Q1")), Some(q("2020Q3")))
    );
}

#[tokio::test]
async fn month_and_year_in_same_quarter_are_ordered() {
    let conn = fixtures();
    let data = load(&conn, &[MACRO_PATH], Some(&["GDP"]), Some("2020M11"), Some("2020"))
        .await
        .unwrap();
    assert_eq!(labels(single(&data)), ["2020Q4"]);
}

#[tokio::test]
async fn reversed_bounds_fail_before_opening() {
    let conn = fixtures();
    let err = load(&conn, &[MACRO_PATH], None, Some("2021"), Some("2020"))
        .await
        .unwrap_err();
    assert!(matches!(err, fameframe::FameError::DateOrder { .. }));
    assert_eq!(conn.probe(MACRO_PATH).unwrap().opens(), 0);
}
