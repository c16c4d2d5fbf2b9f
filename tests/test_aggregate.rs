//! Pivot tests: sorting, series alignment, ragged data, forced duplicates.

mod common;

use http_status_history::aggregate::pivot;
use http_status_history::config;
use http_status_history::store::append;
use http_status_history::{DateEntry, History, Palette, StatusHistoryError};

fn history_of(days: Vec<(&str, Vec<(&str, &str)>)>) -> History {
    days.into_iter().fold(History::new(), |history, (date, pairs)| {
        append(&history, date, common::records(&pairs), true).0
    })
}

// ---------------------------------------------------------------------------
// Basic pivot
// ---------------------------------------------------------------------------

#[test]
fn two_days_pivot_into_series_per_code() {
    let history = history_of(vec![
        ("2014-12-10", vec![("7", "200"), ("3", "204")]),
        ("2014-12-11", vec![("9", "200"), ("1", "204")]),
    ]);

    let chart = pivot(history.entries(), &Palette::default()).unwrap();

    assert_eq!(chart.categories, vec!["2014-12-10", "2014-12-11"]);
    assert_eq!(chart.series.len(), 2);
    assert_eq!(chart.series_for("200").unwrap().points, vec![7, 9]);
    assert_eq!(chart.series_for("204").unwrap().points, vec![3, 1]);
}

#[test]
fn categories_are_sorted_regardless_of_append_order() {
    let history = history_of(vec![
        ("2014-12-13", vec![("3", "200")]),
        ("2014-12-10", vec![("7", "200")]),
        ("2014-12-11", vec![("9", "200")]),
    ]);

    let chart = pivot(history.entries(), &Palette::default()).unwrap();

    assert_eq!(chart.categories, vec!["2014-12-10", "2014-12-11", "2014-12-13"]);
    assert_eq!(chart.series_for("200").unwrap().points, vec![7, 9, 3]);
}

#[test]
fn empty_history_gives_empty_chart() {
    let chart = pivot(&[], &Palette::default()).unwrap();
    assert!(chart.categories.is_empty());
    assert!(chart.series.is_empty());
}

#[test]
fn series_follow_first_seen_order() {
    let history = history_of(vec![
        ("20141211", vec![("1", "500"), ("2", "200")]),
        ("20141210", vec![("3", "404"), ("4", "200")]),
    ]);

    let chart = pivot(history.entries(), &Palette::default()).unwrap();
    let codes: Vec<_> = chart.series.iter().map(|s| s.code.as_str()).collect();

    // 20141210 sorts first, so its codes are seen first.
    assert_eq!(codes, vec!["404", "200", "500"]);
}

#[test]
fn pivot_is_deterministic() {
    let history = history_of(vec![
        ("20141211", vec![("1", "500"), ("2", "200")]),
        ("20141210", vec![("3", "404"), ("4", "200")]),
    ]);

    let a = pivot(history.entries(), &Palette::default()).unwrap();
    let b = pivot(history.entries(), &Palette::default()).unwrap();
    assert_eq!(a, b);
}

// ---------------------------------------------------------------------------
// Ragged and duplicated data
// ---------------------------------------------------------------------------

#[test]
fn missing_code_leaves_series_short() {
    let history = history_of(vec![
        ("20141210", vec![("7", "200"), ("3", "404")]),
        ("20141211", vec![("9", "200")]),
        ("20141212", vec![("5", "200"), ("2", "404")]),
    ]);

    let chart = pivot(history.entries(), &Palette::default()).unwrap();

    assert_eq!(chart.categories.len(), 3);
    assert_eq!(chart.series_for("200").unwrap().points, vec![7, 9, 5]);
    // No zero is inserted for 20141211.
    assert_eq!(chart.series_for("404").unwrap().points, vec![3, 2]);
}

#[test]
fn forced_duplicate_repeats_category_and_points() {
    let history = history_of(vec![
        ("20141210", vec![("7", "200")]),
        ("20141211", vec![("9", "200")]),
        ("20141210", vec![("8", "200")]),
    ]);

    let chart = pivot(history.entries(), &Palette::default()).unwrap();

    assert_eq!(chart.categories, vec!["20141210", "20141210", "20141211"]);
    // Stable sort keeps the original entry ahead of the forced one.
    assert_eq!(chart.series_for("200").unwrap().points, vec![7, 8, 9]);
}

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

#[test]
fn known_codes_use_palette_colors() {
    let history = history_of(vec![("20141210", vec![("7", "200"), ("1", "502")])]);
    let chart = pivot(history.entries(), &Palette::default()).unwrap();

    assert_eq!(chart.series_for("200").unwrap().color, "#6FB665");
    assert_eq!(chart.series_for("502").unwrap().color, "#A81E03");
}

#[test]
fn unknown_code_gets_default_color() {
    let history = history_of(vec![("20141210", vec![("1", "418")])]);
    let chart = pivot(history.entries(), &Palette::default()).unwrap();

    let series = chart.series_for("418").unwrap();
    assert_eq!(series.color, config::DEFAULT_COLOR);
    assert_eq!(series.points, vec![1]);
}

#[test]
fn injected_palette_overrides_defaults() {
    let palette = Palette::empty("#000").with("200", "#123456");
    let history = history_of(vec![("20141210", vec![("7", "200"), ("1", "204")])]);

    let chart = pivot(history.entries(), &palette).unwrap();

    assert_eq!(chart.series_for("200").unwrap().color, "#123456");
    assert_eq!(chart.series_for("204").unwrap().color, "#000");
}

// ---------------------------------------------------------------------------
// Counts
// ---------------------------------------------------------------------------

#[test]
fn non_numeric_count_is_rejected() {
    let entries = vec![DateEntry::new("20141210", common::records(&[("lots", "200")]))];

    match pivot(&entries, &Palette::default()).unwrap_err() {
        StatusHistoryError::InvalidCount { date, code, count } => {
            assert_eq!(date, "20141210");
            assert_eq!(code, "200");
            assert_eq!(count, "lots");
        }
        other => panic!("expected InvalidCount, got {other:?}"),
    }
}

#[test]
fn negative_count_is_rejected() {
    let entries = vec![DateEntry::new("20141210", common::records(&[("-1", "200")]))];
    assert!(pivot(&entries, &Palette::default()).is_err());
}

#[test]
fn zero_padded_count_parses() {
    let entries = vec![DateEntry::new("20141210", common::records(&[("007", "200")]))];
    let chart = pivot(&entries, &Palette::default()).unwrap();
    assert_eq!(chart.series[0].points, vec![7]);
}
