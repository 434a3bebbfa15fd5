// File: crates/scrub-core/tests/scale.rs
// Purpose: Validate windowed vertical maxima, the label module, and scale animation.

use scrub_core::scale::{full_range_max, left_labels, left_labels_module, window_max, AxisScaler};
use scrub_core::series::{Series, SeriesStore, TimeLabel};
use scrub_core::types::{Rgb, SCALE_ANIM_UNITS};
use scrub_core::view::Window;

fn labels(n: usize) -> Vec<TimeLabel> {
    (0..n).map(|i| TimeLabel::new(format!("d{i}"), format!("day {i}"))).collect()
}

fn two_series_store() -> SeriesStore {
    // A climbs 0, 10, .. 290; B sits at a constant 50.
    let a = Series::new(0, "A", Rgb::new(61, 194, 63), (0..30).map(|i| i * 10).collect());
    let b = Series::new(1, "B", Rgb::new(244, 67, 54), vec![50; 30]);
    SeriesStore::load(vec![a, b], labels(30)).unwrap()
}

#[test]
fn window_max_scans_visible_range_only() {
    let store = two_series_store();
    // Last-quarter window: to-index clamps at len-1, so [22, 29) => max 280.
    assert_eq!(window_max(&store, Window { start_index: 22, visible_count: 8 }), 280);
    // An early window sees only B's constant 50.
    assert_eq!(window_max(&store, Window { start_index: 0, visible_count: 6 }), 50);
}

#[test]
fn window_max_is_floored_at_min_grid() {
    let a = Series::new(0, "tiny", Rgb::new(0, 0, 0), vec![0, 1, 2, 1]);
    let store = SeriesStore::load(vec![a], labels(4)).unwrap();
    for start in 0..4 {
        let w = Window { start_index: start, visible_count: 2 };
        assert!(window_max(&store, w) >= 4);
    }
}

#[test]
fn disabled_series_are_ignored() {
    let mut store = two_series_store();
    store.toggle(0); // A off
    assert_eq!(window_max(&store, Window { start_index: 22, visible_count: 8 }), 50);
    store.toggle(1); // everything off => minimum grid
    assert_eq!(window_max(&store, Window { start_index: 22, visible_count: 8 }), 4);
    assert_eq!(full_range_max(&store), 4);
}

#[test]
fn oversized_window_is_clamped_to_len() {
    let store = two_series_store();
    let max = window_max(&store, Window { start_index: 0, visible_count: 500 });
    // to-index clamps at len-1, so the last sample (290) stays out of range.
    assert_eq!(max, 280);
}

#[test]
fn toggle_off_and_on_restores_prior_scale() {
    let mut store = two_series_store();
    let window = Window { start_index: 22, visible_count: 8 };
    let prior = window_max(&store, window);

    let mut scaler = AxisScaler::new();
    scaler.snap(prior);

    store.toggle(0);
    scaler.retarget(window_max(&store, window));
    scaler.tick(SCALE_ANIM_UNITS);
    assert_eq!(scaler.current(), 50.0);

    store.toggle(0);
    scaler.retarget(window_max(&store, window));
    scaler.tick(SCALE_ANIM_UNITS);
    assert_eq!(scaler.current(), prior as f32);
}

#[test]
fn scale_transition_is_gradual_and_settles_exactly() {
    let mut scaler = AxisScaler::new();
    scaler.snap(4);
    scaler.retarget(100);
    assert!(!scaler.is_settled());

    scaler.tick(SCALE_ANIM_UNITS / 2.0);
    let mid = scaler.current();
    assert!(mid > 4.0 && mid < 100.0, "midpoint {mid} should be in flight");

    scaler.tick(SCALE_ANIM_UNITS / 2.0);
    assert!(scaler.is_settled());
    assert_eq!(scaler.current(), 100.0);
}

#[test]
fn retarget_in_flight_continues_from_current_value() {
    let mut scaler = AxisScaler::new();
    scaler.snap(4);
    scaler.retarget(100);
    scaler.tick(SCALE_ANIM_UNITS / 2.0);
    let before = scaler.current();

    scaler.retarget(10);
    // No snap: the new transition starts exactly where the old one was.
    assert!((scaler.current() - before).abs() < 1e-4);

    scaler.tick(SCALE_ANIM_UNITS);
    assert_eq!(scaler.current(), 10.0);
}

#[test]
fn label_module_matches_shipped_formula() {
    assert_eq!(left_labels_module(4), 1);
    assert_eq!(left_labels_module(9), 1);
    assert_eq!(left_labels_module(10), 2);
    assert_eq!(left_labels_module(15), 2); // uneven gaps, kept for compatibility
    assert_eq!(left_labels_module(100), 20);
    assert_eq!(left_labels_module(280), 56);
}

#[test]
fn left_labels_count_down_from_max() {
    let rows = left_labels(8);
    assert_eq!(rows.len(), 8);
    assert_eq!(rows.first().unwrap(), &(8, "0".to_string()));
    assert_eq!(rows.last().unwrap(), &(1, "7".to_string()));

    let rows = left_labels(100);
    assert_eq!(rows.len(), 5); // module 20: rows 100, 80, 60, 40, 20
    assert_eq!(rows[0], (100, "0".to_string()));
    assert_eq!(rows[4], (20, "80".to_string()));
}
