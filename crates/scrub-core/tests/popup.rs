// File: crates/scrub-core/tests/popup.rs
// Purpose: Validate hit testing, popup payload assembly, and box layout.

use scrub_core::popup::{self, MeasureText};
use scrub_core::series::{Series, SeriesStore, TimeLabel};
use scrub_core::types::Rgb;
use scrub_core::view::Viewport;

/// Deterministic stand-in for renderer text metrics.
struct FixedMetrics;

impl MeasureText for FixedMetrics {
    fn measure(&self, text: &str, font_px: f32) -> (f32, f32) {
        (text.len() as f32 * font_px * 0.6, font_px)
    }
}

fn store() -> SeriesStore {
    let labels = (0..30)
        .map(|i| TimeLabel::new(format!("d{i}"), format!("day {i}")))
        .collect();
    let a = Series::new(0, "Joined", Rgb::new(61, 194, 63), (0..30).map(|i| i * 10).collect());
    let b = Series::new(1, "Left", Rgb::new(244, 67, 54), vec![50; 30]);
    SeriesStore::load(vec![a, b], labels).unwrap()
}

fn viewport() -> Viewport {
    Viewport { start_index: 10, visible_count: 10, step_x: 10.0, pixel_width: 300.0 }
}

#[test]
fn locate_clamps_into_the_margin() {
    // A touch at x=0 clamps to the 8 px margin: 10 + floor(8/10) = 10.
    let hit = popup::locate(0.0, &viewport(), 8.0, 30);
    assert_eq!(hit, Some(10));
}

#[test]
fn locate_rejects_indices_past_the_data() {
    let vp = Viewport { start_index: 28, visible_count: 8, step_x: 10.0, pixel_width: 300.0 };
    // 28 + floor(95/10) = 37 is past the data; NoHit, not an error.
    assert_eq!(popup::locate(95.0, &vp, 8.0, 30), None);
    assert_eq!(popup::locate(10.0, &vp, 8.0, 30), Some(29));
}

#[test]
fn entries_align_to_the_sample_column() {
    let vp = viewport();
    let entries = popup::build(14, &store(), &vp);
    assert_eq!(entries.len(), 2);
    for e in &entries {
        assert_eq!(e.sample_index, 14);
        // The column's rendered x, never the raw touch x.
        assert_eq!(e.pixel_x, (14 - 10) as f32 * 10.0);
    }
    assert_eq!(entries[0].value, 140);
    assert_eq!(entries[1].value, 50);
}

#[test]
fn all_series_disabled_means_no_popup() {
    let mut s = store();
    s.toggle(0);
    s.toggle(1);
    let entries = popup::build(14, &s, &viewport());
    assert!(entries.is_empty());
    let layout =
        popup::layout(&entries, "day 14", &FixedMetrics, 300.0, 200.0, 4.0, Rgb::new(0, 0, 0));
    assert!(layout.is_none());
}

#[test]
fn value_formatting_uses_k_and_m_suffixes() {
    assert_eq!(popup::format_value(999), "999");
    assert_eq!(popup::format_value(1_000), "1000");
    assert_eq!(popup::format_value(1_500), "1.5K");
    assert_eq!(popup::format_value(2_500_000), "2.5M");
}

#[test]
fn layout_prefers_the_right_of_the_column() {
    let entries = popup::build(11, &store(), &viewport());
    let layout = popup::layout(
        &entries, "day 11", &FixedMetrics, 300.0, 200.0, 150.0, Rgb::new(0, 0, 0),
    )
    .unwrap();

    let anchor = entries[0].pixel_x;
    assert_eq!(layout.line_x, anchor);
    assert_eq!(layout.rect.left, anchor + 16.0);
    assert!(layout.rect.right < 300.0);
}

#[test]
fn layout_flips_left_near_the_right_edge() {
    let vp = Viewport { start_index: 0, visible_count: 30, step_x: 10.0, pixel_width: 300.0 };
    let entries = popup::build(28, &store(), &vp); // column at x=280
    let layout = popup::layout(
        &entries, "day 28", &FixedMetrics, 300.0, 200.0, 300.0, Rgb::new(0, 0, 0),
    )
    .unwrap();

    assert!(layout.rect.right <= 300.0, "box must stay inside the chart");
    assert!(layout.rect.left < entries[0].pixel_x);
}

#[test]
fn layout_stacks_entries_two_per_row() {
    let labels = (0..10)
        .map(|i| TimeLabel::new(format!("d{i}"), format!("day {i}")))
        .collect();
    let series = (0..4)
        .map(|id| Series::new(id, format!("s{id}"), Rgb::new(10 * id as u8, 0, 0), vec![5; 10]))
        .collect();
    let s = SeriesStore::load(series, labels).unwrap();
    let vp = Viewport { start_index: 0, visible_count: 10, step_x: 10.0, pixel_width: 300.0 };

    let entries = popup::build(3, &s, &vp);
    assert_eq!(entries.len(), 4);
    let layout =
        popup::layout(&entries, "day 3", &FixedMetrics, 300.0, 200.0, 10.0, Rgb::new(0, 0, 0))
            .unwrap();

    // Value and name run per entry.
    assert_eq!(layout.items.len(), 8);
    // Entries 0 and 1 share a row; entry 2 starts the second row lower down.
    let value_ys: Vec<f32> = layout.items.iter().step_by(2).map(|t| t.y).collect();
    assert_eq!(value_ys[0], value_ys[1]);
    assert!(value_ys[2] > value_ys[0]);
    assert_eq!(value_ys[2], value_ys[3]);
    // Columns alternate x positions.
    let value_xs: Vec<f32> = layout.items.iter().step_by(2).map(|t| t.x).collect();
    assert_eq!(value_xs[0], value_xs[2]);
    assert_eq!(value_xs[1], value_xs[3]);
    assert!(value_xs[1] > value_xs[0]);
    // One dot per enabled series on the touched column.
    assert_eq!(layout.dots.len(), 4);
}
