// File: crates/scrub-core/src/popup.rs
// Summary: Pixel-to-sample hit testing and the touch popup payload/layout.

use crate::geometry::RectF;
use crate::series::SeriesStore;
use crate::types::{
    MARGIN_12, MARGIN_16, MARGIN_2, MARGIN_8, POPUP_HEADER_FONT, POPUP_NAME_FONT,
    POPUP_VALUE_FONT, Rgb,
};
use crate::view::Viewport;

/// Text metrics supplied by the renderer: width and height of `text` drawn at
/// `font_px`. The engine owns no fonts.
pub trait MeasureText {
    fn measure(&self, text: &str, font_px: f32) -> (f32, f32);
}

/// One popup row source: the value of one enabled series at the hit sample.
/// `pixel_x` is the sample column's rendered x, never the raw touch x.
#[derive(Clone, Debug, PartialEq)]
pub struct PopupEntry {
    pub sample_index: usize,
    pub series_id: u32,
    pub value: i64,
    pub pixel_x: f32,
    pub series_name: String,
    pub color: Rgb,
}

/// Map a touch x to the nearest sample index, or `None` when the touch lands
/// outside the data range (suppresses the popup, not an error).
pub fn locate(
    pixel_x: f32,
    viewport: &Viewport,
    margin_left: f32,
    total_samples: usize,
) -> Option<usize> {
    if total_samples == 0 || viewport.step_x <= 0.0 {
        return None;
    }
    // Keep the popup line fully on-screen.
    let x = pixel_x.clamp(margin_left, (viewport.pixel_width - margin_left).max(margin_left));
    let index = viewport.start_index + (x / viewport.step_x) as usize;
    if index < total_samples {
        Some(index)
    } else {
        None
    }
}

/// Assemble one entry per enabled series for the hit sample, all sharing the
/// sample column's x position.
pub fn build(sample_index: usize, store: &SeriesStore, viewport: &Viewport) -> Vec<PopupEntry> {
    let column_x = (sample_index.saturating_sub(viewport.start_index)) as f32 * viewport.step_x;
    store
        .enabled()
        .filter_map(|s| {
            s.values.get(sample_index).map(|&value| PopupEntry {
                sample_index,
                series_id: s.id,
                value,
                pixel_x: column_x,
                series_name: s.name.clone(),
                color: s.color,
            })
        })
        .collect()
}

/// Human-readable value: `1.2K` above a thousand, `1.2M` above a million.
pub fn format_value(value: i64) -> String {
    if value > 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value > 1_000 {
        format!("{:.1}K", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}

/// A positioned text run inside the popup box.
#[derive(Clone, Debug, PartialEq)]
pub struct PopupText {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub font_px: f32,
    pub color: Rgb,
}

/// Marker dot drawn on the touched sample column for one series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PopupDot {
    pub x: f32,
    pub y: f32,
    pub color: Rgb,
}

/// Fully positioned popup: box bounds, the vertical guide line, per-series
/// dots, and the header/value/name text runs. Pure geometry; nothing here
/// draws.
#[derive(Clone, Debug, PartialEq)]
pub struct PopupLayout {
    pub rect: RectF,
    pub line_x: f32,
    pub dots: Vec<PopupDot>,
    pub header: PopupText,
    pub items: Vec<PopupText>,
}

/// Compute the popup box and text positions from renderer-supplied metrics.
/// Placement prefers the right of the touched column, flips left when that
/// would overflow the chart's right edge, and finally clamps into the chart's
/// horizontal bounds. Entries stack two per row under the header.
pub fn layout(
    entries: &[PopupEntry],
    full_label: &str,
    metrics: &dyn MeasureText,
    chart_width: f32,
    chart_height: f32,
    vertical_max: f32,
    header_color: Rgb,
) -> Option<PopupLayout> {
    if entries.is_empty() {
        return None;
    }
    let anchor_x = entries[0].pixel_x;
    let y_step = chart_height / vertical_max.max(1.0);

    let (header_w, header_h) = metrics.measure(full_label, POPUP_HEADER_FONT);

    // Column width covers the widest value or name string.
    let mut col_width: f32 = 0.0;
    let mut value_h: f32 = 0.0;
    let mut name_h: f32 = 0.0;
    let values: Vec<String> = entries.iter().map(|e| format_value(e.value)).collect();
    for (entry, value) in entries.iter().zip(&values) {
        let (vw, vh) = metrics.measure(value, POPUP_VALUE_FONT);
        let (nw, nh) = metrics.measure(&entry.series_name, POPUP_NAME_FONT);
        col_width = col_width.max(vw).max(nw);
        value_h = value_h.max(vh);
        name_h = name_h.max(nh);
    }

    let columns = entries.len().min(2);
    let grid_width = col_width * columns as f32 + MARGIN_16 * (columns as f32 - 1.0);
    let inner_width = header_w.max(grid_width);
    let box_width = inner_width + MARGIN_8 * 2.0;

    let rows = entries.len().div_ceil(2);
    let row_height = value_h + MARGIN_2 + name_h;
    let box_height =
        MARGIN_8 + header_h + MARGIN_12 + row_height * rows as f32
            + MARGIN_12 * (rows as f32 - 1.0)
            + MARGIN_8;

    // Prefer the right of the column; flip left on overflow; then clamp.
    let mut start_x = anchor_x + MARGIN_16;
    if start_x + box_width + MARGIN_16 >= chart_width {
        start_x = anchor_x - MARGIN_16 - box_width;
    }
    if start_x < 0.0 {
        start_x = MARGIN_8;
    }
    if start_x + box_width > chart_width {
        start_x = (chart_width - box_width - MARGIN_8).max(0.0);
    }

    let start_y = MARGIN_8;
    let rect = RectF::from_ltwh(start_x, start_y, box_width, box_height);

    let dots = entries
        .iter()
        .map(|e| PopupDot {
            x: anchor_x,
            y: chart_height - e.value as f32 * y_step,
            color: e.color,
        })
        .collect();

    let header = PopupText {
        text: full_label.to_string(),
        x: start_x + MARGIN_8,
        y: start_y + MARGIN_8 + header_h,
        font_px: POPUP_HEADER_FONT,
        color: header_color,
    };

    let mut items = Vec::with_capacity(entries.len() * 2);
    let mut row_top = header.y + MARGIN_12;
    for (i, (entry, value)) in entries.iter().zip(&values).enumerate() {
        let col = i % 2;
        if col == 0 && i > 0 {
            row_top += row_height + MARGIN_12;
        }
        let x = start_x + MARGIN_8 + col as f32 * (col_width + MARGIN_16);
        items.push(PopupText {
            text: value.clone(),
            x,
            y: row_top + value_h,
            font_px: POPUP_VALUE_FONT,
            color: entry.color,
        });
        items.push(PopupText {
            text: entry.series_name.clone(),
            x,
            y: row_top + value_h + MARGIN_2 + name_h,
            font_px: POPUP_NAME_FONT,
            color: entry.color,
        });
    }

    Some(PopupLayout { rect, line_x: anchor_x, dots, header, items })
}
