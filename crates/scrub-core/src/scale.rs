// File: crates/scrub-core/src/scale.rs
// Summary: Vertical-axis maximum over the visible window, with animated transitions.

use crate::animate::Animation;
use crate::series::SeriesStore;
use crate::types::{MIN_VERTICAL_GRID, SCALE_ANIM_UNITS};
use crate::view::Window;

/// Maximum value across enabled series within the visible window, floored at
/// the minimum grid value so an all-disabled window still renders a grid.
pub fn window_max(store: &SeriesStore, window: Window) -> i64 {
    let mut max = MIN_VERTICAL_GRID;
    for series in store.enabled() {
        let values = &series.values;
        let len = values.len();
        if len == 0 {
            continue;
        }
        let visible = window.visible_count.min(len);
        let mut start = window.start_index;
        let to = (start + visible).min(len - 1);
        if start >= to {
            start = to.saturating_sub(visible);
        }
        for &v in &values[start..to] {
            if v > max {
                max = v;
            }
        }
    }
    max
}

/// Maximum over the full series range (the preview strip ignores the window).
pub fn full_range_max(store: &SeriesStore) -> i64 {
    let mut max = MIN_VERTICAL_GRID;
    for series in store.enabled() {
        for &v in &series.values {
            if v > max {
                max = v;
            }
        }
    }
    max
}

/// Vertical scale with a smoothed transition between maxima. The renderer
/// reads [`AxisScaler::current`] each frame; targets change on toggle or pan
/// but the reported value never jumps.
pub struct AxisScaler {
    anim: Animation,
}

impl AxisScaler {
    pub fn new() -> Self {
        Self { anim: Animation::settled_at(MIN_VERTICAL_GRID as f32) }
    }

    /// Point the scale at a new maximum. A no-op when the target is unchanged;
    /// otherwise interpolates from the current (possibly mid-flight) value
    /// over the scale animation duration.
    pub fn retarget(&mut self, new_max: i64) {
        if new_max as f32 == self.anim.target() {
            return;
        }
        self.anim.start(new_max as f32, SCALE_ANIM_UNITS);
    }

    /// Adopt a maximum immediately, without a transition. Used for the first
    /// layout, where there is no prior scale to animate from.
    pub fn snap(&mut self, max: i64) {
        self.anim = Animation::settled_at(max as f32);
    }

    pub fn tick(&mut self, dt: f32) {
        self.anim.tick(dt);
    }

    /// The interpolated axis maximum for this frame.
    pub fn current(&self) -> f32 {
        self.anim.value()
    }

    /// The settled target maximum, used for label generation.
    pub fn target(&self) -> i64 {
        self.anim.target() as i64
    }

    pub fn is_settled(&self) -> bool {
        self.anim.is_settled()
    }
}

impl Default for AxisScaler {
    fn default() -> Self {
        Self::new()
    }
}

/// Left-label decimation module. Kept exactly as the shipped behavior, uneven
/// gaps included (e.g. max 15 yields module 2).
pub fn left_labels_module(max: i64) -> i64 {
    if max >= 10 {
        (max / 10) * 2
    } else {
        1
    }
}

/// Grid rows for the left axis: `(row, label)` pairs where `row` counts down
/// from `max` and the label shows the value at that line.
pub fn left_labels(max: i64) -> Vec<(i64, String)> {
    let module = left_labels_module(max);
    let mut out = Vec::new();
    for i in (1..=max).rev() {
        if i % module == 0 {
            out.push((i, (max - i).to_string()));
        }
    }
    out
}
