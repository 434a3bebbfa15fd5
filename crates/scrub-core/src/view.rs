// File: crates/scrub-core/src/view.rs
// Summary: Horizontal window of the main chart; resize and selector-driven pan/zoom.

use crate::selector::SelectorRange;
use crate::types::DEFAULT_ZOOM_FACTOR;

/// The contiguous visible sub-range of sample indices.
/// `start_index + visible_count` may run past the series length only at the
/// trailing edge; readers clamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub start_index: usize,
    pub visible_count: usize,
}

/// Main-chart viewport: the window plus the pixel step between samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub start_index: usize,
    pub visible_count: usize,
    pub step_x: f32,
    pub pixel_width: f32,
}

impl Viewport {
    pub fn new() -> Self {
        Self { start_index: 0, visible_count: 1, step_x: 1.0, pixel_width: 0.0 }
    }

    pub fn window(&self) -> Window {
        Window { start_index: self.start_index, visible_count: self.visible_count }
    }

    /// Recompute for a new surface width; defaults to the most recent window
    /// at the default zoom (roughly the last quarter of the series).
    pub fn resize(&mut self, pixel_width: f32, total_samples: usize) {
        let width = pixel_width.max(1.0);
        let total = total_samples.max(1);
        self.pixel_width = width;
        self.step_x = (width / total as f32) * DEFAULT_ZOOM_FACTOR;
        self.visible_count = ((width / self.step_x) as usize + 1).clamp(1, total);
        self.start_index = total.saturating_sub(self.visible_count);
    }

    /// Map a selector range over the preview strip onto the main-chart window.
    /// The selector width drives zoom inversely; its position drives the pan.
    pub fn apply_selector(&mut self, sel: SelectorRange, total_samples: usize, pixel_width: f32) {
        let width = pixel_width.max(1.0);
        let total = total_samples.max(1);
        let ratio = width / sel.width.max(1.0);
        self.pixel_width = width;
        self.step_x = (width / total as f32) * ratio;
        self.visible_count = ((width / self.step_x) as usize + 1).clamp(1, total);
        self.start_index = ((sel.start / self.step_x) * ratio) as usize;
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}
