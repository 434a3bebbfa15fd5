// File: crates/scrub-core/src/chart.rs
// Summary: Chart engine: event entry points and the per-frame render model.

use crate::popup::{self, MeasureText, PopupEntry, PopupLayout};
use crate::scale::{self, AxisScaler};
use crate::selector::{SelectorController, SelectorRects};
use crate::series::SeriesStore;
use crate::theme::{Palette, PaletteFade, Theme};
use crate::types::{
    AXIS_LABEL_FONT, BOTTOM_LABEL_GAP, HORIZONTAL_MARGIN, MARGIN_8, PointerPhase, PREVIEW_MARGIN,
    Rgb,
};
use crate::view::Viewport;

/// One series' polyline in pixel space.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    pub series_id: u32,
    pub color: Rgb,
    pub points: Vec<(f32, f32)>,
}

/// A horizontal grid line with its left-axis label.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLine {
    pub y: f32,
    pub label: String,
}

/// A bottom time label positioned on the main chart.
#[derive(Clone, Debug, PartialEq)]
pub struct BottomLabel {
    pub x: f32,
    pub text: String,
}

/// Everything the renderer needs for one frame. Pure data and geometry.
#[derive(Clone, Debug)]
pub struct RenderModel {
    pub main_lines: Vec<Polyline>,
    pub preview_lines: Vec<Polyline>,
    pub grid: Vec<GridLine>,
    pub bottom_labels: Vec<BottomLabel>,
    pub selector: SelectorRects,
    pub popup: Option<PopupLayout>,
    pub palette: Palette,
    pub vertical_max: f32,
}

/// The chart viewport and interaction engine. Single-threaded; driven by the
/// host surface through discrete inputs (pointer, resize, toggle, tick) and
/// read back once per frame through [`ChartEngine::frame`].
pub struct ChartEngine {
    store: SeriesStore,
    viewport: Viewport,
    selector: SelectorController,
    scaler: AxisScaler,
    preview_scaler: AxisScaler,
    fade: PaletteFade,
    active_sample: Option<usize>,
    width: f32,
    main_height: f32,
    preview_height: f32,
}

impl ChartEngine {
    pub fn new(store: SeriesStore, theme: Theme) -> Self {
        Self {
            store,
            viewport: Viewport::new(),
            selector: SelectorController::new(1.0),
            scaler: AxisScaler::new(),
            preview_scaler: AxisScaler::new(),
            fade: PaletteFade::new(theme),
            active_sample: None,
            width: 0.0,
            main_height: 0.0,
            preview_height: 0.0,
        }
    }

    /// Adopt a new surface layout. Resets the view to the default zoom with
    /// the selector over the last quarter of the preview strip.
    pub fn resize(&mut self, width: f32, main_height: f32, preview_height: f32) {
        let first_layout = self.width == 0.0;
        self.width = width.max(1.0);
        self.main_height = main_height.max(1.0);
        self.preview_height = preview_height.max(1.0);

        self.viewport.resize(self.width, self.store.len());
        self.selector.reset(self.width, self.width / 4.0);

        let window_max = scale::window_max(&self.store, self.viewport.window());
        let full_max = scale::full_range_max(&self.store);
        if first_layout {
            self.scaler.snap(window_max);
            self.preview_scaler.snap(full_max);
        } else {
            self.scaler.retarget(window_max);
            self.preview_scaler.retarget(full_max);
        }
    }

    /// Flip one series on or off; both scales glide to their new maxima.
    /// Returns the previous enabled state, or `None` for an unknown id.
    pub fn toggle(&mut self, series_id: u32) -> Option<bool> {
        let was = self.store.toggle(series_id)?;
        self.scaler.retarget(scale::window_max(&self.store, self.viewport.window()));
        self.preview_scaler.retarget(scale::full_range_max(&self.store));
        Some(was)
    }

    /// Pointer event over the main chart: down/move place the popup, release
    /// (or anything else) discards it.
    pub fn pointer_chart(&mut self, x: f32, phase: PointerPhase) {
        match phase {
            PointerPhase::Down | PointerPhase::Move => {
                self.active_sample =
                    popup::locate(x, &self.viewport, MARGIN_8, self.store.len());
            }
            PointerPhase::Up => self.active_sample = None,
        }
    }

    /// Pointer event over the preview strip, driving the selector. An accepted
    /// move or resize re-windows the main chart and dismisses any popup.
    pub fn pointer_preview(&mut self, x: f32, phase: PointerPhase) {
        if let Some(range) = self.selector.on_pointer(x, phase) {
            self.viewport.apply_selector(range, self.store.len(), self.width);
            self.active_sample = None;
            self.scaler.retarget(scale::window_max(&self.store, self.viewport.window()));
        }
    }

    /// Advance every in-flight animation by `dt` elapsed units. Called once
    /// per frame by the host loop; nothing here sleeps or schedules.
    pub fn tick(&mut self, dt: f32) {
        self.scaler.tick(dt);
        self.preview_scaler.tick(dt);
        self.fade.tick(dt);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.fade.set_theme(theme);
    }

    pub fn theme(&self) -> Theme {
        self.fade.theme()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn selector(&self) -> &SelectorController {
        &self.selector
    }

    pub fn store(&self) -> &SeriesStore {
        &self.store
    }

    pub fn vertical_max(&self) -> f32 {
        self.scaler.current()
    }

    /// The popup payload for the active touch, one entry per enabled series.
    /// Rebuilt from scratch on every call; empty when no touch is active or
    /// every series is disabled.
    pub fn popup_entries(&self) -> Vec<PopupEntry> {
        match self.active_sample {
            Some(index) => popup::build(index, &self.store, &self.viewport),
            None => Vec::new(),
        }
    }

    /// Assemble the frame. `metrics` supplies per-string text measurements;
    /// the engine itself owns no fonts and draws nothing.
    pub fn frame(&self, metrics: &dyn MeasureText) -> RenderModel {
        let palette = self.fade.current();
        let v_max = self.scaler.current();

        RenderModel {
            main_lines: self.main_lines(v_max),
            preview_lines: self.preview_lines(),
            grid: self.grid_lines(v_max),
            bottom_labels: self.bottom_labels(metrics),
            selector: self.selector.rects(self.preview_height),
            popup: self.popup_layout(metrics, v_max, &palette),
            palette,
            vertical_max: v_max,
        }
    }

    fn main_lines(&self, v_max: f32) -> Vec<Polyline> {
        let y_step = self.main_height / v_max.max(1.0);
        let len = self.store.len();
        self.store
            .enabled()
            .map(|series| {
                let mut points = Vec::with_capacity(self.viewport.visible_count);
                for x_index in 0..self.viewport.visible_count {
                    let data_index = x_index + self.viewport.start_index;
                    if data_index >= len {
                        continue;
                    }
                    let x = HORIZONTAL_MARGIN + x_index as f32 * self.viewport.step_x;
                    let y = self.main_height - series.values[data_index] as f32 * y_step;
                    points.push((x, y));
                }
                Polyline { series_id: series.id, color: series.color, points }
            })
            .collect()
    }

    fn preview_lines(&self) -> Vec<Polyline> {
        let len = self.store.len().max(1) as f32;
        let step = self.width / len - PREVIEW_MARGIN / len;
        let y_step = self.preview_height / self.preview_scaler.current().max(1.0);
        self.store
            .enabled()
            .map(|series| {
                let points = series
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| {
                        let x = PREVIEW_MARGIN + i as f32 * step;
                        let y = (self.preview_height - v as f32 * y_step) + PREVIEW_MARGIN;
                        (x, y)
                    })
                    .collect();
                Polyline { series_id: series.id, color: series.color, points }
            })
            .collect()
    }

    fn grid_lines(&self, v_max: f32) -> Vec<GridLine> {
        let grid_max = (v_max.round() as i64).max(1);
        let y_step = self.main_height / grid_max as f32;
        scale::left_labels(grid_max)
            .into_iter()
            .map(|(row, label)| GridLine { y: row as f32 * y_step, label })
            .collect()
    }

    fn bottom_labels(&self, metrics: &dyn MeasureText) -> Vec<BottomLabel> {
        let longest = self
            .store
            .labels()
            .iter()
            .map(|l| metrics.measure(&l.short, AXIS_LABEL_FONT).0)
            .fold(0.0f32, f32::max);

        let mut out = Vec::new();
        let mut last_x = 0.0f32;
        for (index, label) in self.store.labels().iter().enumerate() {
            let x = (index as f32 - self.viewport.start_index as f32) * self.viewport.step_x;
            if x < 0.0 || x > self.width {
                continue;
            }
            // Skip labels packed tighter than the minimum gap.
            if last_x != 0.0 && x - last_x < BOTTOM_LABEL_GAP {
                continue;
            }
            out.push(BottomLabel { x, text: label.short.clone() });
            last_x = x + longest;
        }
        out
    }

    fn popup_layout(
        &self,
        metrics: &dyn MeasureText,
        v_max: f32,
        palette: &Palette,
    ) -> Option<PopupLayout> {
        let index = self.active_sample?;
        let entries = popup::build(index, &self.store, &self.viewport);
        let full_label = &self.store.labels().get(index)?.full;
        popup::layout(
            &entries,
            full_label,
            metrics,
            self.width,
            self.main_height,
            v_max,
            palette.popup_header_text,
        )
    }
}
