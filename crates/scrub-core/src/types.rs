// File: crates/scrub-core/src/types.rs
// Summary: Shared types and constants (margins, grip sizes, animation durations, colors).

/// Vertical-axis floor so a near-empty or all-disabled window still renders a grid.
pub const MIN_VERTICAL_GRID: i64 = 4;

/// Default zoom factor applied on resize; the initial view shows roughly the
/// last quarter of the series.
pub const DEFAULT_ZOOM_FACTOR: f32 = 4.0;

/// Half-width of the selector grip band, in pixels, on each side of an edge.
pub const GRIP_HALF_WIDTH: f32 = 8.0;
/// Minimum selector width, in pixels. Resizes below this are ignored.
pub const MIN_SELECTOR_WIDTH: f32 = 50.0;
/// Vertical inset of the selector body inside the preview strip.
pub const SELECTOR_VERTICAL_PADDING: f32 = 2.0;

/// Left inset of the first plotted sample on the main chart.
pub const HORIZONTAL_MARGIN: f32 = 3.0;
/// Inset of the preview strip polylines.
pub const PREVIEW_MARGIN: f32 = 3.0;
/// Minimum pixel gap between consecutive bottom time labels.
pub const BOTTOM_LABEL_GAP: f32 = 10.0;

pub const MARGIN_2: f32 = 2.0;
pub const MARGIN_8: f32 = 8.0;
pub const MARGIN_12: f32 = 12.0;
pub const MARGIN_16: f32 = 16.0;

/// Popup font sizes in pixels: header date, per-series value, series name.
pub const POPUP_HEADER_FONT: f32 = 12.0;
pub const POPUP_VALUE_FONT: f32 = 14.0;
pub const POPUP_NAME_FONT: f32 = 10.0;
/// Bottom/left axis label font size in pixels.
pub const AXIS_LABEL_FONT: f32 = 12.0;

/// Vertical-scale transitions run for 500 time units.
pub const SCALE_ANIM_UNITS: f32 = 500.0;
/// Paint/color and theme transitions run for 250 time units.
pub const COLOR_ANIM_UNITS: f32 = 250.0;

/// Pointer event phase as delivered by the host surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// Packed RGB color. The engine never draws; it only hands colors to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex string (leading `#` optional).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Channel-wise linear interpolation toward `other`; `t` is clamped to [0, 1].
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let ch = |a: u8, b: u8| -> u8 {
            (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(ch(self.r, other.r), ch(self.g, other.g), ch(self.b, other.b))
    }
}
