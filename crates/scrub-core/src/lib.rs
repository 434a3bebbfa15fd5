// File: crates/scrub-core/src/lib.rs
// Summary: Core library entry point; exports the chart viewport and interaction engine.

pub mod animate;
pub mod chart;
pub mod geometry;
pub mod parse;
pub mod popup;
pub mod scale;
pub mod selector;
pub mod series;
pub mod theme;
pub mod types;
pub mod view;

pub use chart::{ChartEngine, RenderModel};
pub use parse::{load_chart, load_charts, ParseError};
pub use popup::{MeasureText, PopupEntry, PopupLayout};
pub use scale::AxisScaler;
pub use selector::{DragState, SelectorController, SelectorRange};
pub use series::{DataError, Series, SeriesStore, TimeLabel};
pub use theme::{Palette, Theme};
pub use types::{PointerPhase, Rgb};
pub use view::{Viewport, Window};
