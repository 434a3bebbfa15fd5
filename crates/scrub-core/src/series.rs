// File: crates/scrub-core/src/series.rs
// Summary: Series model and store; immutable values with toggleable enabled flags.

use thiserror::Error;
use tracing::{debug, warn};

use crate::types::Rgb;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataError {
    #[error("series '{name}' has {values} values but there are {labels} time labels")]
    LengthMismatch { name: String, values: usize, labels: usize },
    #[error("series '{name}' is empty")]
    EmptySeries { name: String },
    #[error("series '{name}' contains a negative value at index {index}")]
    NegativeValue { name: String, index: usize },
    #[error("chart has no time labels")]
    NoLabels,
}

/// One named, colored, time-ordered sequence of values.
/// `values` is immutable after load; only `enabled` is mutated.
#[derive(Clone, Debug)]
pub struct Series {
    pub id: u32,
    pub enabled: bool,
    pub values: Vec<i64>,
    pub name: String,
    pub color: Rgb,
}

impl Series {
    pub fn new(id: u32, name: impl Into<String>, color: Rgb, values: Vec<i64>) -> Self {
        Self { id, enabled: true, values, name: name.into(), color }
    }
}

/// One time label per sample index, shared by every series in a chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeLabel {
    pub short: String,
    pub full: String,
}

impl TimeLabel {
    pub fn new(short: impl Into<String>, full: impl Into<String>) -> Self {
        Self { short: short.into(), full: full.into() }
    }
}

/// Owns the parsed series and their enabled flags for one chart load.
#[derive(Debug)]
pub struct SeriesStore {
    series: Vec<Series>,
    labels: Vec<TimeLabel>,
}

impl SeriesStore {
    /// Validate and take ownership of a chart's series and labels.
    /// Fails without building a partial store.
    pub fn load(series: Vec<Series>, labels: Vec<TimeLabel>) -> Result<Self, DataError> {
        if labels.is_empty() {
            return Err(DataError::NoLabels);
        }
        for s in &series {
            if s.values.is_empty() {
                return Err(DataError::EmptySeries { name: s.name.clone() });
            }
            if s.values.len() != labels.len() {
                return Err(DataError::LengthMismatch {
                    name: s.name.clone(),
                    values: s.values.len(),
                    labels: labels.len(),
                });
            }
            if let Some(index) = s.values.iter().position(|v| *v < 0) {
                return Err(DataError::NegativeValue { name: s.name.clone(), index });
            }
        }
        debug!(series = series.len(), samples = labels.len(), "chart data loaded");
        Ok(Self { series, labels })
    }

    /// Flip a series' enabled flag; returns the previous state, or `None` for
    /// an unknown id.
    pub fn toggle(&mut self, id: u32) -> Option<bool> {
        match self.series.iter_mut().find(|s| s.id == id) {
            Some(s) => {
                let was = s.enabled;
                s.enabled = !was;
                debug!(id, enabled = s.enabled, "series toggled");
                Some(was)
            }
            None => {
                warn!(id, "toggle for unknown series id");
                None
            }
        }
    }

    /// Restartable iterator over the enabled series, in load order.
    pub fn enabled(&self) -> impl Iterator<Item = &Series> {
        self.series.iter().filter(|s| s.enabled)
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn labels(&self) -> &[TimeLabel] {
        &self.labels
    }

    /// Shared sample count (every series matches the label count).
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
