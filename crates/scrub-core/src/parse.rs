// File: crates/scrub-core/src/parse.rs
// Summary: Loader for the chart-data JSON schema (columns/names/colors).

use chrono::DateTime;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::series::{DataError, Series, SeriesStore, TimeLabel};
use crate::types::Rgb;

const SHORT_DATE: &str = "%b %d";
const FULL_DATE: &str = "%a, %b %d";

#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("missing or malformed field: {0}")]
    MissingField(&'static str),
    #[error("column {0} is not an array headed by a string key")]
    BadColumn(usize),
    #[error("series '{key}' has no entry in '{table}'")]
    MissingSeriesMeta { key: String, table: &'static str },
    #[error("invalid color string {0:?}")]
    BadColor(String),
    #[error("invalid epoch-millisecond timestamp {0}")]
    BadTimestamp(i64),
    #[error(transparent)]
    Data(#[from] DataError),
}

/// Parse a JSON document holding an array of charts; each chart becomes a
/// validated [`SeriesStore`]. A failure in any chart builds nothing.
pub fn load_charts(json: &str) -> Result<Vec<SeriesStore>, ParseError> {
    let root: Value = serde_json::from_str(json)?;
    let charts = root.as_array().ok_or(ParseError::MissingField("top-level array"))?;
    let mut out = Vec::with_capacity(charts.len());
    for chart in charts {
        out.push(load_chart(chart)?);
    }
    debug!(charts = out.len(), "chart json parsed");
    Ok(out)
}

/// Parse one chart object: `columns` (first element of each column array is
/// its key; the `x` column carries epoch-millisecond timestamps), `names`,
/// and `colors` keyed by column.
pub fn load_chart(chart: &Value) -> Result<SeriesStore, ParseError> {
    let columns = chart
        .get("columns")
        .and_then(Value::as_array)
        .ok_or(ParseError::MissingField("columns"))?;
    let names = chart.get("names").ok_or(ParseError::MissingField("names"))?;
    let colors = chart.get("colors").ok_or(ParseError::MissingField("colors"))?;

    let mut labels: Vec<TimeLabel> = Vec::new();
    let mut series: Vec<Series> = Vec::new();

    for (index, column) in columns.iter().enumerate() {
        let cells = column.as_array().ok_or(ParseError::BadColumn(index))?;
        let key = cells
            .first()
            .and_then(Value::as_str)
            .ok_or(ParseError::BadColumn(index))?;

        if key == "x" {
            labels = cells[1..]
                .iter()
                .map(|cell| {
                    let millis = cell.as_i64().ok_or(ParseError::BadColumn(index))?;
                    time_label(millis)
                })
                .collect::<Result<_, _>>()?;
        } else {
            let name = names
                .get(key)
                .and_then(Value::as_str)
                .ok_or_else(|| ParseError::MissingSeriesMeta { key: key.into(), table: "names" })?;
            let color_str = colors
                .get(key)
                .and_then(Value::as_str)
                .ok_or_else(|| ParseError::MissingSeriesMeta { key: key.into(), table: "colors" })?;
            let color = Rgb::from_hex(color_str)
                .ok_or_else(|| ParseError::BadColor(color_str.into()))?;
            let values = cells[1..]
                .iter()
                .map(|cell| cell.as_i64().ok_or(ParseError::BadColumn(index)))
                .collect::<Result<Vec<_>, _>>()?;
            series.push(Series::new(series.len() as u32, name, color, values));
        }
    }

    Ok(SeriesStore::load(series, labels)?)
}

fn time_label(millis: i64) -> Result<TimeLabel, ParseError> {
    let date = DateTime::from_timestamp_millis(millis).ok_or(ParseError::BadTimestamp(millis))?;
    Ok(TimeLabel::new(
        date.format(SHORT_DATE).to_string(),
        date.format(FULL_DATE).to_string(),
    ))
}
