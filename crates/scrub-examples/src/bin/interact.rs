// File: crates/scrub-examples/src/bin/interact.rs
// Summary: Minimal headless example that loads chart data, replays an
// interaction script, and prints the resulting render model.

use anyhow::{Context, Result};
use scrub_core::chart::ChartEngine;
use scrub_core::popup::MeasureText;
use scrub_core::theme::Theme;
use scrub_core::types::PointerPhase;

const CHART_JSON: &str = r##"[
  {
    "columns": [
      ["x", 1542412800000, 1542499200000, 1542585600000, 1542672000000,
            1542758400000, 1542844800000, 1542931200000, 1543017600000,
            1543104000000, 1543190400000, 1543276800000, 1543363200000],
      ["y0", 37, 20, 32, 39, 32, 35, 19, 65, 36, 62, 113, 69],
      ["y1", 22, 12, 30, 40, 33, 23, 18, 41, 45, 69, 57, 61]
    ],
    "types": { "y0": "line", "y1": "line", "x": "x" },
    "names": { "y0": "Joined", "y1": "Left" },
    "colors": { "y0": "#3DC23F", "y1": "#F34C44" }
  }
]"##;

/// Crude text metrics so the example needs no font stack.
struct ApproxMetrics;

impl MeasureText for ApproxMetrics {
    fn measure(&self, text: &str, font_px: f32) -> (f32, f32) {
        (text.len() as f32 * font_px * 0.6, font_px)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let mut charts = scrub_core::load_charts(CHART_JSON).context("parse chart data")?;
    let store = charts.pop().context("no charts in input")?;
    let mut engine = ChartEngine::new(store, Theme::Light);

    // Lay out a 600x400 surface with a 70 px preview strip.
    engine.resize(600.0, 330.0, 70.0);

    // Drag the selector body left by 100 px, in a few steps.
    engine.pointer_preview(500.0, PointerPhase::Down);
    for step in 1..=4 {
        engine.pointer_preview(500.0 - step as f32 * 25.0, PointerPhase::Move);
        engine.tick(16.0);
    }
    engine.pointer_preview(400.0, PointerPhase::Up);

    // Touch the main chart to raise the popup.
    engine.pointer_chart(220.0, PointerPhase::Down);

    let model = engine.frame(&ApproxMetrics);
    println!("vertical max: {:.1}", model.vertical_max);
    println!(
        "window: start {} visible {} step {:.1}px",
        engine.viewport().start_index,
        engine.viewport().visible_count,
        engine.viewport().step_x
    );
    for line in &model.main_lines {
        println!("series {}: {} visible points", line.series_id, line.points.len());
    }
    println!("grid rows: {}", model.grid.len());
    println!("bottom labels: {}", model.bottom_labels.len());
    if let Some(popup) = &model.popup {
        println!("popup '{}' at x {:.1}", popup.header.text, popup.line_x);
        for item in &popup.items {
            println!("  {} @ ({:.1}, {:.1})", item.text, item.x, item.y);
        }
    }

    Ok(())
}
