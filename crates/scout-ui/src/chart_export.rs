//! PNG export of the category distribution chart.

use std::path::Path;

use chrono::{DateTime, Local};
use plotters::prelude::*;
use tracing::info;

use scout_core::error::{Result, ScoutError};

use crate::chart_view::ChartData;

/// Bar fill colour matching the on-screen chart accent.
const BAR_FILL: RGBColor = RGBColor(135, 206, 235);

/// Rendered image size in pixels.
const IMAGE_SIZE: (u32, u32) = (1000, 600);

/// Default chart export filename for the given timestamp:
/// `graph_<YYYYMMDD_HHMMSS>.png`.
pub fn default_graph_filename(now: DateTime<Local>) -> String {
    format!("graph_{}.png", now.format("%Y%m%d_%H%M%S"))
}

/// Render `data` as a vertical bar chart and write it to `path` as PNG.
///
/// X axis carries the category labels (rotated for readability), Y axis the
/// counts, and the caption embeds the chart label. Any backend failure,
/// including an unwritable path, surfaces as [`ScoutError::Chart`].
pub fn export_png(data: &ChartData, path: &Path) -> Result<()> {
    if data.bars.is_empty() {
        return Err(ScoutError::Chart("no categories to draw".to_string()));
    }

    let root = BitMapBackend::new(path, IMAGE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let max_count = data.bars.iter().map(|(_, count)| *count).max().unwrap_or(0);
    let y_max = max_count + (max_count / 10).max(1);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Job Distribution - {}", data.label),
            ("sans-serif", 28),
        )
        .margin(16)
        .x_label_area_size(140)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (0u32..data.bars.len() as u32).into_segmented(),
            0u64..y_max,
        )
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Category")
        .y_desc("Count")
        .x_labels(data.bars.len())
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(i) => data
                .bars
                .get(*i as usize)
                .map(|(category, _)| category.clone())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .x_label_style(
            ("sans-serif", 14)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BAR_FILL.filled())
                .margin(6)
                .data(
                    data.bars
                        .iter()
                        .enumerate()
                        .map(|(i, (_, count))| (i as u32, *count)),
                ),
        )
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    info!("Saved chart image to {}", path.display());
    Ok(())
}

fn chart_err(err: impl std::fmt::Display) -> ScoutError {
    ScoutError::Chart(err.to_string())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
