//! Bar chart of adapter percentage by sample.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontTransform;

use super::{backend_for, BackendKind, ChartError};
use crate::data::AdapterReport;

/// Bar width in x-axis units; each bar starts at its integer position.
pub const BAR_WIDTH: f64 = 0.25;

/// Wide canvas so large sample sets stay legible.
const CANVAS: (u32, u32) = (2000, 1000);
const TITLE_FONT_PX: i32 = 36;
const AXIS_FONT_PX: i32 = 24;
const TICK_FONT_PX: i32 = 12;

/// Data-derived geometry of the bar chart: one category and one height per
/// report row, in row order.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartSpec {
    pub categories: Vec<String>,
    pub heights: Vec<f64>,
}

impl BarChartSpec {
    pub fn from_report(report: &AdapterReport) -> Self {
        Self {
            categories: report.samples.iter().map(|s| s.sample_id.clone()).collect(),
            heights: report.adapter_percentages(),
        }
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Render the bar chart for `report` to `path`.
pub fn render(report: &AdapterReport, set_name: &str, path: &Path) -> Result<(), ChartError> {
    let spec = BarChartSpec::from_report(report);
    if spec.is_empty() {
        return Err(ChartError::EmptyReport);
    }
    let title = format!("Adapter content by sample from {set_name}");

    match backend_for(path) {
        BackendKind::Svg => draw(SVGBackend::new(path, CANVAS).into_drawing_area(), &spec, &title),
        BackendKind::Bitmap => draw(
            BitMapBackend::new(path, CANVAS).into_drawing_area(),
            &spec,
            &title,
        ),
    }
}

fn draw<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    spec: &BarChartSpec,
    title: &str,
) -> Result<(), ChartError> {
    root.fill(&WHITE).map_err(ChartError::render)?;

    let n = spec.len();
    // Keep a sane axis even when every height is 0 or NaN.
    let y_max = spec
        .heights
        .iter()
        .copied()
        .fold(0.0f64, f64::max)
        .max(1.0)
        * 1.05;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", TITLE_FONT_PX))
        .margin(24)
        .x_label_area_size(170)
        .y_label_area_size(90)
        .build_cartesian_2d(0f64..n as f64, 0f64..y_max)
        .map_err(ChartError::render)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_label_formatter(&|_| String::new())
        .x_desc("SampleID")
        .y_desc("Adapter content (%)")
        .axis_desc_style(("sans-serif", AXIS_FONT_PX))
        .label_style(("sans-serif", 16))
        .draw()
        .map_err(ChartError::render)?;

    chart
        .draw_series(spec.heights.iter().enumerate().map(|(i, &height)| {
            Rectangle::new(
                [(i as f64, 0.0), (i as f64 + BAR_WIDTH, height)],
                BLACK.filled(),
            )
        }))
        .map_err(ChartError::render)?;

    // Category labels rotated vertically under the bar midpoints; the mesh
    // labels above are suppressed in favor of these.
    let (x_pixels, y_pixels) = chart.plotting_area().get_pixel_range();
    let plot_width = (x_pixels.end - x_pixels.start) as f64;
    let baseline = y_pixels.end;
    let label_font = ("sans-serif", TICK_FONT_PX)
        .into_font()
        .transform(FontTransform::Rotate90);
    for (i, category) in spec.categories.iter().enumerate() {
        let fraction = (i as f64 + BAR_WIDTH / 2.0) / n as f64;
        let x = x_pixels.start + (fraction * plot_width).round() as i32;
        root.draw(&Text::new(
            category.as_str(),
            (x + TICK_FONT_PX / 2, baseline + 8),
            label_font.clone(),
        ))
        .map_err(ChartError::render)?;
    }

    root.present().map_err(ChartError::render)?;
    Ok(())
}
