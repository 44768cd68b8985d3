//! Density plot of adapter content across the sample set.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use super::{backend_for, BackendKind, ChartError};
use crate::data::AdapterReport;
use crate::stats::GaussianKde;

/// Fixed smoothing factor applied to the sample standard deviation.
pub const BANDWIDTH_FACTOR: f64 = 0.25;
/// Number of evaluation points across the percentage domain.
pub const GRID_POINTS: usize = 100;
/// Adapter content is a percentage, so the curve spans the full range.
pub const DOMAIN: (f64, f64) = (0.0, 100.0);

const CANVAS: (u32, u32) = (1000, 1000);
const TITLE_FONT_PX: i32 = 30;
const AXIS_FONT_PX: i32 = 22;

// matplotlib's default line color
const LINE_COLOR: RGBColor = RGBColor(31, 119, 180);

/// Evaluate the smoothed distribution of adapter percentages on the fixed
/// grid. Fails on degenerate input (fewer than two rows, zero variance, NaN).
pub fn curve(report: &AdapterReport) -> Result<Vec<(f64, f64)>, ChartError> {
    let values = report.adapter_percentages();
    let kde = GaussianKde::fit(&values, BANDWIDTH_FACTOR)?;
    Ok(kde.sample(DOMAIN.0, DOMAIN.1, GRID_POINTS))
}

/// Render the density plot for `report` to `path`.
pub fn render(report: &AdapterReport, set_name: &str, path: &Path) -> Result<(), ChartError> {
    let points = curve(report)?;
    let title = format!("Distribution of adapter content across {set_name}");

    match backend_for(path) {
        BackendKind::Svg => draw(
            SVGBackend::new(path, CANVAS).into_drawing_area(),
            &points,
            &title,
        ),
        BackendKind::Bitmap => draw(
            BitMapBackend::new(path, CANVAS).into_drawing_area(),
            &points,
            &title,
        ),
    }
}

fn draw<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    points: &[(f64, f64)],
    title: &str,
) -> Result<(), ChartError> {
    root.fill(&WHITE).map_err(ChartError::render)?;

    let mut y_max = points.iter().map(|&(_, y)| y).fold(0.0f64, f64::max) * 1.1;
    if y_max <= 0.0 {
        y_max = 1.0;
    }

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", TITLE_FONT_PX))
        .margin(24)
        .x_label_area_size(70)
        .y_label_area_size(90)
        .build_cartesian_2d(DOMAIN.0..DOMAIN.1, 0f64..y_max)
        .map_err(ChartError::render)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc("Percentage adapter content")
        .axis_desc_style(("sans-serif", AXIS_FONT_PX))
        .label_style(("sans-serif", 16))
        .draw()
        .map_err(ChartError::render)?;

    chart
        .draw_series(LineSeries::new(points.iter().copied(), &LINE_COLOR))
        .map_err(ChartError::render)?;

    root.present().map_err(ChartError::render)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SampleRecord;
    use crate::stats::KdeError;

    fn report(percents: &[f64]) -> AdapterReport {
        AdapterReport {
            samples: percents
                .iter()
                .enumerate()
                .map(|(i, &percent)| SampleRecord {
                    sample_id: format!("S{}", i + 1),
                    aux: [String::new(), String::new()],
                    adapter_percent: percent,
                })
                .collect(),
        }
    }

    #[test]
    fn curve_spans_the_domain_on_the_fixed_grid() {
        let points = curve(&report(&[5.0, 10.0, 7.5])).unwrap();
        assert_eq!(points.len(), GRID_POINTS);
        assert_eq!(points[0].0, DOMAIN.0);
        assert!((points[GRID_POINTS - 1].0 - DOMAIN.1).abs() < 1e-9);
    }

    #[test]
    fn curve_peaks_inside_the_data_range() {
        let points = curve(&report(&[5.0, 10.0, 7.5])).unwrap();
        let peak = points
            .iter()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .copied()
            .unwrap();
        assert!(
            (5.0..=10.0).contains(&peak.0),
            "peak at {} outside 5-10",
            peak.0
        );
    }

    #[test]
    fn single_row_fails_density_estimation() {
        let err = curve(&report(&[5.0])).unwrap_err();
        assert!(matches!(
            err,
            ChartError::Kde(KdeError::TooFewObservations(1))
        ));
    }

    #[test]
    fn svg_output_contains_title() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("density.svg");
        render(&report(&[5.0, 10.0, 7.5]), "Test", &out).unwrap();

        let svg = std::fs::read_to_string(&out).unwrap();
        assert!(svg.contains("Distribution of adapter content across Test"));
        assert!(svg.contains("Percentage adapter content"));
    }
}
