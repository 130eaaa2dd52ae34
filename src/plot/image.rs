//! Exported chart images via Plotters.
//!
//! The figure is a 3x2 grid: one row per metric, cumulative on the left,
//! daily deltas on the right, with the dataset's fixed color convention
//! (confirmed = blue, deaths = red, recovered = green).

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::domain::{CountrySeries, Metric};
use crate::error::AppError;

const FIGURE_SIZE: (u32, u32) = (1000, 1200);

fn metric_color(metric: Metric) -> RGBColor {
    match metric {
        Metric::Confirmed => BLUE,
        Metric::Deaths => RED,
        Metric::Recovered => GREEN,
    }
}

/// Write the chart grid to `path`, picking the backend from the extension.
pub fn write_chart(path: &Path, country: &str, series: &CountrySeries) -> Result<(), AppError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let drawn = match ext.as_deref() {
        Some("svg") => draw_grid(
            SVGBackend::new(path, FIGURE_SIZE).into_drawing_area(),
            country,
            series,
        ),
        Some("png" | "bmp" | "jpg" | "jpeg") => draw_grid(
            BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area(),
            country,
            series,
        ),
        _ => {
            return Err(AppError::config(format!(
                "Unsupported export extension for '{}' (expected png, bmp, jpg or svg).",
                path.display()
            )));
        }
    };

    drawn.map_err(|e| {
        AppError::config(format!(
            "Failed to write chart to '{}': {e}",
            path.display()
        ))
    })
}

fn draw_grid<DB>(
    root: DrawingArea<DB, Shift>,
    country: &str,
    series: &CountrySeries,
) -> Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let titled = root.titled(&format!("Covid-19 in {country}"), ("sans-serif", 32))?;
    let panels = titled.split_evenly((3, 2));

    for (row, metric) in Metric::ALL.into_iter().enumerate() {
        let cumulative: Vec<(f64, f64)> = series
            .cumulative(metric)
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v as f64))
            .collect();
        let daily: Vec<(f64, f64)> = series
            .daily(metric)
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v as f64))
            .collect();

        draw_panel(
            &panels[row * 2],
            &format!("{} (cumulative)", metric.display_name()),
            metric_color(metric),
            &cumulative,
        )?;
        draw_panel(
            &panels[row * 2 + 1],
            &format!("{} (daily)", metric.display_name()),
            metric_color(metric),
            &daily,
        )?;
    }

    root.present()?;
    Ok(())
}

fn draw_panel<DB>(
    area: &DrawingArea<DB, Shift>,
    caption: &str,
    color: RGBColor,
    points: &[(f64, f64)],
) -> Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let x_max = points.len().saturating_sub(1).max(1) as f64;

    let mut y_min = 0.0f64;
    let mut y_max = 1.0f64;
    for &(_, y) in points {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    let pad = (y_max - y_min) * 0.05;
    let (y_min, y_max) = (y_min - pad, y_max + pad);

    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 18))
        .margin(8)
        .x_label_area_size(28)
        .y_label_area_size(56)
        .build_cartesian_2d(0f64..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Day")
        .x_labels(6)
        .y_labels(5)
        .draw()?;

    chart.draw_series(LineSeries::new(points.iter().copied(), &color))?;
    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 2, color.filled())),
    )?;

    Ok(())
}
