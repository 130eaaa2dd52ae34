//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - a quick visual read of the curves without leaving the terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - sample points: `o`
//! - connecting line segments: `-`

use crate::domain::{CountrySeries, Metric};

/// Render the six terminal panels: per metric, cumulative then daily.
pub fn render_ascii_panels(series: &CountrySeries, width: usize, height: usize) -> String {
    if series.is_empty() {
        return "(no data to plot)\n".to_string();
    }

    let mut out = String::new();
    for metric in Metric::ALL {
        let cumulative: Vec<f64> = series.cumulative(metric).iter().map(|&v| v as f64).collect();
        let daily: Vec<f64> = series.daily(metric).iter().map(|&v| v as f64).collect();

        push_panel(
            &mut out,
            &format!("{} (cumulative)", metric.display_name()),
            &cumulative,
            width,
            height,
        );
        push_panel(
            &mut out,
            &format!("{} (daily)", metric.display_name()),
            &daily,
            width,
            height,
        );
    }
    out
}

fn push_panel(out: &mut String, label: &str, values: &[f64], width: usize, height: usize) {
    let (y_min, y_max) = value_range(values);
    out.push_str(&format!(
        "{label} | day=[0, {}] | y=[{y_min:.0}, {y_max:.0}]\n",
        values.len().saturating_sub(1)
    ));
    out.push_str(&render_panel(values, width, height));
    out.push('\n');
}

/// Render one series into a `width` x `height` character grid.
fn render_panel(values: &[f64], width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let mut grid = vec![vec![' '; width]; height];

    if !values.is_empty() {
        let (y_min, y_max) = value_range(values);
        let (y_min, y_max) = pad_range(y_min, y_max, 0.05);
        let x_max = values.len().saturating_sub(1).max(1) as f64;

        // Draw connecting segments first so markers can overlay.
        let mut prev = None;
        for (i, &v) in values.iter().enumerate() {
            let x = map_x(i as f64, x_max, width);
            let y = map_y(v, y_min, y_max, height);
            if let Some((x0, y0)) = prev {
                draw_line(&mut grid, x0, y0, x, y, '-');
            }
            prev = Some((x, y));
        }

        for (i, &v) in values.iter().enumerate() {
            let x = map_x(i as f64, x_max, width);
            let y = map_y(v, y_min, y_max, height);
            grid[y][x] = 'o';
        }
    }

    let mut out = String::new();
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }
    out
}

fn value_range(values: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() {
        (min, max)
    } else {
        (0.0, 1.0)
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = (x / x_max).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

/// Integer line drawing (Bresenham-ish). Only fills blank cells.
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
