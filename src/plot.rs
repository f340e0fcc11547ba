//! Optional 2-D visualization of a finalized rectangle against the data it was
//! carved out of. Purely observational: it has no effect on engine state and is
//! only compiled in when the `plotting` feature is enabled.

use plotters::prelude::*;

use crate::data::PointCloud;
use crate::errors::{BigHolesError, Result};
use crate::rectangle::HyperRectangle;

/// Render one scatter-plot panel per pair of dimensions (`k*(k-1)/2` panels total),
/// laid out in a near-square grid whose row count divides the panel count exactly.
/// Points are split into "behind" and "in front" of the rectangle by the Euclidean
/// norm of their coordinates in the non-plotted dimensions, and the rectangle
/// itself is drawn as a translucent red patch.
pub fn plot_rectangle(
    rect: &HyperRectangle,
    data: &PointCloud,
    feature_names: &[String],
    output_path: &str,
) -> Result<()> {
    let k = rect.k();
    if feature_names.len() != k || data.k() != k {
        return Err(BigHolesError::DimensionMismatch {
            left: k,
            right: feature_names.len().max(data.k()),
        });
    }

    let pairs: Vec<(usize, usize)> = (0..k)
        .flat_map(|a| (a + 1..k).map(move |b| (a, b)))
        .collect();
    let num_plots = pairs.len().max(1);

    let mut rows = (num_plots as f64).sqrt() as usize;
    if rows == 0 {
        rows = 1;
    }
    while rows > 1 && num_plots % rows != 0 {
        rows -= 1;
    }
    let cols = num_plots / rows;

    let root = BitMapBackend::new(output_path, (320 * cols as u32, 280 * rows as u32))
        .into_drawing_area();
    root.fill(&WHITE).map_err(|e| io_failure(output_path, e))?;
    let panels = root.split_evenly((rows, cols));

    for (panel, &(x_dim, y_dim)) in panels.iter().zip(pairs.iter()) {
        draw_panel(panel, rect, data, feature_names, x_dim, y_dim, output_path)?;
    }

    root.present().map_err(|e| io_failure(output_path, e))?;
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn draw_panel(
    panel: &DrawingArea<BitMapBackend<'_>, plotters::coord::Shift>,
    rect: &HyperRectangle,
    data: &PointCloud,
    feature_names: &[String],
    x_dim: usize,
    y_dim: usize,
    output_path: &str,
) -> Result<()> {
    let other_dims: Vec<usize> = (0..rect.k()).filter(|&d| d != x_dim && d != y_dim).collect();

    let rectangle_height = norm_over(
        other_dims
            .iter()
            .map(|&d| (rect.lower()[d] + rect.upper()[d]) / 2.0),
    );

    let (x_min, x_max) = axis_bounds(data, x_dim);
    let (y_min, y_max) = axis_bounds(data, y_dim);

    let mut chart = ChartBuilder::on(panel)
        .margin(10)
        .caption(format!("volume {:.4}", rect.volume()), ("sans-serif", 14))
        .x_label_area_size(24)
        .y_label_area_size(32)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| io_failure(output_path, e))?;

    chart
        .configure_mesh()
        .x_desc(&feature_names[x_dim])
        .y_desc(&feature_names[y_dim])
        .draw()
        .map_err(|e| io_failure(output_path, e))?;

    let (behind, in_front): (Vec<_>, Vec<_>) = data
        .rows()
        .partition(|p| norm_over(other_dims.iter().map(|&d| p[d])) <= rectangle_height);

    // draw order is z-order: behind points under the patch, in-front points above it.
    chart
        .draw_series(
            behind
                .iter()
                .map(|p| Circle::new((p[x_dim], p[y_dim]), 2, BLUE.filled())),
        )
        .map_err(|e| io_failure(output_path, e))?;

    chart
        .draw_series(std::iter::once(Rectangle::new(
            [
                (rect.lower()[x_dim], rect.lower()[y_dim]),
                (rect.upper()[x_dim], rect.upper()[y_dim]),
            ],
            RED.mix(0.5).filled(),
        )))
        .map_err(|e| io_failure(output_path, e))?;

    chart
        .draw_series(
            in_front
                .iter()
                .map(|p| Circle::new((p[x_dim], p[y_dim]), 2, RGBColor(255, 140, 0).filled())),
        )
        .map_err(|e| io_failure(output_path, e))?;

    Ok(())
}

fn norm_over(values: impl Iterator<Item = f64>) -> f64 {
    values.map(|v| v * v).sum::<f64>().sqrt()
}

fn axis_bounds(data: &PointCloud, dim: usize) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for p in data.rows() {
        min = min.min(p[dim]);
        max = max.max(p[dim]);
    }
    (min, max)
}

fn io_failure(path: &str, source: impl std::error::Error) -> BigHolesError {
    BigHolesError::PersistenceFailure {
        path: path.to_string(),
        source: std::io::Error::new(std::io::ErrorKind::Other, source.to_string()),
    }
}
