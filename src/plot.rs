use std::ops::Range;
use std::path::Path;

use glam::DVec3;
use plotters::coord::ranged3d::Cartesian3d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

use crate::Error;

/// Camera angles for a 3D plot, in degrees.
#[derive(Debug, Clone, Copy)]
pub struct View {
    pub elevation: f64,
    pub azimuth: f64,
}

impl Default for View {
    fn default() -> Self {
        Self {
            elevation: 30.0,
            azimuth: 45.0,
        }
    }
}

pub const FIGURE_SIZE: (u32, u32) = (800, 800);

/// Fraction of the data extent added on each side of the static plot.
const AXIS_PADDING: f64 = 0.05;

/// Draw `positions` as a single 3D line, in sample order, and write the
/// figure to `path` (overwriting it if it exists). The image format follows
/// the file extension.
///
/// An empty sample slice is refused with [`Error::Empty`] rather than
/// producing an empty figure.
pub fn render<P: AsRef<Path>>(positions: &[DVec3], view: View, path: P) -> Result<(), Error> {
    if positions.is_empty() {
        return Err(Error::Empty);
    }

    let root = BitMapBackend::new(path.as_ref(), FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let (x_range, y_range, z_range) = bounds(positions);
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("3D Trajectory", ("sans-serif", 30))
        .build_cartesian_3d(x_range.clone(), y_range.clone(), z_range.clone())
        .map_err(draw_err)?;
    apply_view(&mut chart, view);
    chart.configure_axes().draw().map_err(draw_err)?;

    chart
        .draw_series(LineSeries::new(
            positions.iter().map(|p| (p.x, p.y, p.z)),
            &BLUE,
        ))
        .map_err(draw_err)?;
    chart
        .draw_series(axis_labels(&x_range, &y_range, &z_range))
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    Ok(())
}

/// Point the chart camera according to `view`.
pub(crate) fn apply_view<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian3d<RangedCoordf64, RangedCoordf64, RangedCoordf64>>,
    view: View,
) {
    chart.with_projection(|mut pb| {
        pb.pitch = view.elevation.to_radians();
        pb.yaw = view.azimuth.to_radians();
        pb.scale = 0.9;
        pb.into_matrix()
    });
}

/// "X", "Y", "Z" markers at the far end of each axis.
pub(crate) fn axis_labels(
    x: &Range<f64>,
    y: &Range<f64>,
    z: &Range<f64>,
) -> [Text<'static, (f64, f64, f64), &'static str>; 3] {
    let style = TextStyle::from(("sans-serif", 18));
    [
        Text::new("X", (x.end, y.start, z.start), style.clone()),
        Text::new("Y", (x.start, y.end, z.start), style.clone()),
        Text::new("Z", (x.start, y.start, z.end), style),
    ]
}

pub(crate) fn draw_err(err: impl std::fmt::Display) -> Error {
    Error::Render(err.to_string())
}

/// Per-axis data extent, padded a little on each side. A flat axis still gets
/// a nonzero extent so the coordinate ranges stay valid.
fn bounds(positions: &[DVec3]) -> (Range<f64>, Range<f64>, Range<f64>) {
    let mut min = positions[0];
    let mut max = positions[0];
    for &p in positions {
        min = min.min(p);
        max = max.max(p);
    }
    let pad = (max - min).abs().max(DVec3::splat(1e-9)) * AXIS_PADDING;
    let min = min - pad;
    let max = max + pad;
    (min.x..max.x, min.y..max.y, min.z..max.z)
}
