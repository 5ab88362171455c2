use std::ops::Range;
use std::path::Path;

use glam::DVec3;
use plotters::prelude::*;

use crate::plot::{apply_view, axis_labels, draw_err, View};
use crate::window::TrailWindow;
use crate::Error;

pub const FRAME_SIZE: (u32, u32) = (640, 480);
/// Delay between animation frames, in milliseconds.
pub const FRAME_DELAY_MS: u32 = 20;

// The bounds and camera are tuned to the dataset this tool was written for,
// not derived from the data.
const X_RANGE: Range<f64> = -0.4..0.4;
const Y_RANGE: Range<f64> = -0.1..0.1;
const Z_RANGE: Range<f64> = -1.5..-1.38;
const VIEW: View = View {
    elevation: 50.0,
    azimuth: 40.0,
};

const POINT_SIZE: i32 = 3;

/// Write a trailing-fade scatter animation of `positions` to a GIF at `path`,
/// one frame per sample index.
///
/// Frame `f` shows the window of samples leading up to index `f`, faded from
/// a transparent tail to an opaque head (see [`TrailWindow`]). The first
/// frame shows nothing yet. Frames are streamed to the encoder, so memory
/// stays bounded by a single frame.
///
/// An empty sample slice is refused with [`Error::Empty`].
pub fn render<P: AsRef<Path>>(positions: &[DVec3], path: P) -> Result<(), Error> {
    if positions.is_empty() {
        return Err(Error::Empty);
    }

    let root = BitMapBackend::gif(path.as_ref(), FRAME_SIZE, FRAME_DELAY_MS)
        .map_err(draw_err)?
        .into_drawing_area();
    let window = TrailWindow::default();

    for frame in 0..positions.len() {
        root.fill(&WHITE).map_err(draw_err)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .build_cartesian_3d(X_RANGE, Y_RANGE, Z_RANGE)
            .map_err(draw_err)?;
        apply_view(&mut chart, VIEW);
        chart.configure_axes().draw().map_err(draw_err)?;
        chart
            .draw_series(axis_labels(&X_RANGE, &Y_RANGE, &Z_RANGE))
            .map_err(draw_err)?;

        let visible = &positions[window.visible(frame)];
        let alphas = window.alphas(frame);
        chart
            .draw_series(visible.iter().zip(&alphas).map(|(p, &alpha)| {
                Circle::new((p.x, p.y, p.z), POINT_SIZE, BLUE.mix(alpha).filled())
            }))
            .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
    }

    Ok(())
}
