use std::ops::Range;

// Invariant: for any frame, visible() and alphas() agree in length.
// At frame 0 both are empty; for 0 < frame < span both have length `frame`;
// from frame == span onward both have length `span`. A renderer may therefore
// zip them without checking.
/// The trailing window of samples that is visible at a given animation frame.
///
/// At frame `f`, the window covers the `span` samples leading up to (and
/// excluding) index `f`. While fewer than `span` samples have passed, the
/// window is the growing prefix `0..f` instead.
#[derive(Debug, Clone, Copy)]
pub struct TrailWindow {
    /// The number of trailing samples that stay visible.
    pub span: usize,
}

impl Default for TrailWindow {
    fn default() -> Self {
        Self { span: 50 }
    }
}

impl TrailWindow {
    /// The range of sample indices visible at `frame`.
    pub fn visible(&self, frame: usize) -> Range<usize> {
        frame.saturating_sub(self.span)..frame
    }

    /// Per-sample opacities for the samples visible at `frame`, tail first.
    ///
    /// The most recent visible sample is always fully opaque. While the
    /// window is still growing, the tail starts at `1 - frame / span` and
    /// fades in; once the window is full, opacities run from 0 to 1. At
    /// frame 0 nothing is visible and no opacities exist.
    pub fn alphas(&self, frame: usize) -> Vec<f64> {
        if frame == 0 {
            return Vec::new();
        }
        if frame < self.span {
            linspace(1.0 - frame as f64 / self.span as f64, 1.0, frame)
        } else {
            linspace(0.0, 1.0, self.span)
        }
    }
}

/// `n` evenly spaced values over `[start, end]`, endpoints included.
///
/// A single-element result holds `end`, so the head of a fade stays opaque.
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![end],
        // Dividing the index rather than precomputing a step keeps both
        // endpoints exact.
        _ => (0..n)
            .map(|i| start + (end - start) * i as f64 / (n - 1) as f64)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn growing_prefix_becomes_trailing_window() {
        let window = TrailWindow::default();
        assert_eq!(window.visible(0), 0..0);
        assert_eq!(window.visible(1), 0..1);
        assert_eq!(window.visible(49), 0..49);
        assert_eq!(window.visible(50), 0..50);
        assert_eq!(window.visible(51), 1..51);
        assert_eq!(window.visible(500), 450..500);
    }

    #[test]
    fn no_alphas_at_frame_zero() {
        assert!(TrailWindow::default().alphas(0).is_empty());
    }

    #[test]
    fn first_fade_is_a_single_opaque_point() {
        assert_eq!(TrailWindow::default().alphas(1), vec![1.0]);
    }

    #[test]
    fn growing_fade_starts_dim_and_ends_opaque() {
        let alphas = TrailWindow::default().alphas(10);
        assert_eq!(alphas.len(), 10);
        assert_relative_eq!(alphas[0], 0.8);
        assert_relative_eq!(alphas[9], 1.0);
        assert!(alphas.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn full_window_fades_from_transparent_to_opaque() {
        let window = TrailWindow::default();
        for frame in [50, 51, 1000] {
            let alphas = window.alphas(frame);
            assert_eq!(alphas.len(), 50);
            assert_eq!(alphas[0], 0.0);
            assert_eq!(alphas[49], 1.0);
        }
    }

    #[test]
    fn alphas_and_visible_agree_in_length() {
        let window = TrailWindow::default();
        for frame in 0..200 {
            assert_eq!(window.alphas(frame).len(), window.visible(frame).len());
        }
    }

    #[test]
    fn linspace_endpoints_are_exact() {
        let values = linspace(0.25, 0.75, 11);
        assert_eq!(values.len(), 11);
        assert_eq!(values[0], 0.25);
        assert_relative_eq!(values[5], 0.5);
        assert_relative_eq!(values[10], 0.75);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }
}
