//! Log-scaled projection of a frequency array into a background
//! polyline.
//!
//! The editor overlays its curves on a histogram of the underlying
//! scalar domain (e.g. voxel radiodensity frequencies). Counts span many
//! orders of magnitude, so the y axis is `ln(frequency)` normalized
//! against `ln(max)`; zero bins sit on the baseline. Bins are
//! unit-spaced from `domain_min`, sharing the x scale of the curve
//! transform.

use glam::Vec2;

use crate::error::ClutError;
use crate::view::ViewState;

/// Project `frequencies` into a pixel-space polyline for the given view.
///
/// Fails with [`ClutError::EmptyHistogram`] when the array is empty or
/// its maximum is ≤ 1, since `ln(max)` would be undefined or zero and
/// divide the scale by zero. Callers with no real data must pass a
/// placeholder array instead (the editor defaults to `[100, 100]`).
pub fn project(frequencies: &[f32], view: &ViewState) -> Result<Vec<Vec2>, ClutError> {
    let max = frequencies
        .iter()
        .copied()
        .reduce(f32::max)
        .ok_or(ClutError::EmptyHistogram)?;
    let log_max = max.ln();
    if log_max.is_nan() || log_max <= 0.0 {
        return Err(ClutError::EmptyHistogram);
    }

    // The histogram band keeps only the top padding, running to the
    // bottom edge of the panel.
    let width = view.panel_width - view.padding;
    let height = view.panel_height - view.padding;
    let range = view.domain_max - view.domain_min;
    if range == 0.0 || width <= 0.0 || height <= 0.0 {
        return Err(ClutError::DegenerateView);
    }
    let proportion_x = width / range;
    let proportion_y = height / log_max;

    Ok(frequencies
        .iter()
        .enumerate()
        .map(|(i, &frequency)| {
            let log_f = if frequency > 0.0 { frequency.ln() } else { 0.0 };
            Vec2::new(i as f32 * proportion_x, height - log_f * proportion_y)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    #[test]
    fn test_log_scale_halves_first_nonzero_step() {
        // Frequencies {0, e², e⁴} over domain [0, 2] on a padding-free
        // 100×100 panel: y must land at {height, height/2, 0}.
        let view = ViewState::new(0.0, 2.0, 100.0, 100.0, 0.0);
        let e2 = std::f32::consts::E.powi(2);
        let e4 = std::f32::consts::E.powi(4);
        let polyline = project(&[0.0, e2, e4], &view).unwrap();

        let height = 100.0;
        assert!((polyline[0].y - height).abs() < EPSILON);
        assert!((polyline[1].y - height / 2.0).abs() < EPSILON);
        assert!(polyline[2].y.abs() < EPSILON);
        // x spreads linearly across the domain, one bin per unit.
        assert!((polyline[0].x - 0.0).abs() < EPSILON);
        assert!((polyline[1].x - 50.0).abs() < EPSILON);
        assert!((polyline[2].x - 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_empty_input_is_refused() {
        let view = ViewState::new(0.0, 2.0, 100.0, 100.0, 0.0);
        assert!(matches!(
            project(&[], &view),
            Err(ClutError::EmptyHistogram)
        ));
    }

    #[test]
    fn test_all_zero_input_is_refused() {
        let view = ViewState::new(0.0, 2.0, 100.0, 100.0, 0.0);
        assert!(matches!(
            project(&[0.0, 0.0, 0.0], &view),
            Err(ClutError::EmptyHistogram)
        ));
    }

    #[test]
    fn test_degenerate_view_is_refused() {
        let view = ViewState::new(2.0, 2.0, 100.0, 100.0, 0.0);
        assert!(matches!(
            project(&[0.0, 100.0], &view),
            Err(ClutError::DegenerateView)
        ));
    }
}
