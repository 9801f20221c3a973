//! Bidirectional transform between domain space and panel pixel space.
//!
//! Domain space is `(value, alpha)` — a scalar such as a Hounsfield
//! radiodensity unit paired with a normalized opacity. Pixel space is
//! the editing panel, y growing downward, with a padding band reserved
//! at the top and bottom edges.
//!
//! ```text
//! x = (value - domain_min) × width / (domain_max - domain_min)
//! y = height - alpha × height + padding
//! ```
//!
//! with `width = panel_width - padding` and
//! `height = panel_height - 2 × padding`.

use glam::Vec2;

use crate::error::ClutError;
use crate::model::DomainPoint;

/// Visible domain range, panel size, and padding that parameterize the
/// domain ↔ pixel transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// Lowest visible domain value.
    pub domain_min: f32,
    /// Highest visible domain value.
    pub domain_max: f32,
    /// Panel width in pixels.
    pub panel_width: f32,
    /// Panel height in pixels.
    pub panel_height: f32,
    /// Padding reserved at the panel edges, in pixels.
    pub padding: f32,
}

impl ViewState {
    pub fn new(
        domain_min: f32,
        domain_max: f32,
        panel_width: f32,
        panel_height: f32,
        padding: f32,
    ) -> Self {
        Self {
            domain_min,
            domain_max,
            panel_width,
            panel_height,
            padding,
        }
    }

    /// Drawable `(width, height)` after padding.
    ///
    /// Fails with [`ClutError::DegenerateView`] when the domain range is
    /// empty or either drawable dimension is non-positive; no transform
    /// is meaningful then and the caller must not render.
    pub(crate) fn drawable(&self) -> Result<(f32, f32), ClutError> {
        let width = self.panel_width - self.padding;
        let height = self.panel_height - 2.0 * self.padding;
        if self.domain_max == self.domain_min || width <= 0.0 || height <= 0.0 {
            return Err(ClutError::DegenerateView);
        }
        Ok((width, height))
    }

    /// Map a domain point to panel pixels.
    pub fn to_pixel(&self, point: DomainPoint) -> Result<Vec2, ClutError> {
        let (width, height) = self.drawable()?;
        let proportion = width / (self.domain_max - self.domain_min);
        let x = (point.value - self.domain_min) * proportion;
        let y = height - point.alpha * height + self.padding;
        Ok(Vec2::new(x, y))
    }

    /// Map a panel pixel back to domain space. Exact inverse of
    /// [`ViewState::to_pixel`] under the same view, within floating
    /// tolerance.
    pub fn to_domain(&self, pixel: Vec2) -> Result<DomainPoint, ClutError> {
        let (width, height) = self.drawable()?;
        let proportion = width / (self.domain_max - self.domain_min);
        let value = pixel.x / proportion + self.domain_min;
        let alpha = (height - pixel.y + self.padding) / height;
        Ok(DomainPoint { value, alpha })
    }

    /// Widen (positive `steps`) or narrow the visible domain range by
    /// ten domain units per wheel step on each side. Affects only what
    /// is shown, never the stored curves.
    pub fn widen(&mut self, steps: f32) {
        self.domain_min -= 10.0 * steps;
        self.domain_max += 10.0 * steps;
    }
}
