//! Read-only render data for the host's painter.
//!
//! A snapshot carries everything needed to draw one frame — gradient
//! fills, curve lines, point markers, the histogram backdrop, selector
//! handles, and the tooltip for the selected point. Visual styling is
//! the host's concern.

use glam::Vec2;

use crate::model::{Colour, Curve, PointRef};

/// Pixel-space polyline and per-point colours for one curve.
#[derive(Debug, Clone, PartialEq)]
pub struct CurvePolyline {
    /// Point positions, ascending in x.
    pub pixels: Vec<Vec2>,
    /// Colour of each point, index-aligned with `pixels`.
    pub colours: Vec<Colour>,
    /// Gradient-stop offset of each point, normalized to `[0, 1]` along
    /// the curve's horizontal span.
    pub stops: Vec<f32>,
    /// Pixel x of the span centre, where the selector handle sits.
    pub handle_x: f32,
}

impl CurvePolyline {
    pub(crate) fn from_curve(curve: &Curve) -> Self {
        let nodes = curve.nodes();
        let pixels: Vec<Vec2> = nodes.iter().map(|n| n.pixel).collect();
        let colours = nodes.iter().map(|n| n.colour).collect();
        let (first_x, span) = match (pixels.first(), pixels.last()) {
            (Some(first), Some(last)) => (first.x, last.x - first.x),
            _ => (0.0, 0.0),
        };
        let stops = pixels
            .iter()
            .map(|p| if span > 0.0 { (p.x - first_x) / span } else { 0.0 })
            .collect();
        Self {
            pixels,
            colours,
            stops,
            handle_x: curve.handle_x().unwrap_or(0.0),
        }
    }
}

/// Tooltip data for the currently selected point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectedPoint {
    pub at: PointRef,
    /// Marker position in pixels.
    pub pixel: Vec2,
    /// Domain value, for the "Value:" tooltip line.
    pub value: f32,
    /// Opacity, for the "Alpha:" tooltip line.
    pub alpha: f32,
}

/// Everything the renderer needs for one frame.
///
/// Empty curves and histogram mean there is nothing to draw — either no
/// preset is loaded or the view is degenerate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderSnapshot {
    pub curves: Vec<CurvePolyline>,
    pub histogram: Vec<Vec2>,
    pub selected: Option<SelectedPoint>,
}
