//! Curve aggregate: one node per control point.

use glam::Vec2;

use super::point::{Colour, DomainPoint};

/// One control point together with its colour and cached panel-space
/// projection.
///
/// Keeping the three fields in a single node (rather than three parallel
/// arrays) means every structural mutation touches them atomically and
/// they can never drift out of length-sync.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveNode {
    pub point: DomainPoint,
    pub colour: Colour,
    /// Projection of `point` under the current view; stale until the
    /// owning store rebuilds the cache.
    pub pixel: Vec2,
}

impl CurveNode {
    pub fn new(point: DomainPoint, colour: Colour) -> Self {
        Self {
            point,
            colour,
            pixel: Vec2::ZERO,
        }
    }
}

/// An ordered transfer-function curve.
///
/// Invariant: nodes are sorted ascending in domain value, equivalently
/// ascending in pixel x since the view transform is monotonic. A curve
/// holds at least one node while it lives in a store; removal of the
/// last node destroys the curve itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curve {
    pub(crate) nodes: Vec<CurveNode>,
}

impl Curve {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[CurveNode] {
        &self.nodes
    }

    /// Whether domain values are ascending. Used by the store to reject
    /// order-breaking inserts before they happen.
    pub(crate) fn is_ascending(&self) -> bool {
        self.nodes
            .windows(2)
            .all(|w| w[0].point.value <= w[1].point.value)
    }

    /// Stable joint sort by domain value. Needed after bulk external
    /// mutation (preset load, negative window widths) where input order
    /// is not guaranteed.
    pub(crate) fn sort_by_value(&mut self) {
        self.nodes
            .sort_by(|a, b| a.point.value.total_cmp(&b.point.value));
    }

    /// Pixel x of the curve's span centre, where the host draws the
    /// per-curve selector handle.
    pub fn handle_x(&self) -> Option<f32> {
        let first = self.nodes.first()?;
        let last = self.nodes.last()?;
        Some((first.pixel.x + last.pixel.x) / 2.0)
    }
}
