//! Ownership and mutation of the curve set.
//!
//! All operations validate indices up front and are all-or-nothing: on
//! any error the store is left exactly as before the call. Sort order
//! is enforced on insert and repaired by [`CurveStore::normalize_order`]
//! after bulk loads; drags never change an index (the drag controller
//! clamps motion between the neighbouring points instead).

use glam::Vec2;

use crate::error::ClutError;
use crate::view::ViewState;

use super::curve::{Curve, CurveNode};
use super::point::{Colour, DomainPoint, PointRef};

/// Ordered collection of curves. Curve order is display/iteration order
/// only; there is no sorting constraint across curves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveStore {
    curves: Vec<Curve>,
}

impl CurveStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn curve(&self, curve: usize) -> Result<&Curve, ClutError> {
        self.curves.get(curve).ok_or(ClutError::CurveIndexOutOfRange {
            curve,
            len: self.curves.len(),
        })
    }

    pub fn node(&self, at: PointRef) -> Result<&CurveNode, ClutError> {
        let curve = self.curve(at.curve)?;
        curve
            .nodes
            .get(at.point)
            .ok_or(ClutError::PointIndexOutOfRange {
                curve: at.curve,
                point: at.point,
                len: curve.nodes.len(),
            })
    }

    fn curve_mut(&mut self, curve: usize) -> Result<&mut Curve, ClutError> {
        let len = self.curves.len();
        self.curves
            .get_mut(curve)
            .ok_or(ClutError::CurveIndexOutOfRange { curve, len })
    }

    fn node_mut(&mut self, at: PointRef) -> Result<&mut CurveNode, ClutError> {
        let curve = self.curve_mut(at.curve)?;
        let len = curve.nodes.len();
        curve
            .nodes
            .get_mut(at.point)
            .ok_or(ClutError::PointIndexOutOfRange {
                curve: at.curve,
                point: at.point,
                len,
            })
    }

    /// Replace the whole curve set from index-aligned point and colour
    /// sequences (the shape presets arrive in). Input order is not
    /// trusted; callers follow up with [`CurveStore::normalize_order`]
    /// and a pixel-cache rebuild.
    pub fn replace_all(&mut self, points: Vec<Vec<DomainPoint>>, colours: Vec<Vec<Colour>>) {
        if points.len() != colours.len() {
            tracing::warn!(
                points = points.len(),
                colours = colours.len(),
                "preset curve/colour counts differ; extra entries dropped"
            );
        }
        self.curves = points
            .into_iter()
            .zip(colours)
            .map(|(points, colours)| {
                if points.len() != colours.len() {
                    tracing::warn!(
                        points = points.len(),
                        colours = colours.len(),
                        "preset point/colour counts differ; extra entries dropped"
                    );
                }
                Curve {
                    nodes: points
                        .into_iter()
                        .zip(colours)
                        .map(|(point, colour)| CurveNode::new(point, colour))
                        .collect(),
                }
            })
            .filter(|curve| !curve.is_empty())
            .collect();
    }

    /// Insert a node at `index`, keeping the curve ascending.
    ///
    /// The caller (hit testing) supplies the index; the store does not
    /// re-sort, but it rejects an insert whose resulting sequence would
    /// not be strictly ascending in domain value.
    pub fn insert_point(
        &mut self,
        curve: usize,
        index: usize,
        node: CurveNode,
    ) -> Result<(), ClutError> {
        let target = self.curve_mut(curve)?;
        if index > target.nodes.len() {
            return Err(ClutError::PointIndexOutOfRange {
                curve,
                point: index,
                len: target.nodes.len(),
            });
        }
        let after_predecessor = index == 0 || target.nodes[index - 1].point.value < node.point.value;
        let before_successor =
            index == target.nodes.len() || node.point.value < target.nodes[index].point.value;
        if !after_predecessor || !before_successor {
            return Err(ClutError::OrderViolation { curve, index });
        }
        target.nodes.insert(index, node);
        debug_assert!(target.is_ascending());
        Ok(())
    }

    /// Remove the node at `at`. Returns `true` when the removal left the
    /// curve empty and the curve itself was destroyed.
    ///
    /// `selected` is the externally-tracked point reference (selection /
    /// tooltip target): within the same curve it shifts down past the
    /// removed index, dissolves if it named the removed point, and is
    /// cleared outright when the whole curve goes away.
    pub fn remove_point(
        &mut self,
        at: PointRef,
        selected: &mut Option<PointRef>,
    ) -> Result<bool, ClutError> {
        self.node(at)?;
        let curve = &mut self.curves[at.curve];
        curve.nodes.remove(at.point);
        *selected = selected.and_then(|s| s.after_removal(at));
        if curve.is_empty() {
            self.curves.remove(at.curve);
            *selected = None;
            return Ok(true);
        }
        Ok(false)
    }

    /// Replace the colour of one point; position is untouched.
    pub fn recolour(&mut self, at: PointRef, colour: Colour) -> Result<(), ClutError> {
        self.node_mut(at)?.colour = colour;
        Ok(())
    }

    /// Write a new pixel position into the cache at `at` and refresh its
    /// domain point through the inverse transform.
    ///
    /// The node's index never changes: monotonicity is enforced upstream
    /// by the drag controller's clamping, so no re-sort is needed.
    pub fn move_point(
        &mut self,
        at: PointRef,
        pixel: Vec2,
        view: &ViewState,
    ) -> Result<(), ClutError> {
        self.node(at)?;
        // Invert before touching the node, so a degenerate view leaves
        // the store unchanged.
        let point = view.to_domain(pixel)?;
        let node = &mut self.curves[at.curve].nodes[at.point];
        node.pixel = pixel;
        node.point = point;
        Ok(())
    }

    /// Re-sort every curve jointly by ascending domain value. Stable
    /// with respect to equal values.
    pub fn normalize_order(&mut self) {
        for curve in &mut self.curves {
            curve.sort_by_value();
        }
    }

    /// Recompute every cached pixel from its domain point. Called on
    /// resize or domain-range change; fails without touching the cache
    /// when the view is degenerate.
    pub fn rebuild_pixel_cache(&mut self, view: &ViewState) -> Result<(), ClutError> {
        view.drawable()?;
        for curve in &mut self.curves {
            for node in &mut curve.nodes {
                node.pixel = view.to_pixel(node.point)?;
            }
        }
        Ok(())
    }
}
