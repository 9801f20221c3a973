//! Domain-space point data and weak point references.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A transfer-function control point in domain space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainPoint {
    /// Domain-space scalar (e.g. a Hounsfield radiodensity value).
    /// Unbounded, conventionally within the visible range.
    pub value: f32,
    /// Normalized opacity, conventionally in `[0, 1]`. Not hard-clamped
    /// by the store.
    pub alpha: f32,
}

/// RGB colour attached to a control point, channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Colour {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Colour {
    /// Default colour for points inserted by clicking on a curve line.
    pub const BLACK: Self = Self {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
    };
}

/// Weak reference to a point in the curve set.
///
/// Plain indices, revalidated by the store on every use — never a
/// pointer into it, since structural mutation (insert/remove) is what
/// invalidates references in the first place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointRef {
    pub curve: usize,
    pub point: usize,
}

impl PointRef {
    pub const fn new(curve: usize, point: usize) -> Self {
        Self { curve, point }
    }

    /// Retarget this reference after `removed` was deleted from its
    /// curve.
    ///
    /// References into other curves are unaffected. Within the same
    /// curve, indices past the removed point shift down by one, and a
    /// reference to the removed point itself dissolves.
    pub fn after_removal(self, removed: PointRef) -> Option<PointRef> {
        if self.curve != removed.curve {
            return Some(self);
        }
        match self.point.cmp(&removed.point) {
            Ordering::Less => Some(self),
            Ordering::Equal => None,
            Ordering::Greater => Some(PointRef {
                curve: self.curve,
                point: self.point - 1,
            }),
        }
    }
}
