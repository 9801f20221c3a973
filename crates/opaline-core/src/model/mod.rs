//! Curve data model — domain points, colours, curve aggregates, and the
//! store that owns them.

pub mod curve;
pub mod point;
pub mod store;

pub use curve::{Curve, CurveNode};
pub use point::{Colour, DomainPoint, PointRef};
pub use store::CurveStore;
