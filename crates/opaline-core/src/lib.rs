//! Opaline core — interactive editing of piecewise-linear CLUT
//! transfer-function curves.
//!
//! A curve maps a scalar domain value (e.g. a Hounsfield radiodensity
//! unit) to an opacity in `[0, 1]`, each control point carrying an RGB
//! colour. Several curves coexist on one editing surface, overlaid on a
//! log-scaled histogram of the domain.
//!
//! This crate is the editing core only: data model, domain ↔ pixel
//! transform, hit testing, histogram projection, and the drag state
//! machine. No GUI or rendering dependencies — hosts feed primitive
//! pointer/resize events into [`ClutEditor`] and read back change
//! events and render snapshots.

pub mod editor;
pub mod error;
pub mod histogram;
pub mod hit;
pub mod model;
pub mod view;

// Re-exports for convenience.
pub use editor::{
    ClutEditor, ClutEvent, CurvePolyline, DragController, DragState, RenderSnapshot, SelectedPoint,
};
pub use error::ClutError;
pub use model::{Colour, Curve, CurveNode, CurveStore, DomainPoint, PointRef};
pub use view::ViewState;
