//! Error taxonomy for curve mutation and projection.

/// Errors surfaced by the editor core.
///
/// The index variants indicate caller misuse; every other variant
/// describes input the editor handles by skipping the operation. All
/// mutating operations are all-or-nothing: on any error the curve set
/// is left exactly as it was before the call.
#[derive(Debug, thiserror::Error)]
pub enum ClutError {
    #[error("curve index {curve} out of range ({len} curves)")]
    CurveIndexOutOfRange { curve: usize, len: usize },

    #[error("point index {point} out of range in curve {curve} ({len} points)")]
    PointIndexOutOfRange {
        curve: usize,
        point: usize,
        len: usize,
    },

    #[error("insert at index {index} of curve {curve} would break ascending order")]
    OrderViolation { curve: usize, index: usize },

    #[error("degenerate view: empty domain range or non-positive drawable size")]
    DegenerateView,

    #[error("histogram is empty or has no bin above one")]
    EmptyHistogram,
}
