//! Change notifications drained by the host.
//!
//! The editor queues an event per observable mutation; the host drains
//! the queue after feeding it an input event and reacts (re-render,
//! propagate the preset). An explicit owned queue replaces the global
//! publish-subscribe the original widget relied on.

/// Emitted by [`ClutEditor`](super::ClutEditor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClutEvent {
    /// A committed mutation: point insert, removal, recolour, or drag
    /// release.
    PointChanged,
    /// Continuous notification while a point is being dragged.
    PointChanging,
}
