//! Drag state machine and per-motion clamping.

use glam::Vec2;

use crate::error::ClutError;
use crate::model::{CurveStore, PointRef};
use crate::view::ViewState;

/// Interaction state. At most one point is dragged at a time; a grab
/// while already dragging is refused until release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(PointRef),
}

/// Applies pointer motion to a grabbed point.
///
/// Each update clamps the proposed position into the panel and strictly
/// between the pixel x of the neighbouring points, then writes it
/// through to the store. The grabbed point's index therefore never
/// changes mid-drag and the curve stays strictly monotonic in x with no
/// re-sorting.
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
    moved: bool,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// The point currently being dragged, if any.
    pub fn target(&self) -> Option<PointRef> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging(at) => Some(at),
        }
    }

    /// Begin dragging `target`. Returns `false` (and changes nothing)
    /// when a drag is already in progress.
    pub fn grab(&mut self, target: PointRef) -> bool {
        if self.is_dragging() {
            return false;
        }
        self.state = DragState::Dragging(target);
        self.moved = false;
        true
    }

    /// End the drag. Returns the dragged point when at least one motion
    /// update was applied, i.e. when the release should be committed as
    /// a change.
    pub fn release(&mut self) -> Option<PointRef> {
        let target = self.target();
        let moved = self.moved;
        self.state = DragState::Idle;
        self.moved = false;
        target.filter(|_| moved)
    }

    /// Apply one motion update at `position`. No-op while idle.
    ///
    /// Clamp sequence, later steps overriding earlier ones:
    /// 1. y into `[padding, panel_height - padding]`;
    /// 2. x into `[0, panel_width]`;
    /// 3. x to at least one pixel right of the predecessor;
    /// 4. x to at most one pixel left of the successor.
    ///
    /// Returns whether an update was applied.
    pub fn update(
        &mut self,
        store: &mut CurveStore,
        view: &ViewState,
        position: Vec2,
    ) -> Result<bool, ClutError> {
        let DragState::Dragging(at) = self.state else {
            return Ok(false);
        };

        // A degenerate view has no usable clamp band and no inverse
        // transform; bail before touching anything.
        view.drawable()?;
        let y = position.y.clamp(view.padding, view.panel_height - view.padding);
        let mut x = position.x.clamp(0.0, view.panel_width);

        let nodes = store.curve(at.curve)?.nodes();
        if at.point >= nodes.len() {
            return Err(ClutError::PointIndexOutOfRange {
                curve: at.curve,
                point: at.point,
                len: nodes.len(),
            });
        }
        if at.point > 0 {
            x = x.max(nodes[at.point - 1].pixel.x + 1.0);
        }
        if at.point + 1 < nodes.len() {
            x = x.min(nodes[at.point + 1].pixel.x - 1.0);
        }

        store.move_point(at, Vec2::new(x, y), view)?;
        self.moved = true;
        Ok(true)
    }
}
