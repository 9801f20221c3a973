//! Editor facade — input handlers, preset lifecycle, and render export.
//!
//! [`ClutEditor`] owns the curve store, view state, and drag controller,
//! and exposes handlers taking primitive positions/deltas/sizes so hosts
//! can wire any windowing system on top. After each handler call the
//! host drains [`ClutEvent`]s and, when repainting, takes a
//! [`RenderSnapshot`].

pub mod drag;
pub mod events;
pub mod snapshot;

use glam::Vec2;

use crate::error::ClutError;
use crate::hit;
use crate::histogram;
use crate::model::{Colour, CurveNode, CurveStore, DomainPoint, PointRef};
use crate::view::ViewState;

pub use drag::{DragController, DragState};
pub use events::ClutEvent;
pub use snapshot::{CurvePolyline, RenderSnapshot, SelectedPoint};

/// Interactive editor for CLUT transfer-function curves.
#[derive(Debug)]
pub struct ClutEditor {
    store: CurveStore,
    view: ViewState,
    drag: DragController,
    /// Last grabbed point; drives the tooltip. A weak reference, fixed
    /// up or cleared by the store on removals.
    selected: Option<PointRef>,
    /// Raw frequency array behind the histogram backdrop. A placeholder
    /// until the host supplies real data.
    frequencies: Vec<f32>,
    histogram_polyline: Vec<Vec2>,
    events: Vec<ClutEvent>,
    has_preset: bool,
    /// False while the view is degenerate; snapshots are empty then.
    renderable: bool,
}

impl ClutEditor {
    pub fn new(view: ViewState) -> Self {
        let mut editor = Self {
            store: CurveStore::new(),
            view,
            drag: DragController::new(),
            selected: None,
            frequencies: vec![100.0, 100.0],
            histogram_polyline: Vec::new(),
            events: Vec::new(),
            has_preset: false,
            renderable: false,
        };
        editor.refresh_projection();
        editor
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn store(&self) -> &CurveStore {
        &self.store
    }

    pub fn selected(&self) -> Option<PointRef> {
        self.selected
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    // ── Input handlers ───────────────────────────────────────────

    /// Primary button down at `position`: grabs a point for dragging,
    /// or inserts a new point when the click lands on a curve line.
    /// Returns whether the event was consumed.
    pub fn pointer_down(&mut self, position: Vec2) -> bool {
        if let Some(target) = hit::find_point_at(&self.store, position, hit::PICK_RADIUS) {
            if self.drag.grab(target) {
                self.selected = Some(target);
            }
            return true;
        }
        if let Some((curve, index)) = hit::find_insertion_on_line(&self.store, position) {
            return match self.insert_at(curve, index, position) {
                Ok(()) => {
                    self.events.push(ClutEvent::PointChanged);
                    true
                }
                Err(e) => {
                    tracing::warn!("insert rejected: {e}");
                    false
                }
            };
        }
        false
    }

    /// Pointer motion. While a drag is active the grabbed point follows
    /// the (clamped) position and a `PointChanging` event is queued.
    pub fn pointer_move(&mut self, position: Vec2) -> bool {
        match self.drag.update(&mut self.store, &self.view, position) {
            Ok(true) => {
                self.events.push(ClutEvent::PointChanging);
                true
            }
            Ok(false) => false,
            Err(e) => {
                // Invalid interactions clamp or skip silently; never crash.
                tracing::debug!("drag update skipped: {e}");
                false
            }
        }
    }

    /// Primary button up: ends any drag, committing it as a
    /// `PointChanged` event if the point actually moved.
    pub fn pointer_up(&mut self) {
        if self.drag.release().is_some() {
            self.events.push(ClutEvent::PointChanged);
        }
    }

    /// Double-click on a point selects it and asks the host for a new
    /// colour through `pick_colour` (a blocking colour-picker prompt).
    /// A `None` reply leaves the point untouched.
    pub fn pointer_double_click<F>(&mut self, position: Vec2, pick_colour: F) -> bool
    where
        F: FnOnce() -> Option<Colour>,
    {
        let Some(target) = hit::find_point_at(&self.store, position, hit::PICK_RADIUS) else {
            return false;
        };
        self.selected = Some(target);
        if let Some(colour) = pick_colour() {
            match self.store.recolour(target, colour) {
                Ok(()) => self.events.push(ClutEvent::PointChanged),
                Err(e) => tracing::warn!("recolour rejected: {e}"),
            }
        }
        true
    }

    /// Secondary button down: removes the point under `position` (and
    /// its curve, when that was the curve's last point). Refused while a
    /// drag is in progress.
    pub fn pointer_right_down(&mut self, position: Vec2) -> bool {
        if self.drag.is_dragging() {
            return false;
        }
        let Some(target) = hit::find_point_at(&self.store, position, hit::PICK_RADIUS) else {
            return false;
        };
        match self.store.remove_point(target, &mut self.selected) {
            Ok(_) => {
                self.events.push(ClutEvent::PointChanged);
                true
            }
            Err(e) => {
                tracing::warn!("removal rejected: {e}");
                false
            }
        }
    }

    /// Wheel zoom: widens (positive `steps`) or narrows the visible
    /// domain range by ten units per step on each side. Purely visual;
    /// stored curves are untouched and no change event is emitted.
    pub fn pointer_wheel(&mut self, steps: f32) {
        self.view.widen(steps);
        tracing::debug!(
            min = self.view.domain_min,
            max = self.view.domain_max,
            "visible range changed"
        );
        self.refresh_projection();
    }

    /// Panel resized; the whole pixel cache is rebuilt before the next
    /// paint.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.view.panel_width = width;
        self.view.panel_height = height;
        self.refresh_projection();
    }

    // ── Host configuration ───────────────────────────────────────

    /// Explicitly set the visible domain range.
    pub fn set_range(&mut self, domain_min: f32, domain_max: f32) {
        self.view.domain_min = domain_min;
        self.view.domain_max = domain_max;
        tracing::debug!(min = domain_min, max = domain_max, "range set");
        self.refresh_projection();
    }

    pub fn set_padding(&mut self, padding: f32) {
        self.view.padding = padding;
        self.refresh_projection();
    }

    /// Supply the frequency array behind the histogram backdrop. Hosts
    /// without data keep the built-in placeholder instead of passing an
    /// empty or all-zero array.
    pub fn set_histogram(&mut self, frequencies: Vec<f32>) {
        self.frequencies = frequencies;
        self.refresh_histogram();
    }

    /// Replace the entire curve set from index-aligned preset data.
    /// Input order is not trusted: curves are jointly re-sorted and the
    /// pixel cache rebuilt.
    pub fn load_preset(&mut self, points: Vec<Vec<DomainPoint>>, colours: Vec<Vec<Colour>>) {
        self.store.replace_all(points, colours);
        self.store.normalize_order();
        self.selected = None;
        self.drag = DragController::new();
        self.has_preset = !self.store.is_empty();
        self.refresh_projection();
        tracing::info!(curves = self.store.len(), "preset loaded");
    }

    /// Drop all curves (preset cleared or switched to a non-editable
    /// mode).
    pub fn clear_preset(&mut self) {
        self.store = CurveStore::new();
        self.selected = None;
        self.drag = DragController::new();
        self.has_preset = false;
    }

    // ── Output ───────────────────────────────────────────────────

    /// Take all change events queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<ClutEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read-only render data for the current frame.
    pub fn snapshot(&self) -> RenderSnapshot {
        if !self.renderable {
            return RenderSnapshot::default();
        }
        let curves = if self.has_preset {
            self.store
                .curves()
                .iter()
                .map(CurvePolyline::from_curve)
                .collect()
        } else {
            Vec::new()
        };
        let selected = self.selected.and_then(|at| {
            let node = self.store.node(at).ok()?;
            Some(SelectedPoint {
                at,
                pixel: node.pixel,
                value: node.point.value,
                alpha: node.point.alpha,
            })
        });
        RenderSnapshot {
            curves,
            histogram: self.histogram_polyline.clone(),
            selected,
        }
    }

    // ── Internals ────────────────────────────────────────────────

    fn insert_at(&mut self, curve: usize, index: usize, position: Vec2) -> Result<(), ClutError> {
        let point = self.view.to_domain(position)?;
        let node = CurveNode {
            point,
            colour: Colour::BLACK,
            pixel: position,
        };
        self.store.insert_point(curve, index, node)
    }

    fn refresh_projection(&mut self) {
        match self.store.rebuild_pixel_cache(&self.view) {
            Ok(()) => self.renderable = true,
            Err(e) => {
                tracing::warn!("projection skipped: {e}");
                self.renderable = false;
                self.histogram_polyline.clear();
                return;
            }
        }
        self.refresh_histogram();
    }

    fn refresh_histogram(&mut self) {
        match histogram::project(&self.frequencies, &self.view) {
            Ok(polyline) => self.histogram_polyline = polyline,
            Err(e) => {
                tracing::warn!("histogram projection failed: {e}");
                self.histogram_polyline.clear();
            }
        }
    }
}
