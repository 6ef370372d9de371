//! Canvas session - element list ownership, z-order, and linear undo/redo.
//!
//! A `Canvas` exclusively owns its elements; nothing outside the session
//! holds references to them. History is the classic past/present/future
//! arrangement over full element-list snapshots: the element list itself is
//! always the present, `past` and `future` hold the undo and redo stacks.
//!
//! ## Snapshot granularity
//!
//! Discrete actions (add, remove, duplicate, property edit, z-order change,
//! template application) record exactly one snapshot each. Continuous drag
//! gestures record nothing per pointer-move; the editor opens a gesture
//! before mutating geometry and commits one snapshot at pointer-up via
//! [`Canvas::begin_gesture`] / [`Canvas::commit_gesture`]. An abandoned
//! gesture (no net change) commits nothing.

use crate::constants::{DEFAULT_CANVAS_SIZE, DEFAULT_ZOOM, DUPLICATE_OFFSET, MAX_HISTORY_STATES, MAX_ZOOM, MIN_ZOOM};
use crate::spatial_index::SpatialIndex;
use crate::template::LogoTemplate;
use crate::types::{CanvasElement, ElementContent, ElementRect};
use tracing::debug;

/// One undo/redo unit: an immutable copy of the full element list.
pub type Snapshot = Vec<CanvasElement>;

pub struct Canvas {
    /// The present state. Paint/hit-test order is `z_index`, ties broken by
    /// position in this list (insertion order).
    pub elements: Vec<CanvasElement>,
    /// Logo canvas extent in canvas-local units
    pub canvas_size: (f32, f32),
    pub zoom: f32,
    /// Pan offset of the viewport, screen pixels
    pub pan: (f32, f32),
    /// Applied template, if the session started from one
    pub template_id: Option<String>,

    next_element_id: u64,
    past: Vec<Snapshot>,
    future: Vec<Snapshot>,
    /// Element-list copy captured at gesture start; committed or discarded
    /// at pointer-up.
    gesture_baseline: Option<Snapshot>,
    spatial: SpatialIndex,
    dirty: bool,
}

impl Canvas {
    pub fn new(canvas_size: (f32, f32)) -> Self {
        Self {
            elements: Vec::new(),
            canvas_size,
            zoom: DEFAULT_ZOOM,
            pan: (0.0, 0.0),
            template_id: None,
            next_element_id: 1,
            past: Vec::new(),
            future: Vec::new(),
            gesture_baseline: None,
            spatial: SpatialIndex::new(),
            dirty: false,
        }
    }

    pub fn new_for_test() -> Self {
        Self::new(DEFAULT_CANVAS_SIZE)
    }

    /// Open a session over a saved element list. History starts empty; id
    /// generation resumes above the highest existing id.
    pub fn from_parts(
        elements: Vec<CanvasElement>,
        canvas_size: (f32, f32),
        template_id: Option<String>,
    ) -> Self {
        let next_element_id = elements.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        let spatial = SpatialIndex::from_elements(elements.iter().map(|e| (e.id, e.rect())));
        Self {
            elements,
            canvas_size,
            zoom: DEFAULT_ZOOM,
            pan: (0.0, 0.0),
            template_id,
            next_element_id,
            past: Vec::new(),
            future: Vec::new(),
            gesture_baseline: None,
            spatial,
            dirty: false,
        }
    }

    // ========================================================================
    // Element access
    // ========================================================================

    pub fn get_element(&self, id: u64) -> Option<&CanvasElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Mutable access for in-gesture geometry updates. Callers that change
    /// bounds must follow up with [`Canvas::update_spatial_bounds`].
    pub fn get_element_mut(&mut self, id: u64) -> Option<&mut CanvasElement> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Elements in paint order: ascending `z_index`, insertion order on ties.
    pub fn elements_by_z(&self) -> Vec<&CanvasElement> {
        let mut ordered: Vec<(usize, &CanvasElement)> = self.elements.iter().enumerate().collect();
        ordered.sort_by_key(|(insertion, e)| (e.z_index, *insertion));
        ordered.into_iter().map(|(_, e)| e).collect()
    }

    fn top_z(&self) -> i32 {
        self.elements.iter().map(|e| e.z_index).max().unwrap_or(0)
    }

    fn bottom_z(&self) -> i32 {
        self.elements.iter().map(|e| e.z_index).min().unwrap_or(0)
    }

    // ========================================================================
    // Mutating operations (each records one history snapshot)
    // ========================================================================

    /// Add an element with default geometry centered on the canvas.
    /// Returns the generated id.
    pub fn add_element(&mut self, content: ElementContent) -> u64 {
        let (w, h) = content.default_size();
        let x = (self.canvas_size.0 - w) / 2.0;
        let y = (self.canvas_size.1 - h) / 2.0;
        self.add_element_at((x, y), content)
    }

    /// Add an element at an explicit position with its default size.
    pub fn add_element_at(&mut self, position: (f32, f32), content: ElementContent) -> u64 {
        self.record();
        let (width, height) = content.default_size();
        let id = self.next_element_id;
        self.next_element_id += 1;
        let element = CanvasElement {
            id,
            x: position.0,
            y: position.1,
            width,
            height,
            rotation: 0.0,
            z_index: self.top_z() + 1,
            opacity: 1.0,
            locked: false,
            content,
        };
        self.spatial.upsert(id, element.rect());
        self.elements.push(element);
        id
    }

    /// Remove an element. Unknown ids are silent no-ops; removed ids are
    /// never reused.
    pub fn remove_element(&mut self, id: u64) -> bool {
        let Some(index) = self.elements.iter().position(|e| e.id == id) else {
            return false;
        };
        self.record();
        self.elements.remove(index);
        self.spatial.remove(id);
        true
    }

    /// Remove a batch of elements as a single undoable action (delete of a
    /// multi-selection). Returns how many were actually removed.
    pub fn remove_elements(&mut self, ids: &[u64]) -> usize {
        let existing: Vec<u64> =
            ids.iter().copied().filter(|id| self.get_element(*id).is_some()).collect();
        if existing.is_empty() {
            return 0;
        }
        self.record();
        self.elements.retain(|e| !existing.contains(&e.id));
        for id in &existing {
            self.spatial.remove(*id);
        }
        existing.len()
    }

    /// Clone an element with a fresh id, slightly offset, on top of the
    /// z-order. Returns the new id, or `None` for unknown ids.
    pub fn duplicate_element(&mut self, id: u64) -> Option<u64> {
        let source = self.get_element(id)?.clone();
        self.record();
        let new_id = self.next_element_id;
        self.next_element_id += 1;
        let mut copy = source;
        copy.id = new_id;
        copy.x += DUPLICATE_OFFSET;
        copy.y += DUPLICATE_OFFSET;
        copy.z_index = self.top_z() + 1;
        copy.locked = false;
        self.spatial.upsert(new_id, copy.rect());
        self.elements.push(copy);
        Some(new_id)
    }

    /// Apply a discrete property edit (content/style/geometry from the
    /// property editors) as one undoable action.
    pub fn update_element(&mut self, id: u64, f: impl FnOnce(&mut CanvasElement)) -> bool {
        if self.get_element(id).is_none() {
            return false;
        }
        self.record();
        if let Some(element) = self.elements.iter_mut().find(|e| e.id == id) {
            f(element);
            let rect = element.rect();
            self.spatial.upsert(id, rect);
        }
        true
    }

    /// Lock or unlock an element. Locked elements stay selectable but are
    /// never transformed.
    pub fn set_locked(&mut self, id: u64, locked: bool) -> bool {
        self.update_element(id, |e| e.locked = locked)
    }

    pub fn bring_to_front(&mut self, id: u64) -> bool {
        let top = self.top_z();
        self.update_element(id, |e| e.z_index = top + 1)
    }

    pub fn send_to_back(&mut self, id: u64) -> bool {
        let bottom = self.bottom_z();
        self.update_element(id, |e| e.z_index = bottom - 1)
    }

    /// Move an element one step up in the paint order. No-op at the top.
    pub fn raise(&mut self, id: u64) -> bool {
        self.shift_z(id, 1)
    }

    /// Move an element one step down in the paint order. No-op at the bottom.
    pub fn lower(&mut self, id: u64) -> bool {
        self.shift_z(id, -1)
    }

    /// Swap an element with its neighbor in paint order, then renumber
    /// `z_index` densely so later ties cannot reorder the swap away.
    fn shift_z(&mut self, id: u64, direction: i32) -> bool {
        let mut order: Vec<u64> = self.elements_by_z().iter().map(|e| e.id).collect();
        let Some(pos) = order.iter().position(|&e| e == id) else {
            return false;
        };
        let target = pos as i32 + direction;
        if target < 0 || target as usize >= order.len() {
            return false;
        }
        self.record();
        order.swap(pos, target as usize);
        for (z, element_id) in order.iter().enumerate() {
            if let Some(element) = self.elements.iter_mut().find(|e| e.id == *element_id) {
                element.z_index = z as i32 + 1;
            }
        }
        true
    }

    /// Bulk replace from a template: deep copy of the template elements
    /// with session-fresh ids, canvas size replaced, one snapshot recorded.
    /// Not incremental - existing elements are discarded, never merged.
    pub fn apply_template(&mut self, template: &LogoTemplate) {
        self.record();
        self.elements.clear();
        for proto in &template.elements {
            let mut element = proto.clone();
            element.id = self.next_element_id;
            self.next_element_id += 1;
            self.elements.push(element);
        }
        self.canvas_size = template.canvas_size;
        self.template_id = Some(template.id.to_string());
        self.rebuild_spatial_index();
        debug!(template = template.id, elements = self.elements.len(), "applied template");
    }

    // ========================================================================
    // History
    // ========================================================================

    /// Push the pre-mutation present onto `past`, invalidating any redo
    /// branch. Every discrete mutating action calls this exactly once,
    /// before mutating.
    fn record(&mut self) {
        self.push_snapshot(self.elements.clone());
    }

    fn push_snapshot(&mut self, snapshot: Snapshot) {
        self.past.push(snapshot);
        if self.past.len() > MAX_HISTORY_STATES {
            let overflow = self.past.len() - MAX_HISTORY_STATES;
            self.past.drain(..overflow);
            debug!(dropped = overflow, "trimmed undo history");
        }
        self.future.clear();
        self.dirty = true;
    }

    /// Capture the gesture baseline if one isn't already open. Idempotent
    /// within a gesture so the editor can call it on the first mutating
    /// pointer-move.
    pub fn begin_gesture(&mut self) {
        if self.gesture_baseline.is_none() {
            self.gesture_baseline = Some(self.elements.clone());
        }
    }

    /// Commit the open gesture as a single snapshot. Returns true if a
    /// snapshot was recorded; a gesture with no net change is discarded.
    pub fn commit_gesture(&mut self) -> bool {
        let Some(baseline) = self.gesture_baseline.take() else {
            return false;
        };
        if baseline == self.elements {
            return false;
        }
        self.push_snapshot(baseline);
        true
    }

    /// Drop the open gesture without recording. Present-state mutations made
    /// during the gesture are rolled back to the baseline.
    pub fn abandon_gesture(&mut self) {
        if let Some(baseline) = self.gesture_baseline.take() {
            self.elements = baseline;
            self.rebuild_spatial_index();
        }
    }

    /// Move the tail of `past` into the present, pushing the old present
    /// onto `future`. No-op on empty `past`.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.elements, previous);
        self.future.push(current);
        self.gesture_baseline = None;
        self.rebuild_spatial_index();
        self.dirty = true;
        true
    }

    /// Mirror of [`Canvas::undo`] over `future`.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.elements, next);
        self.past.push(current);
        self.gesture_baseline = None;
        self.rebuild_spatial_index();
        self.dirty = true;
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn history_len(&self) -> usize {
        self.past.len()
    }

    // ========================================================================
    // Viewport
    // ========================================================================

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    // ========================================================================
    // Spatial queries
    // ========================================================================

    pub fn query_elements_at_point(&self, x: f32, y: f32) -> Vec<u64> {
        self.spatial.query_point(x, y)
    }

    pub fn query_elements_in_rect(&self, rect: ElementRect) -> Vec<u64> {
        self.spatial
            .query_rect(rect.x, rect.y, rect.x + rect.width, rect.y + rect.height)
    }

    /// Re-sync one element's bounds after in-gesture geometry mutation.
    pub fn update_spatial_bounds(&mut self, id: u64) {
        if let Some(rect) = self.get_element(id).map(|e| e.rect()) {
            self.spatial.upsert(id, rect);
        }
    }

    pub fn rebuild_spatial_index(&mut self) {
        self.spatial.rebuild(self.elements.iter().map(|e| (e.id, e.rect())));
    }

    // ========================================================================
    // Dirty tracking (persistence is owned by the enclosing store)
    // ========================================================================

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_SIZE)
    }
}
