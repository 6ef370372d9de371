//! The canvas editor - wires canvas, selection, input state, and hit
//! testing together.
//!
//! The editor consumes pointer events in screen coordinates (the embedder
//! forwards them untranslated) and owns every interaction rule: selection
//! semantics, gesture lifecycles, and the single-snapshot-per-gesture
//! history policy. Committed states are pushed up through the commit
//! handler; the editor never persists anything itself.

use crate::canvas::Canvas;
use crate::hit_testing::HitTester;
use crate::input::InputState;
use crate::input::coords::Viewport;
use crate::selection::SelectionManager;
use crate::template::LogoTemplate;
use crate::types::ElementContent;

/// Called with the canvas after every committed mutation so the enclosing
/// application store can fold the new state into the active project.
pub type CommitHandler = Box<dyn FnMut(&Canvas)>;

pub struct Editor {
    pub canvas: Canvas,
    pub selection: SelectionManager,
    pub input_state: InputState,
    pub(crate) hit_tester: HitTester,
    on_commit: Option<CommitHandler>,
}

impl Editor {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            selection: SelectionManager::new(),
            input_state: InputState::Idle,
            hit_tester: HitTester::new(),
            on_commit: None,
        }
    }

    /// Register the project-update callback invoked on every commit.
    pub fn on_commit(&mut self, handler: CommitHandler) {
        self.on_commit = Some(handler);
    }

    pub(crate) fn viewport(&self) -> Viewport {
        Viewport::new(self.canvas.pan, self.canvas.zoom)
    }

    pub(crate) fn notify_commit(&mut self) {
        if let Some(handler) = self.on_commit.as_mut() {
            handler(&self.canvas);
        }
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Select an element. Unknown ids are silent no-ops.
    pub fn select(&mut self, id: u64, multi: bool) {
        if self.canvas.get_element(id).is_none() {
            return;
        }
        self.selection.select(id, multi);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // ========================================================================
    // Viewport gestures
    // ========================================================================

    /// Start a pan gesture (space-drag / middle button, decided by the
    /// embedder). Subsequent pointer-moves scroll the viewport; pointer-up
    /// ends it. Pans never touch history.
    pub fn begin_pan(&mut self, screen: (f32, f32)) {
        self.input_state = InputState::Panning { last: screen };
    }

    // ========================================================================
    // Discrete actions (snapshot-per-action, committed immediately)
    // ========================================================================

    /// Add an element centered on the canvas and select it.
    pub fn add_element(&mut self, content: ElementContent) -> u64 {
        let id = self.canvas.add_element(content);
        self.selection.select(id, false);
        self.notify_commit();
        id
    }

    /// Delete the current selection as one undoable action.
    pub fn delete_selected(&mut self) {
        let ids = self.selection.ids();
        if ids.is_empty() {
            return;
        }
        if self.canvas.remove_elements(&ids) > 0 {
            self.selection.clear();
            self.notify_commit();
        }
    }

    /// Duplicate every selected element; the copies become the selection.
    pub fn duplicate_selected(&mut self) {
        let ids = self.selection.ids();
        if ids.is_empty() {
            return;
        }
        self.selection.clear();
        for id in ids {
            if let Some(copy) = self.canvas.duplicate_element(id) {
                self.selection.insert(copy);
            }
        }
        self.notify_commit();
    }

    /// Apply a property edit to one element as one undoable action.
    pub fn update_element(&mut self, id: u64, f: impl FnOnce(&mut crate::types::CanvasElement)) {
        if self.canvas.update_element(id, f) {
            self.notify_commit();
        }
    }

    /// Bulk replace the canvas from a template. Selection is cleared; the
    /// replacement is a single undoable action.
    pub fn apply_template(&mut self, template: &LogoTemplate) {
        self.canvas.apply_template(template);
        self.selection.clear();
        self.notify_commit();
    }

    // ========================================================================
    // History
    // ========================================================================

    /// Undo the last action. Selection is cleared so it can never reference
    /// elements that no longer exist in the restored state.
    pub fn undo(&mut self) -> bool {
        let moved = self.canvas.undo();
        if moved {
            self.selection.clear();
            self.input_state.reset();
            self.notify_commit();
        }
        moved
    }

    /// Mirror of [`Editor::undo`].
    pub fn redo(&mut self) -> bool {
        let moved = self.canvas.redo();
        if moved {
            self.selection.clear();
            self.input_state.reset();
            self.notify_commit();
        }
        moved
    }
}
