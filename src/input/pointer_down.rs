//! Pointer down - selection, gesture initiation.
//!
//! Priority order on pointer-down: resize/rotate handles of a
//! single-selected element, then the topmost element under the pointer,
//! then empty canvas (clear selection, start marquee).

use crate::editor::Editor;
use crate::hit_testing::HandleHit;
use crate::input::{InputState, Modifiers};
use crate::profile_scope;
use crate::types::ElementRect;

impl Editor {
    pub fn pointer_down(&mut self, screen: (f32, f32), modifiers: Modifiers) {
        profile_scope!("pointer_down");

        let pos = self.viewport().screen_to_canvas(screen);

        // Handles take precedence over element bodies, but only when exactly
        // one element is selected (that is when handle chrome is rendered).
        if self.selection.len() == 1 {
            let selected = self.selection.ids()[0];
            if let Some(element) = self.canvas.get_element(selected) {
                let rect = element.rect();
                let locked = element.locked;
                if let Some(hit) =
                    self.hit_tester.handle_at(&rect, pos.0, pos.1, self.canvas.zoom)
                {
                    // Locked elements keep their handles inert
                    if locked {
                        return;
                    }
                    self.canvas.begin_gesture();
                    self.input_state = match hit {
                        HandleHit::Resize(handle) => InputState::Resizing {
                            element_id: selected,
                            handle,
                            start: pos,
                            origin: rect,
                        },
                        HandleHit::Rotate => {
                            InputState::Rotating { element_id: selected, center: rect.center() }
                        }
                    };
                    return;
                }
            }
        }

        if let Some(hit_id) = self.hit_tester.topmost_at(&self.canvas, pos.0, pos.1) {
            if modifiers.shift {
                self.selection.select(hit_id, true);
            } else if self.selection.contains(hit_id) {
                // Clicked an already-selected element: keep the group so the
                // whole selection moves together.
            } else {
                self.selection.select(hit_id, false);
            }

            // A shift-click that removed the element from the selection
            // starts no gesture.
            if !self.selection.contains(hit_id) {
                return;
            }

            // Capture starting geometry of every selected, unlocked element.
            // Locked elements ride along in the selection but never move.
            let origins: Vec<(u64, ElementRect)> = self
                .selection
                .iter()
                .filter_map(|id| self.canvas.get_element(id))
                .filter(|e| !e.locked)
                .map(|e| (e.id, e.rect()))
                .collect();

            if origins.is_empty() {
                return;
            }
            self.canvas.begin_gesture();
            self.input_state = InputState::DraggingElements { primary: hit_id, start: pos, origins };
            return;
        }

        // Empty canvas: clear selection and open a marquee.
        if !modifiers.shift {
            self.selection.clear();
        }
        self.input_state = InputState::MarqueeSelecting { start: pos, current: pos };
    }
}
