//! Pointer up - gesture finalization.
//!
//! Transform gestures commit at most one history snapshot here (the
//! gesture's baseline); a gesture with no net geometry change commits
//! nothing, which is also how an abandoned drag ends. Marquee selection is
//! finalized with an O(log n + k) rect query against the spatial index.

use crate::constants::MIN_MARQUEE_SIZE;
use crate::editor::Editor;
use crate::input::{InputState, Modifiers};
use crate::profile_scope;

impl Editor {
    pub fn pointer_up(&mut self, _screen: (f32, f32), modifiers: Modifiers) {
        profile_scope!("pointer_up");

        if self.input_state.is_transforming() {
            // Re-sync spatial bounds for everything the gesture touched.
            match &self.input_state {
                InputState::DraggingElements { origins, .. } => {
                    let ids: Vec<u64> = origins.iter().map(|(id, _)| *id).collect();
                    for id in ids {
                        self.canvas.update_spatial_bounds(id);
                    }
                }
                InputState::Resizing { element_id, .. } => {
                    let id = *element_id;
                    self.canvas.update_spatial_bounds(id);
                }
                _ => {}
            }

            if self.canvas.commit_gesture() {
                self.notify_commit();
            }
        } else if let Some(rect) = self.input_state.marquee_rect() {
            // Ignore click-sized marquees; the selection was already cleared
            // on pointer-down.
            let threshold = MIN_MARQUEE_SIZE / self.canvas.zoom;
            if rect.width > threshold || rect.height > threshold {
                for id in self.canvas.query_elements_in_rect(rect) {
                    if modifiers.shift {
                        self.selection.toggle(id);
                    } else {
                        self.selection.insert(id);
                    }
                }
            }
        }

        self.input_state.reset();
    }
}
