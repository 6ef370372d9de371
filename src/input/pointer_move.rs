//! Pointer move - live transform application.
//!
//! This is the hot path: it fires at native event cadence during drags.
//! Every update recomputes from the gesture's captured baseline (start
//! position + starting rects), so intermediate moves neither accumulate
//! floating-point drift nor touch history.

use crate::editor::Editor;
use crate::input::InputState;
use crate::profile_scope;
use crate::transform;
use crate::types::ElementRect;

impl Editor {
    pub fn pointer_move(&mut self, screen: (f32, f32)) {
        profile_scope!("pointer_move");

        let pos = self.viewport().screen_to_canvas(screen);

        // Non-transforming gestures mutate the input state itself, so they
        // are handled before the transform dispatch borrows it.
        if self.input_state.is_marquee_selecting() {
            self.input_state.set_marquee_current(pos);
            return;
        }
        if let InputState::Panning { last } = self.input_state {
            self.canvas.pan.0 += screen.0 - last.0;
            self.canvas.pan.1 += screen.1 - last.1;
            self.input_state = InputState::Panning { last: screen };
            return;
        }

        enum Update {
            Move { dx: f32, dy: f32, origins: Vec<(u64, ElementRect)> },
            Resize { id: u64, rect: ElementRect },
            Rotate { id: u64, angle: f32 },
        }

        let update = match &self.input_state {
            InputState::DraggingElements { start, origins, .. } => Update::Move {
                dx: pos.0 - start.0,
                dy: pos.1 - start.1,
                origins: origins.clone(),
            },
            InputState::Resizing { element_id, handle, start, origin } => Update::Resize {
                id: *element_id,
                rect: transform::resize_rect(origin, *handle, pos.0 - start.0, pos.1 - start.1),
            },
            InputState::Rotating { element_id, center } => Update::Rotate {
                id: *element_id,
                angle: transform::rotation_angle(*center, pos),
            },
            _ => return,
        };

        match update {
            Update::Move { dx, dy, origins } => {
                profile_scope!("element_drag");
                for (id, origin) in origins {
                    if let Some(element) = self.canvas.get_element_mut(id) {
                        element.set_rect(transform::move_rect(&origin, dx, dy));
                    }
                }
            }
            Update::Resize { id, rect } => {
                profile_scope!("element_resize");
                if let Some(element) = self.canvas.get_element_mut(id) {
                    element.set_rect(rect);
                }
            }
            Update::Rotate { id, angle } => {
                if let Some(element) = self.canvas.get_element_mut(id) {
                    element.rotation = angle;
                }
            }
        }
        self.canvas.mark_dirty();
    }
}
