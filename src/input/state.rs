//! Input state machine - unified state management for pointer gestures.
//!
//! One explicit enum instead of scattered boolean flags, making impossible
//! states unrepresentable.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> DraggingElements     (pointer down on an element body)
//! Idle -> Resizing             (pointer down on a resize handle)
//! Idle -> Rotating             (pointer down on the rotate handle)
//! Idle -> MarqueeSelecting     (pointer down on empty canvas)
//! Idle -> Panning              (pointer down with the pan tool/modifier)
//!
//! Any  -> Idle                 (pointer up - finalizes the gesture)
//! ```
//!
//! Drag-start positions are stored in canvas-local coordinates (screen
//! divided by zoom, pan removed) together with the starting geometry of the
//! affected element(s), so every pointer-move recomputes from the original
//! baseline rather than accumulating rounding error.

use crate::transform::ResizeHandle;
use crate::types::ElementRect;

#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No active gesture
    #[default]
    Idle,

    /// Moving the whole selection
    DraggingElements {
        /// Element under the cursor when the drag started
        primary: u64,
        /// Pointer position at drag start, canvas-local
        start: (f32, f32),
        /// Starting rect of every selected, unlocked element
        origins: Vec<(u64, ElementRect)>,
    },

    /// Resizing a single element from one of its eight handles
    Resizing {
        element_id: u64,
        handle: ResizeHandle,
        /// Pointer position at drag start, canvas-local
        start: (f32, f32),
        /// Geometry at drag start
        origin: ElementRect,
    },

    /// Rotating a single element around its center
    Rotating {
        element_id: u64,
        /// Element center at drag start, canvas-local
        center: (f32, f32),
    },

    /// Rubber-band selection on empty canvas
    MarqueeSelecting {
        /// Canvas-local start corner
        start: (f32, f32),
        /// Canvas-local current corner
        current: (f32, f32),
    },

    /// Viewport panning
    Panning {
        /// Last pointer position, screen pixels
        last: (f32, f32),
    },
}

impl InputState {
    /// True if the gesture mutates element geometry (and therefore needs a
    /// history commit at pointer-up).
    pub fn is_transforming(&self) -> bool {
        matches!(
            self,
            Self::DraggingElements { .. } | Self::Resizing { .. } | Self::Rotating { .. }
        )
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging_elements(&self) -> bool {
        matches!(self, Self::DraggingElements { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing { .. })
    }

    pub fn is_rotating(&self) -> bool {
        matches!(self, Self::Rotating { .. })
    }

    pub fn is_marquee_selecting(&self) -> bool {
        matches!(self, Self::MarqueeSelecting { .. })
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    /// Id of the element being resized, if resizing.
    pub fn resizing_element(&self) -> Option<u64> {
        match self {
            Self::Resizing { element_id, .. } => Some(*element_id),
            _ => None,
        }
    }

    /// Id of the primary dragged element, if dragging.
    pub fn dragged_element(&self) -> Option<u64> {
        match self {
            Self::DraggingElements { primary, .. } => Some(*primary),
            _ => None,
        }
    }

    /// Current marquee rect (normalized), if marquee-selecting.
    pub fn marquee_rect(&self) -> Option<ElementRect> {
        match self {
            Self::MarqueeSelecting { start, current } => {
                let min_x = start.0.min(current.0);
                let min_y = start.1.min(current.1);
                Some(ElementRect::new(
                    min_x,
                    min_y,
                    (current.0 - start.0).abs(),
                    (current.1 - start.1).abs(),
                ))
            }
            _ => None,
        }
    }

    pub fn set_marquee_current(&mut self, pos: (f32, f32)) {
        if let Self::MarqueeSelecting { current, .. } = self {
            *current = pos;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
