//! Transform engine - pure geometry for move, handle-based resize, and
//! rotation drags.
//!
//! All math runs in canvas-local units; callers convert pointer deltas from
//! screen space (divide by zoom) before passing them in. Nothing in this
//! module touches the canvas or history - it maps a start rect and a drag
//! delta to a new rect.

use crate::constants::MIN_ELEMENT_SIZE;
use crate::types::ElementRect;
use serde::{Deserialize, Serialize};

/// The eight resize handles around a selected element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeHandle {
    Nw,
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
}

impl ResizeHandle {
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::Nw,
        ResizeHandle::N,
        ResizeHandle::Ne,
        ResizeHandle::E,
        ResizeHandle::Se,
        ResizeHandle::S,
        ResizeHandle::Sw,
        ResizeHandle::W,
    ];

    /// Anchor point on the rect for this handle, in canvas-local units.
    /// Rendered as the grab target; the opposite anchor stays fixed while
    /// resizing.
    pub fn anchor(&self, rect: &ElementRect) -> (f32, f32) {
        let (x, y, w, h) = (rect.x, rect.y, rect.width, rect.height);
        match self {
            ResizeHandle::Nw => (x, y),
            ResizeHandle::N => (x + w / 2.0, y),
            ResizeHandle::Ne => (x + w, y),
            ResizeHandle::E => (x + w, y + h / 2.0),
            ResizeHandle::Se => (x + w, y + h),
            ResizeHandle::S => (x + w / 2.0, y + h),
            ResizeHandle::Sw => (x, y + h),
            ResizeHandle::W => (x, y + h / 2.0),
        }
    }

    /// True if dragging this handle changes the width.
    fn affects_width(&self) -> bool {
        !matches!(self, ResizeHandle::N | ResizeHandle::S)
    }

    /// True if dragging this handle changes the height.
    fn affects_height(&self) -> bool {
        !matches!(self, ResizeHandle::E | ResizeHandle::W)
    }

    /// True if the handle sits on the left edge (x moves with the drag).
    fn on_left_edge(&self) -> bool {
        matches!(self, ResizeHandle::Nw | ResizeHandle::W | ResizeHandle::Sw)
    }

    /// True if the handle sits on the top edge (y moves with the drag).
    fn on_top_edge(&self) -> bool {
        matches!(self, ResizeHandle::Nw | ResizeHandle::N | ResizeHandle::Ne)
    }
}

/// Offset every rect in a multi-selection by the same delta.
///
/// Move is purely additive: the sum of deltas applied over a gesture equals
/// the net displacement regardless of ordering.
pub fn move_rect(start: &ElementRect, dx: f32, dy: f32) -> ElementRect {
    ElementRect::new(start.x + dx, start.y + dy, start.width, start.height)
}

/// Resize `start` by a pointer delta dragged from `handle`.
///
/// The edge/corner opposite the dragged handle stays fixed in canvas-local
/// coordinates, including when the [`MIN_ELEMENT_SIZE`] floor clamps the
/// result: the position shift is derived from the clamped size, not the raw
/// delta. Rotation is never touched by resize.
pub fn resize_rect(start: &ElementRect, handle: ResizeHandle, dx: f32, dy: f32) -> ElementRect {
    let new_width = if handle.affects_width() {
        let grown = if handle.on_left_edge() { start.width - dx } else { start.width + dx };
        grown.max(MIN_ELEMENT_SIZE)
    } else {
        start.width
    };

    let new_height = if handle.affects_height() {
        let grown = if handle.on_top_edge() { start.height - dy } else { start.height + dy };
        grown.max(MIN_ELEMENT_SIZE)
    } else {
        start.height
    };

    // Left/top handles keep the opposite edge fixed by shifting the origin
    // by however much the size actually changed.
    let new_x = if handle.on_left_edge() { start.x + (start.width - new_width) } else { start.x };
    let new_y = if handle.on_top_edge() { start.y + (start.height - new_height) } else { start.y };

    ElementRect::new(new_x, new_y, new_width, new_height)
}

/// Rotation angle in degrees for a pointer position relative to an element
/// center. 0 degrees points along +x; angles grow clockwise in the
/// y-down canvas space.
pub fn rotation_angle(center: (f32, f32), pointer: (f32, f32)) -> f32 {
    let dx = pointer.0 - center.0;
    let dy = pointer.1 - center.1;
    dy.atan2(dx).to_degrees()
}
