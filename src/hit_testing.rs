//! Hit testing - topmost element resolution and handle detection.
//!
//! The spatial index supplies candidates in O(log n); this module resolves
//! z-order precedence (higher `z_index` wins, insertion order breaks ties)
//! and detects grabs on the resize/rotate handles of the selected element.

use crate::canvas::Canvas;
use crate::constants::HANDLE_HIT_RADIUS;
use crate::transform::ResizeHandle;
use crate::types::ElementRect;

/// Distance from the top-center handle to the rotate handle, screen pixels
/// at zoom 1.0.
pub const ROTATE_HANDLE_OFFSET: f32 = 24.0;

/// What a pointer-down landed on within a selected element's chrome.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HandleHit {
    Resize(ResizeHandle),
    Rotate,
}

pub struct HitTester;

impl HitTester {
    pub fn new() -> Self {
        Self
    }

    /// Topmost element whose bounds contain the canvas-local point.
    /// Locked elements are still hit (they remain selectable).
    pub fn topmost_at(&self, canvas: &Canvas, x: f32, y: f32) -> Option<u64> {
        let candidates = canvas.query_elements_at_point(x, y);
        if candidates.is_empty() {
            return None;
        }
        canvas
            .elements
            .iter()
            .enumerate()
            .filter(|(_, e)| candidates.contains(&e.id))
            .max_by_key(|(insertion, e)| (e.z_index, *insertion))
            .map(|(_, e)| e.id)
    }

    /// Test the canvas-local point against the handle chrome of `rect`.
    /// Handle hit areas are sized in screen pixels, so the tolerance shrinks
    /// in canvas units as zoom grows.
    pub fn handle_at(&self, rect: &ElementRect, x: f32, y: f32, zoom: f32) -> Option<HandleHit> {
        let radius = HANDLE_HIT_RADIUS / zoom;

        let (cx, _) = rect.center();
        let rotate_anchor = (cx, rect.y - ROTATE_HANDLE_OFFSET / zoom);
        if near(rotate_anchor, (x, y), radius) {
            return Some(HandleHit::Rotate);
        }

        for handle in ResizeHandle::ALL {
            if near(handle.anchor(rect), (x, y), radius) {
                return Some(HandleHit::Resize(handle));
            }
        }
        None
    }
}

impl Default for HitTester {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn near(anchor: (f32, f32), point: (f32, f32), radius: f32) -> bool {
    (point.0 - anchor.0).abs() <= radius && (point.1 - anchor.1).abs() <= radius
}
