//! Coordinate conversion between screen pixels and canvas-local units.
//!
//! Centralized so the pointer handlers never duplicate the zoom/pan
//! formulas. Canvas-local coordinates are independent of on-screen zoom and
//! pan: `canvas = (screen - pan) / zoom`.

/// Viewport parameters needed for a conversion.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    /// Pan offset in screen pixels
    pub pan: (f32, f32),
    pub zoom: f32,
}

impl Viewport {
    #[inline]
    pub fn new(pan: (f32, f32), zoom: f32) -> Self {
        Self { pan, zoom }
    }

    #[inline]
    pub fn screen_to_canvas(&self, screen: (f32, f32)) -> (f32, f32) {
        (
            (screen.0 - self.pan.0) / self.zoom,
            (screen.1 - self.pan.1) / self.zoom,
        )
    }

    #[inline]
    pub fn canvas_to_screen(&self, canvas: (f32, f32)) -> (f32, f32) {
        (
            canvas.0 * self.zoom + self.pan.0,
            canvas.1 * self.zoom + self.pan.1,
        )
    }

    /// Convert a screen-space delta to canvas units (drag math).
    #[inline]
    pub fn delta_to_canvas(&self, delta: (f32, f32)) -> (f32, f32) {
        (delta.0 / self.zoom, delta.1 / self.zoom)
    }
}
