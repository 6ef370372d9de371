//! Crate-wide constants.
//!
//! Centralizes magic numbers and geometry defaults to keep the editor
//! modules self-documenting.

// ============================================================================
// Element Geometry
// ============================================================================

/// Hard floor for element width and height after any resize.
/// Prevents degenerate/invisible elements.
pub const MIN_ELEMENT_SIZE: f32 = 20.0;

/// Default text element size when seeded onto the canvas
pub const DEFAULT_TEXT_SIZE: (f32, f32) = (200.0, 48.0);

/// Default image element size when seeded onto the canvas
pub const DEFAULT_IMAGE_SIZE: (f32, f32) = (160.0, 160.0);

/// Default shape element size when seeded onto the canvas
pub const DEFAULT_SHAPE_SIZE: (f32, f32) = (120.0, 120.0);

/// Offset applied to duplicated elements so the copy is visible
pub const DUPLICATE_OFFSET: f32 = 16.0;

// ============================================================================
// Canvas
// ============================================================================

/// Default logo canvas size in canvas-local units
pub const DEFAULT_CANVAS_SIZE: (f32, f32) = (500.0, 500.0);

/// Minimum zoom level
pub const MIN_ZOOM: f32 = 0.1;

/// Maximum zoom level
pub const MAX_ZOOM: f32 = 5.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f32 = 1.0;

// ============================================================================
// History
// ============================================================================

/// Maximum undo history snapshots to keep
pub const MAX_HISTORY_STATES: usize = 50;

// ============================================================================
// Input Handling
// ============================================================================

/// Half-size of the square hit area around a resize handle, in screen
/// pixels at zoom 1.0
pub const HANDLE_HIT_RADIUS: f32 = 8.0;

/// Minimum marquee extent for a drag to count as a selection box
/// rather than a click
pub const MIN_MARQUEE_SIZE: f32 = 5.0;

// ============================================================================
// Style Defaults
// ============================================================================

/// Default font size for text elements
pub const DEFAULT_FONT_SIZE: f32 = 32.0;

/// Default font family for text elements
pub const DEFAULT_FONT_FAMILY: &str = "Inter";

/// Default text color
pub const DEFAULT_TEXT_COLOR: &str = "#1f2937";

/// Default shape fill color
pub const DEFAULT_FILL_COLOR: &str = "#e11d48";

/// Default shape stroke color
pub const DEFAULT_STROKE_COLOR: &str = "#1f2937";

/// Default shape stroke width
pub const DEFAULT_STROKE_WIDTH: f32 = 0.0;
