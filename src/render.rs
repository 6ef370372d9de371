//! Render surface - maps canvas state to a paint-ready display list.
//!
//! The crate stays headless: `build_scene` flattens the element list into
//! z-ordered primitives plus selection chrome (outline rects and handle
//! anchors), and the embedder paints them with whatever toolkit it uses.
//! Pointer events travel the opposite direction through
//! [`crate::editor::Editor`].

use crate::canvas::Canvas;
use crate::hit_testing::ROTATE_HANDLE_OFFSET;
use crate::selection::SelectionManager;
use crate::transform::ResizeHandle;
use crate::types::{ElementContent, ElementRect, ShapeKind, TextAlign};

/// One paint operation, already in z order.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderPrimitive {
    Text {
        id: u64,
        rect: ElementRect,
        rotation: f32,
        opacity: f32,
        content: String,
        font_family: String,
        font_size: f32,
        font_weight: u16,
        color: String,
        text_align: TextAlign,
        letter_spacing: f32,
        line_height: f32,
    },
    Image {
        id: u64,
        rect: ElementRect,
        rotation: f32,
        opacity: f32,
        src: String,
        alt: String,
        border_radius: f32,
        filter: String,
    },
    Shape {
        id: u64,
        rect: ElementRect,
        rotation: f32,
        opacity: f32,
        shape: ShapeKind,
        fill: String,
        stroke: String,
        stroke_width: f32,
    },
}

impl RenderPrimitive {
    pub fn element_id(&self) -> u64 {
        match self {
            RenderPrimitive::Text { id, .. }
            | RenderPrimitive::Image { id, .. }
            | RenderPrimitive::Shape { id, .. } => *id,
        }
    }
}

/// Selection chrome for one selected element.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionOverlay {
    pub element_id: u64,
    pub rect: ElementRect,
    pub rotation: f32,
    pub locked: bool,
    /// The eight resize-handle anchors, canvas-local. Empty for locked
    /// elements (their handles are inert and not drawn).
    pub handles: Vec<(ResizeHandle, (f32, f32))>,
    /// Rotate-handle anchor above the top edge, `None` when locked
    pub rotate_handle: Option<(f32, f32)>,
}

/// A complete frame description.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub canvas_size: (f32, f32),
    /// Primitives in paint order (back to front)
    pub primitives: Vec<RenderPrimitive>,
    pub overlays: Vec<SelectionOverlay>,
}

/// Flatten the canvas into a scene. Elements are emitted in ascending
/// `z_index` (insertion order on ties); overlays follow for every selected
/// element still present in the model.
pub fn build_scene(canvas: &Canvas, selection: &SelectionManager) -> Scene {
    let primitives = canvas
        .elements_by_z()
        .into_iter()
        .map(|e| {
            let rect = e.rect();
            match &e.content {
                ElementContent::Text {
                    content,
                    font_family,
                    font_size,
                    font_weight,
                    color,
                    text_align,
                    letter_spacing,
                    line_height,
                } => RenderPrimitive::Text {
                    id: e.id,
                    rect,
                    rotation: e.rotation,
                    opacity: e.opacity,
                    content: content.clone(),
                    font_family: font_family.clone(),
                    font_size: *font_size,
                    font_weight: *font_weight,
                    color: color.clone(),
                    text_align: *text_align,
                    letter_spacing: *letter_spacing,
                    line_height: *line_height,
                },
                ElementContent::Image { src, alt, border_radius, filter } => {
                    RenderPrimitive::Image {
                        id: e.id,
                        rect,
                        rotation: e.rotation,
                        opacity: e.opacity,
                        src: src.clone(),
                        alt: alt.clone(),
                        border_radius: *border_radius,
                        filter: filter.clone(),
                    }
                }
                ElementContent::Shape { shape, fill, stroke, stroke_width } => {
                    RenderPrimitive::Shape {
                        id: e.id,
                        rect,
                        rotation: e.rotation,
                        opacity: e.opacity,
                        shape: *shape,
                        fill: fill.clone(),
                        stroke: stroke.clone(),
                        stroke_width: *stroke_width,
                    }
                }
            }
        })
        .collect();

    let overlays = selection
        .iter()
        .filter_map(|id| canvas.get_element(id))
        .map(|e| {
            let rect = e.rect();
            let (handles, rotate_handle) = if e.locked {
                (Vec::new(), None)
            } else {
                let handles =
                    ResizeHandle::ALL.iter().map(|h| (*h, h.anchor(&rect))).collect();
                let (cx, _) = rect.center();
                (handles, Some((cx, rect.y - ROTATE_HANDLE_OFFSET / canvas.zoom)))
            };
            SelectionOverlay {
                element_id: e.id,
                rect,
                rotation: e.rotation,
                locked: e.locked,
                handles,
                rotate_handle,
            }
        })
        .collect();

    Scene { canvas_size: canvas.canvas_size, primitives, overlays }
}
