//! Core types for the brandboard canvas system.
//!
//! This module defines the fundamental data structures used throughout the
//! crate: canvas elements, their content variants, and geometry helpers.

use crate::constants::{
    DEFAULT_FILL_COLOR, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, DEFAULT_IMAGE_SIZE,
    DEFAULT_SHAPE_SIZE, DEFAULT_STROKE_COLOR, DEFAULT_STROKE_WIDTH, DEFAULT_TEXT_COLOR,
    DEFAULT_TEXT_SIZE, MIN_ELEMENT_SIZE,
};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in canvas-local units.
///
/// The transform engine operates on rects; elements carry the same four
/// fields inline so a rect can be lifted out of and written back into an
/// element without conversion cost.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElementRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ElementRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Center point of the rect.
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[inline]
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }

    pub fn intersects(&self, other: &ElementRect) -> bool {
        self.x <= other.x + other.width
            && self.x + self.width >= other.x
            && self.y <= other.y + other.height
            && self.y + self.height >= other.y
    }
}

/// Horizontal alignment for text elements
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Shape kinds available to shape elements
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Circle,
}

impl ShapeKind {
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Circle => "Circle",
        }
    }
}

/// The content of a canvas element.
///
/// Determines how the element is rendered and which style properties the
/// property editors expose. The canvas treats every variant uniformly for
/// geometry purposes; only rendering and property editing branch on it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementContent {
    /// A run of styled text (wordmark, tagline, ...)
    Text {
        content: String,
        font_family: String,
        /// Font size in canvas units
        font_size: f32,
        /// CSS-style weight (400, 700, ...)
        font_weight: u16,
        /// Hex color string, e.g. "#1f2937"
        color: String,
        text_align: TextAlign,
        /// Extra spacing between characters, canvas units
        letter_spacing: f32,
        /// Line height as a multiplier of font size
        line_height: f32,
    },
    /// An external image referenced by URL
    Image {
        src: String,
        alt: String,
        /// Corner rounding in canvas units
        border_radius: f32,
        /// CSS-style filter string, e.g. "grayscale(1)"
        filter: String,
    },
    /// A filled/stroked primitive shape
    Shape {
        shape: ShapeKind,
        /// Hex fill color
        fill: String,
        /// Hex stroke color
        stroke: String,
        stroke_width: f32,
    },
}

impl ElementContent {
    /// Text content with crate-default styling.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            font_weight: 700,
            color: DEFAULT_TEXT_COLOR.to_string(),
            text_align: TextAlign::default(),
            letter_spacing: 0.0,
            line_height: 1.2,
        }
    }

    /// Image content with no styling applied.
    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self::Image {
            src: src.into(),
            alt: alt.into(),
            border_radius: 0.0,
            filter: String::new(),
        }
    }

    /// Shape content with crate-default fill and stroke.
    pub fn shape(shape: ShapeKind) -> Self {
        Self::Shape {
            shape,
            fill: DEFAULT_FILL_COLOR.to_string(),
            stroke: DEFAULT_STROKE_COLOR.to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }

    /// Size an element of this content gets when first seeded onto the canvas.
    pub fn default_size(&self) -> (f32, f32) {
        match self {
            ElementContent::Text { .. } => DEFAULT_TEXT_SIZE,
            ElementContent::Image { .. } => DEFAULT_IMAGE_SIZE,
            ElementContent::Shape { .. } => DEFAULT_SHAPE_SIZE,
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            ElementContent::Text { content, .. } => {
                if content.is_empty() {
                    "Text".to_string()
                } else {
                    content.clone()
                }
            }
            ElementContent::Image { alt, src, .. } => {
                if alt.is_empty() { src.clone() } else { alt.clone() }
            }
            ElementContent::Shape { shape, .. } => shape.label().to_string(),
        }
    }

    pub fn type_label(&self) -> &'static str {
        match self {
            ElementContent::Text { .. } => "TEXT",
            ElementContent::Image { .. } => "IMAGE",
            ElementContent::Shape { shape, .. } => match shape {
                ShapeKind::Rectangle => "RECT",
                ShapeKind::Circle => "CIRCLE",
            },
        }
    }
}

/// An element placed on the logo canvas.
///
/// Geometry is stored in canvas-local units, independent of on-screen
/// zoom/pan. `z_index` defines paint and hit-test precedence; ties are
/// broken by insertion order in the canvas element list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasElement {
    /// Unique within a canvas session; never reused after deletion
    pub id: u64,
    /// Top-left position
    pub x: f32,
    pub y: f32,
    /// Always >= [`MIN_ELEMENT_SIZE`] after any resize
    pub width: f32,
    pub height: f32,
    /// Rotation in degrees around the element center
    pub rotation: f32,
    pub z_index: i32,
    /// 0.0 (transparent) ..= 1.0 (opaque)
    pub opacity: f32,
    /// Locked elements stay selectable but are never transformed
    pub locked: bool,
    pub content: ElementContent,
}

impl CanvasElement {
    pub fn rect(&self) -> ElementRect {
        ElementRect::new(self.x, self.y, self.width, self.height)
    }

    pub fn set_rect(&mut self, rect: ElementRect) {
        self.x = rect.x;
        self.y = rect.y;
        self.width = rect.width.max(MIN_ELEMENT_SIZE);
        self.height = rect.height.max(MIN_ELEMENT_SIZE);
    }

    pub fn center(&self) -> (f32, f32) {
        self.rect().center()
    }
}
