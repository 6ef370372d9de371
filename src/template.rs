//! Logo template catalog.
//!
//! Templates are complete element lists the canvas swaps in wholesale via
//! [`crate::canvas::Canvas::apply_template`]. Element ids inside a template
//! are placeholders; the canvas reassigns session-fresh ids on application.

use crate::types::{CanvasElement, ElementContent, ShapeKind, TextAlign};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogoTemplate {
    /// Stable catalog identifier
    pub id: String,
    /// Human-readable name shown in the template picker
    pub name: String,
    pub canvas_size: (f32, f32),
    pub elements: Vec<CanvasElement>,
}

fn element(
    id: u64,
    rect: (f32, f32, f32, f32),
    z_index: i32,
    content: ElementContent,
) -> CanvasElement {
    CanvasElement {
        id,
        x: rect.0,
        y: rect.1,
        width: rect.2,
        height: rect.3,
        rotation: 0.0,
        z_index,
        opacity: 1.0,
        locked: false,
        content,
    }
}

fn text(
    content: &str,
    font_size: f32,
    font_weight: u16,
    color: &str,
    letter_spacing: f32,
) -> ElementContent {
    ElementContent::Text {
        content: content.to_string(),
        font_family: "Inter".to_string(),
        font_size,
        font_weight,
        color: color.to_string(),
        text_align: TextAlign::Center,
        letter_spacing,
        line_height: 1.2,
    }
}

fn shape(kind: ShapeKind, fill: &str, stroke: &str, stroke_width: f32) -> ElementContent {
    ElementContent::Shape {
        shape: kind,
        fill: fill.to_string(),
        stroke: stroke.to_string(),
        stroke_width,
    }
}

static CATALOG: Lazy<Vec<LogoTemplate>> = Lazy::new(|| {
    vec![
        LogoTemplate {
            id: "classic-badge".to_string(),
            name: "Classic Badge".to_string(),
            canvas_size: (500.0, 500.0),
            elements: vec![
                element(1, (100.0, 100.0, 300.0, 300.0), 1, shape(ShapeKind::Circle, "#7c2d12", "#fbbf24", 6.0)),
                element(2, (130.0, 210.0, 240.0, 60.0), 2, text("YOUR RESTAURANT", 28.0, 700, "#fef3c7", 2.0)),
                element(3, (160.0, 280.0, 180.0, 30.0), 3, text("EST. 2024", 16.0, 400, "#fbbf24", 4.0)),
            ],
        },
        LogoTemplate {
            id: "modern-wordmark".to_string(),
            name: "Modern Wordmark".to_string(),
            canvas_size: (600.0, 300.0),
            elements: vec![
                element(1, (60.0, 100.0, 480.0, 70.0), 1, text("restaurant", 56.0, 300, "#111827", 8.0)),
                element(2, (60.0, 185.0, 480.0, 4.0), 2, shape(ShapeKind::Rectangle, "#e11d48", "#e11d48", 0.0)),
                element(3, (60.0, 200.0, 480.0, 28.0), 3, text("FINE DINING", 16.0, 400, "#6b7280", 6.0)),
            ],
        },
        LogoTemplate {
            id: "rustic-emblem".to_string(),
            name: "Rustic Emblem".to_string(),
            canvas_size: (500.0, 500.0),
            elements: vec![
                element(1, (75.0, 75.0, 350.0, 350.0), 1, shape(ShapeKind::Rectangle, "#fef3c7", "#78350f", 8.0)),
                element(2, (115.0, 150.0, 270.0, 80.0), 2, text("The Kitchen", 44.0, 700, "#78350f", 0.0)),
                element(3, (115.0, 250.0, 270.0, 30.0), 3, text("farm to table", 18.0, 400, "#92400e", 3.0)),
                element(4, (225.0, 300.0, 50.0, 50.0), 4, shape(ShapeKind::Circle, "#78350f", "#78350f", 0.0)),
            ],
        },
    ]
});

/// The built-in template catalog.
pub fn catalog() -> &'static [LogoTemplate] {
    &CATALOG
}

/// Look up a template by its catalog id.
pub fn find(id: &str) -> Option<&'static LogoTemplate> {
    CATALOG.iter().find(|t| t.id == id)
}
