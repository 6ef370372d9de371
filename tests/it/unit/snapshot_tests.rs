//! Serialization snapshot tests using the insta crate.
//!
//! The JSON shapes pinned here are the persisted document and export
//! formats; a failing snapshot means saved projects from older builds may
//! no longer load. Review changes with `cargo insta review`.

use brandboard::project::LogoConfig;
use brandboard::types::{CanvasElement, ElementContent, ShapeKind, TextAlign};

#[test]
fn snapshot_text_element() {
    let element = CanvasElement {
        id: 7,
        x: 40.0,
        y: 60.0,
        width: 200.0,
        height: 80.0,
        rotation: 0.0,
        z_index: 2,
        opacity: 1.0,
        locked: false,
        content: ElementContent::Text {
            content: "Trattoria".to_string(),
            font_family: "Inter".to_string(),
            font_size: 32.0,
            font_weight: 700,
            color: "#1f2937".to_string(),
            text_align: TextAlign::Center,
            letter_spacing: 0.0,
            line_height: 1.0,
        },
    };
    insta::assert_json_snapshot!(element, @r##"
    {
      "id": 7,
      "x": 40.0,
      "y": 60.0,
      "width": 200.0,
      "height": 80.0,
      "rotation": 0.0,
      "z_index": 2,
      "opacity": 1.0,
      "locked": false,
      "content": {
        "type": "text",
        "content": "Trattoria",
        "font_family": "Inter",
        "font_size": 32.0,
        "font_weight": 700,
        "color": "#1f2937",
        "text_align": "center",
        "letter_spacing": 0.0,
        "line_height": 1.0
      }
    }
    "##);
}

#[test]
fn snapshot_shape_element() {
    let element = CanvasElement {
        id: 3,
        x: 100.0,
        y: 100.0,
        width: 120.0,
        height: 120.0,
        rotation: 45.0,
        z_index: 1,
        opacity: 1.0,
        locked: true,
        content: ElementContent::Shape {
            shape: ShapeKind::Circle,
            fill: "#7c2d12".to_string(),
            stroke: "#fbbf24".to_string(),
            stroke_width: 6.0,
        },
    };
    insta::assert_json_snapshot!(element, @r##"
    {
      "id": 3,
      "x": 100.0,
      "y": 100.0,
      "width": 120.0,
      "height": 120.0,
      "rotation": 45.0,
      "z_index": 1,
      "opacity": 1.0,
      "locked": true,
      "content": {
        "type": "shape",
        "shape": "circle",
        "fill": "#7c2d12",
        "stroke": "#fbbf24",
        "stroke_width": 6.0
      }
    }
    "##);
}

#[test]
fn snapshot_empty_logo_config() {
    let config = LogoConfig {
        elements: Vec::new(),
        canvas_size: (500.0, 500.0),
        template_id: None,
    };
    insta::assert_json_snapshot!(config, @r##"
    {
      "elements": [],
      "canvas_size": [
        500.0,
        500.0
      ],
      "template_id": null
    }
    "##);
}
