//! Logo export tests.

use crate::helpers::TestCanvasBuilder;
use brandboard::canvas::Canvas;
use brandboard::export;
use brandboard::template;
use brandboard::types::ShapeKind;

#[test]
fn exported_payload_carries_elements_in_full() {
    let canvas = TestCanvasBuilder::new()
        .with_text("Brand", (10.0, 20.0))
        .with_shape(ShapeKind::Circle, (250.0, 0.0))
        .build();

    let mut buf = Vec::new();
    export::write_json(&canvas, &mut buf).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

    let elements = value["elements"].as_array().unwrap();
    assert_eq!(elements.len(), 2);
    assert_eq!(elements[0]["content"]["type"], "text");
    assert_eq!(elements[0]["x"].as_f64().unwrap(), 10.0);
    assert_eq!(elements[1]["content"]["type"], "shape");
    assert_eq!(elements[1]["content"]["shape"], "circle");
}

#[test]
fn export_records_applied_template() {
    let mut canvas = Canvas::new_for_test();
    canvas.apply_template(template::find("classic-badge").unwrap());

    let mut buf = Vec::new();
    export::write_json(&canvas, &mut buf).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

    assert_eq!(value["template"], "classic-badge");
    assert_eq!(value["canvas_size"][0].as_f64().unwrap(), 500.0);
}

#[test]
fn export_without_template_is_null() {
    let canvas = Canvas::new_for_test();
    let mut buf = Vec::new();
    export::write_json(&canvas, &mut buf).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert!(value["template"].is_null());
}

#[test]
fn export_writes_a_parseable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logo.json");
    let canvas = TestCanvasBuilder::new().with_text("File", (0.0, 0.0)).build();

    export::write_json_file(&canvas, &path).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["elements"].as_array().unwrap().len(), 1);
    assert!(value["exported_at"].as_u64().unwrap() > 0);
    assert!(raw.ends_with('\n'));
}
