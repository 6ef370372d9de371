//! Undo/Redo integration tests.

use crate::helpers::{assert_element_count, canvas_with_text, canvas_with_texts, TestCanvasBuilder};
use brandboard::canvas::Canvas;
use brandboard::constants::MAX_HISTORY_STATES;
use brandboard::types::ElementContent;

#[test]
fn undo_redo_add_remove_sequence() {
    let mut canvas = canvas_with_texts(&["Element A", "Element B", "Element C"]);
    assert_element_count(&canvas, 3);

    let second = canvas.elements[1].id;
    canvas.remove_element(second);
    assert_element_count(&canvas, 2);

    canvas.undo();
    assert_element_count(&canvas, 3);

    canvas.redo();
    assert_element_count(&canvas, 2);
}

#[test]
fn undo_restores_geometry_after_property_edit() {
    let mut canvas = canvas_with_text("Movable");
    let id = canvas.elements[0].id;

    canvas.update_element(id, |e| {
        e.x = 100.0;
        e.y = 100.0;
    });
    canvas.update_element(id, |e| {
        e.x = 200.0;
        e.y = 200.0;
    });

    canvas.undo();
    let element = canvas.get_element(id).unwrap();
    assert_eq!((element.x, element.y), (100.0, 100.0));

    canvas.undo();
    let element = canvas.get_element(id).unwrap();
    assert_eq!((element.x, element.y), (0.0, 0.0));
}

#[test]
fn undo_restores_text_content() {
    let mut canvas = canvas_with_text("Version 1");
    let id = canvas.elements[0].id;

    canvas.update_element(id, |e| {
        e.content = ElementContent::text("Version 2");
    });

    canvas.undo();
    if let ElementContent::Text { content, .. } = &canvas.get_element(id).unwrap().content {
        assert_eq!(content, "Version 1");
    } else {
        panic!("element is not text");
    }
}

#[test]
fn new_action_after_undo_prunes_redo_branch() {
    let mut canvas = canvas_with_texts(&["A", "B", "C"]);

    canvas.undo();
    canvas.undo();
    assert_element_count(&canvas, 1);
    assert!(canvas.can_redo());

    canvas.add_element_at((300.0, 0.0), ElementContent::text("D"));
    assert!(!canvas.can_redo());
    assert!(!canvas.redo());
}

#[test]
fn undo_at_boundary_is_idempotent() {
    let mut canvas = canvas_with_text("Only element");
    canvas.undo();

    for _ in 0..10 {
        assert!(!canvas.undo());
        assert_element_count(&canvas, 0);
    }
}

#[test]
fn redo_at_boundary_is_idempotent() {
    let mut canvas = canvas_with_text("Only element");
    for _ in 0..10 {
        assert!(!canvas.redo());
    }
    assert_element_count(&canvas, 1);
}

#[test]
fn add_undo_redo_restores_same_element_id() {
    let mut canvas = Canvas::new_for_test();
    let id = canvas.add_element(ElementContent::text("Logo"));

    canvas.undo();
    assert!(canvas.get_element(id).is_none());

    canvas.redo();
    assert!(canvas.get_element(id).is_some());
}

#[test]
fn deleted_ids_are_never_reused() {
    let mut canvas = Canvas::new_for_test();
    let first = canvas.add_element(ElementContent::text("one"));
    canvas.undo();
    assert_element_count(&canvas, 0);

    let second = canvas.add_element(ElementContent::text("two"));
    assert!(second > first);
}

#[test]
fn history_respects_limit() {
    let canvas = TestCanvasBuilder::new().with_n_texts(MAX_HISTORY_STATES + 20).build();
    assert!(canvas.history_len() <= MAX_HISTORY_STATES);
}

#[test]
fn oldest_states_are_dropped_when_capped() {
    let mut canvas = TestCanvasBuilder::new().with_n_texts(MAX_HISTORY_STATES + 20).build();

    // Walk undo all the way back; the earliest reachable state is not the
    // empty canvas anymore because the oldest snapshots were dropped.
    while canvas.undo() {}
    assert!(!canvas.elements.is_empty());
}
