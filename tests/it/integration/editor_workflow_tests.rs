//! Editor workflow tests - discrete actions, selection, commit plumbing.

use crate::helpers::{
    assert_element_count, assert_element_position, place_shape, track_commits, TestCanvasBuilder,
};
use brandboard::canvas::Canvas;
use brandboard::constants::DUPLICATE_OFFSET;
use brandboard::editor::Editor;
use brandboard::types::{ElementContent, ShapeKind};

#[test]
fn add_element_selects_it_and_commits() {
    let mut editor = Editor::new(Canvas::new_for_test());
    let commits = track_commits(&mut editor);

    let id = editor.add_element(ElementContent::text("Brand"));

    assert_element_count(&editor.canvas, 1);
    assert!(editor.selection.contains(id));
    assert_eq!(editor.selection.len(), 1);
    assert_eq!(commits.get(), 1);
}

#[test]
fn added_element_is_centered_on_canvas() {
    let mut editor = Editor::new(Canvas::new_for_test());
    let id = editor.add_element(ElementContent::shape(ShapeKind::Rectangle));

    // 120x120 shape on a 500x500 canvas
    assert_element_position(&editor.canvas, id, (190.0, 190.0));
}

#[test]
fn delete_selected_removes_batch_as_single_undo() {
    let mut editor = TestCanvasBuilder::new().with_n_texts(3).build_editor();
    let ids: Vec<u64> = editor.canvas.elements.iter().map(|e| e.id).collect();
    editor.select(ids[0], false);
    editor.select(ids[2], true);

    editor.delete_selected();
    assert_element_count(&editor.canvas, 1);
    assert!(editor.selection.is_empty());

    editor.undo();
    assert_element_count(&editor.canvas, 3);
}

#[test]
fn delete_with_empty_selection_is_a_noop() {
    let mut editor = TestCanvasBuilder::new().with_n_texts(2).build_editor();
    let commits = track_commits(&mut editor);
    let history_before = editor.canvas.history_len();

    editor.delete_selected();

    assert_element_count(&editor.canvas, 2);
    assert_eq!(editor.canvas.history_len(), history_before);
    assert_eq!(commits.get(), 0);
}

#[test]
fn duplicate_selected_offsets_copies_and_selects_them() {
    let mut canvas = Canvas::new_for_test();
    let a = place_shape(&mut canvas, (100.0, 100.0));
    let mut editor = Editor::new(canvas);
    editor.select(a, false);

    editor.duplicate_selected();

    assert_element_count(&editor.canvas, 2);
    assert!(!editor.selection.contains(a));
    let copy = editor.selection.ids()[0];
    assert_element_position(&editor.canvas, copy, (100.0 + DUPLICATE_OFFSET, 100.0 + DUPLICATE_OFFSET));
    // The copy lands on top of the z-order
    let canvas = &editor.canvas;
    assert!(canvas.get_element(copy).unwrap().z_index > canvas.get_element(a).unwrap().z_index);
}

#[test]
fn duplicating_a_locked_element_yields_an_unlocked_copy() {
    let mut canvas = Canvas::new_for_test();
    let a = place_shape(&mut canvas, (100.0, 100.0));
    canvas.set_locked(a, true);
    let mut editor = Editor::new(canvas);
    editor.select(a, false);

    editor.duplicate_selected();

    let copy = editor.selection.ids()[0];
    assert!(!editor.canvas.get_element(copy).unwrap().locked);
}

#[test]
fn selecting_unknown_id_is_a_noop() {
    let mut editor = TestCanvasBuilder::new().with_n_texts(1).build_editor();
    editor.select(999, false);
    assert!(editor.selection.is_empty());
}

#[test]
fn plain_select_collapses_previous_selection() {
    let mut editor = TestCanvasBuilder::new().with_n_texts(2).build_editor();
    let ids: Vec<u64> = editor.canvas.elements.iter().map(|e| e.id).collect();

    editor.select(ids[0], false);
    editor.select(ids[1], false);

    assert_eq!(editor.selection.len(), 1);
    assert!(editor.selection.contains(ids[1]));
}

#[test]
fn undo_clears_selection_and_input_state() {
    let mut editor = Editor::new(Canvas::new_for_test());
    let id = editor.add_element(ElementContent::text("gone after undo"));
    assert!(editor.selection.contains(id));

    assert!(editor.undo());
    assert!(editor.selection.is_empty());
    assert!(editor.input_state.is_idle());
}

#[test]
fn undo_and_redo_report_when_nothing_happens() {
    let mut editor = Editor::new(Canvas::new_for_test());
    let commits = track_commits(&mut editor);

    assert!(!editor.undo());
    assert!(!editor.redo());
    assert_eq!(commits.get(), 0);
}

#[test]
fn z_order_actions_round_trip_through_history() {
    let mut editor = TestCanvasBuilder::new().with_n_texts(2).build_editor();
    let ids: Vec<u64> = editor.canvas.elements.iter().map(|e| e.id).collect();
    let original_z = editor.canvas.get_element(ids[0]).unwrap().z_index;

    editor.canvas.bring_to_front(ids[0]);
    assert!(
        editor.canvas.get_element(ids[0]).unwrap().z_index
            > editor.canvas.get_element(ids[1]).unwrap().z_index
    );

    editor.canvas.undo();
    assert_eq!(editor.canvas.get_element(ids[0]).unwrap().z_index, original_z);
}

#[test]
fn raise_and_lower_step_through_paint_order() {
    let mut editor = TestCanvasBuilder::new().with_n_texts(3).build_editor();
    let ids: Vec<u64> = editor.canvas.elements.iter().map(|e| e.id).collect();

    let paint_order = |canvas: &Canvas| -> Vec<u64> {
        canvas.elements_by_z().iter().map(|e| e.id).collect()
    };
    assert_eq!(paint_order(&editor.canvas), vec![ids[0], ids[1], ids[2]]);

    assert!(editor.canvas.raise(ids[0]));
    assert_eq!(paint_order(&editor.canvas), vec![ids[1], ids[0], ids[2]]);

    assert!(editor.canvas.lower(ids[2]));
    assert_eq!(paint_order(&editor.canvas), vec![ids[1], ids[2], ids[0]]);

    // Boundary steps are no-ops and record nothing
    let history_before = editor.canvas.history_len();
    assert!(!editor.canvas.raise(ids[0]));
    assert!(!editor.canvas.lower(ids[1]));
    assert_eq!(editor.canvas.history_len(), history_before);
}

#[test]
fn property_edit_through_editor_commits() {
    let mut editor = TestCanvasBuilder::new().with_n_texts(1).build_editor();
    let id = editor.canvas.elements[0].id;
    let commits = track_commits(&mut editor);

    editor.update_element(id, |e| e.opacity = 0.5);

    assert_eq!(editor.canvas.get_element(id).unwrap().opacity, 0.5);
    assert_eq!(commits.get(), 1);
}
