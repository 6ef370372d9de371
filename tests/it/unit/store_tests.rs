//! Store persistence tests.

use brandboard::project::Project;
use brandboard::store::{BuilderMode, Store};
use std::fs;

#[test]
fn state_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let store = Store::open(&path);
    let project = Project::new("Tony's Trattoria");
    let project_id = project.id;
    store.set_active_project(Some(project));
    store.set_active_mode(BuilderMode::Menu);
    store.save().unwrap();

    let reopened = Store::open(&path);
    let project = reopened.active_project().unwrap();
    assert_eq!(project.name, "Tony's Trattoria");
    assert_eq!(project.id, project_id);
    assert_eq!(reopened.active_mode(), BuilderMode::Menu);
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("state.json");

    let store = Store::open(&path);
    store.set_active_project(Some(Project::new("Nested")));
    store.save().unwrap();

    assert!(path.exists());
}

#[test]
fn corrupt_state_file_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    fs::write(&path, "{not valid json!!").unwrap();

    let store = Store::open(&path);
    assert!(store.active_project().is_none());
    assert_eq!(store.active_mode(), BuilderMode::Logo);

    // And the next save replaces the corrupt file cleanly.
    store.set_active_project(Some(Project::new("Recovered")));
    store.save().unwrap();
    let reopened = Store::open(&path);
    assert_eq!(reopened.active_project().unwrap().name, "Recovered");
}

#[test]
fn update_project_mutates_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open(dir.path().join("state.json"));
    store.set_active_project(Some(Project::new("Before")));

    let applied = store.update_project(|p| {
        p.name = "After".to_string();
        p.business.cuisine = "Italian".to_string();
    });

    assert!(applied);
    let project = store.active_project().unwrap();
    assert_eq!(project.name, "After");
    assert_eq!(project.business.cuisine, "Italian");
}

#[test]
fn saved_file_is_valid_pretty_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    let store = Store::open(&path);
    store.set_active_project(Some(Project::new("Pretty")));
    store.save().unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["active_project"]["name"], "Pretty");
    assert!(raw.contains('\n'), "expected pretty-printed output");
}

#[test]
fn clones_share_state() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open(dir.path().join("state.json"));
    let clone = store.clone();

    store.set_active_mode(BuilderMode::Site);
    assert_eq!(clone.active_mode(), BuilderMode::Site);
}
