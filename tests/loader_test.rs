mod common;

use rosgen::error::Error;
use rosgen::loader::load_application;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_demo_description_matches_sample_app() {
    let app = load_application(common::demo_description()).unwrap();
    assert_eq!(app, common::automatic_app());
}

#[test]
fn test_null_description_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("null.json");
    fs::write(&path, "null").unwrap();

    assert!(matches!(load_application(&path), Err(Error::InvalidInput(_))));
}

#[test]
fn test_json_description() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("app.json");
    fs::write(
        &path,
        r#"{"name": "bare", "executors": [{"name": "a", "kind": "k"}, {"name": "a", "kind": "k"}]}"#,
    )
    .unwrap();

    let app = load_application(&path).unwrap();
    assert_eq!(app.executors().len(), 2);
    assert!(app.packages.is_empty());
}

#[test]
fn test_directory_is_not_a_description() {
    let temp_dir = TempDir::new().unwrap();
    assert!(matches!(load_application(temp_dir.path()), Err(Error::ConfigError(_))));
}
