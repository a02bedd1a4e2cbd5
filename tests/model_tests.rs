//! Integration tests for the document I/O model
//!
//! Covers the file handle lifecycle and whole-file read/write behavior

use std::fs;
use tempfile::TempDir;

use notepad::error::EditorError;
use notepad::model::EditorModel;

#[test]
fn test_model_starts_unbound() {
    let model = EditorModel::new();

    assert!(!model.is_bound());
    assert!(model.current_file_path().is_none());
}

#[test]
fn test_set_current_file_does_not_touch_disk() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("never_created.txt");

    let mut model = EditorModel::new();
    model.set_current_file(file_path.clone());

    assert!(model.is_bound());
    assert_eq!(model.current_file_path(), Some(file_path.as_path()));
    assert!(!file_path.exists());
}

#[test]
fn test_write_then_read_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("round_trip.txt");

    let mut model = EditorModel::new();
    model.set_current_file(file_path);

    let text = "First line\nSecond line\nThird line";
    model.write_current_file(text).unwrap();

    let lines = model.read_current_file().unwrap();
    assert_eq!(lines, vec!["First line", "Second line", "Third line"]);
    assert_eq!(lines.join("\n"), text);
}

#[test]
fn test_read_unbound_fails() {
    let model = EditorModel::new();

    let err = model.read_current_file().unwrap_err();
    assert!(matches!(err, EditorError::NoFile));
}

#[test]
fn test_write_unbound_fails() {
    let model = EditorModel::new();

    let err = model.write_current_file("text").unwrap_err();
    assert!(matches!(err, EditorError::NoFile));
}

#[test]
fn test_read_missing_file_reports_file_access() {
    let temp_dir = TempDir::new().unwrap();
    let mut model = EditorModel::new();
    model.set_current_file(temp_dir.path().join("missing.txt"));

    let err = model.read_current_file().unwrap_err();
    assert!(matches!(err, EditorError::FileAccess { .. }));
    // the message should point at the offending path
    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn test_write_overwrites_entire_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("overwrite.txt");
    fs::write(&file_path, "a much longer original content\nwith lines").unwrap();

    let mut model = EditorModel::new();
    model.set_current_file(file_path.clone());
    model.write_current_file("short").unwrap();

    assert_eq!(fs::read_to_string(&file_path).unwrap(), "short");
}

#[test]
fn test_read_preserves_line_order() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("ordered.txt");
    fs::write(&file_path, "1\n2\n3\n4\n5").unwrap();

    let mut model = EditorModel::new();
    model.set_current_file(file_path);

    let lines = model.read_current_file().unwrap();
    assert_eq!(lines, vec!["1", "2", "3", "4", "5"]);
}
