//! Integration tests for the Trefunge loader.
//!
//! These tests build program directories on disk and check discovery,
//! ordering, and the failure modes of `load_dir`.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use trefunge_common::Position;
use trefunge_loader::{discover, load_dir, LoadError};

fn write(dir: &Path, name: &str, text: &str) {
    fs::write(dir.join(name), text).unwrap();
}

#[test]
fn single_layer_program() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "0.3f", "2+.@");

    let volume = load_dir(dir.path()).unwrap();
    assert_eq!(volume.depth(), 1);
    assert_eq!(volume.entry(), 0);
    let layer = volume.layer(0).unwrap();
    assert_eq!((layer.width(), layer.height()), (4, 1));
}

#[test]
fn negative_layers_sort_below_zero() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "0.3f", "b");
    write(dir.path(), "_1.3f", "a");
    write(dir.path(), "10.3f", "d");
    write(dir.path(), "2.3f", "c");

    let volume = load_dir(dir.path()).unwrap();
    assert_eq!(volume.depth(), 4);
    assert_eq!(volume.entry(), 1);
    let cells: String = (0..4)
        .map(|z| volume.cell(Position::new(0, 0, z)).unwrap())
        .collect();
    assert_eq!(cells, "abcd");
}

#[test]
fn unrelated_files_are_ignored() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "0.3f", "@");
    write(dir.path(), "expected_output.txt", "");
    write(dir.path(), "notes.3f", "garbage");
    write(dir.path(), "1.bf", "garbage");
    fs::create_dir(dir.path().join("sub")).unwrap();

    let files = discover(dir.path()).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].number, 0);
}

#[test]
fn missing_zero_layer_is_fatal() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "1.3f", "@");
    write(dir.path(), "_1.3f", "@");

    let err = load_dir(dir.path()).unwrap_err();
    assert!(matches!(err, LoadError::NoEntryLayer { .. }));
    assert!(err.to_string().contains("no entry layer"));
}

#[test]
fn duplicate_numbers_are_fatal() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "0.3f", "@");
    write(dir.path(), "1.3f", "@");
    write(dir.path(), "01.3f", "@");

    let err = load_dir(dir.path()).unwrap_err();
    match err {
        LoadError::DuplicateLayer { number, first, second } => {
            assert_eq!(number, 1);
            assert_eq!(first, "01.3f");
            assert_eq!(second, "1.3f");
        }
        other => panic!("expected DuplicateLayer, got {other:?}"),
    }
}

#[test]
fn missing_directory_is_fatal() {
    let dir = TempDir::new().unwrap();
    let err = load_dir(&dir.path().join("nope")).unwrap_err();
    assert!(matches!(err, LoadError::ReadDir { .. }));
}

#[test]
fn non_utf8_layer_is_fatal() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("0.3f"), [0xff, 0xfe, 0x40]).unwrap();

    let err = load_dir(dir.path()).unwrap_err();
    assert!(matches!(err, LoadError::ReadLayer { .. }));
}

#[test]
fn trailing_newline_adds_blank_row() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "0.3f", "v\n>@\n");

    let volume = load_dir(dir.path()).unwrap();
    let layer = volume.layer(0).unwrap();
    assert_eq!(layer.height(), 3);
    assert_eq!(layer.width(), 2);
    assert_eq!(layer.row(0).as_deref(), Some("v "));
    assert_eq!(layer.row(2).as_deref(), Some("  "));
}
