use std::fs;

use history_store::{ensure_writable_dir, AtomicFileWriter};
use tempfile::TempDir;

#[test]
fn creates_missing_directory() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("exports").join("history");
    assert!(!nested.exists());
    ensure_writable_dir(&nested).unwrap();
    assert!(nested.is_dir());
}

#[test]
fn rejects_file_in_place_of_directory() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();
    assert!(ensure_writable_dir(&file_path).is_err());
}

#[test]
fn atomic_write_replaces_existing_file() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("history.json", b"one").unwrap();
    let second = writer.write("history.json", b"two").unwrap();

    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "two");
    let leftovers = fs::read_dir(temp.path()).unwrap().count();
    assert_eq!(leftovers, 1);
}
