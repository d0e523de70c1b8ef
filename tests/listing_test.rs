//! Directory lister tests against a real filesystem

use arctui::error::Error;
use arctui::logic::listing;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_hidden_entries_are_excluded_by_default() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("visible.txt"), "x").unwrap();
    fs::write(tmp.path().join(".hidden"), "x").unwrap();
    fs::create_dir(tmp.path().join(".git")).unwrap();

    let entries = listing::list_directory(tmp.path(), false).unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["visible.txt"]);
}

#[test]
fn test_show_hidden_includes_dotfiles() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("visible.txt"), "x").unwrap();
    fs::write(tmp.path().join(".hidden"), "x").unwrap();

    let entries = listing::list_directory(tmp.path(), true).unwrap();
    assert_eq!(entries.len(), 2);
}

#[test]
fn test_directories_sort_before_files() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("aaa.txt"), "x").unwrap();
    fs::create_dir(tmp.path().join("zzz")).unwrap();

    let entries = listing::list_directory(tmp.path(), false).unwrap();
    assert!(entries[0].is_dir);
    assert_eq!(entries[0].name, "zzz");
    assert_eq!(entries[1].name, "aaa.txt");
}

#[test]
fn test_missing_directory_is_not_found() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nope");

    let err = listing::list_directory(&missing, false).unwrap_err();
    assert!(matches!(err, Error::NotFound(p) if p == missing));
}

#[test]
fn test_empty_directory_lists_empty() {
    let tmp = TempDir::new().unwrap();
    let entries = listing::list_directory(tmp.path(), false).unwrap();
    assert!(entries.is_empty());
}
