//! Navigator and workflow tests driven through the app layer
//!
//! These use real temp directories so listing, descent, back-stack, and the
//! compress/extract workflows run end to end without a terminal.

use arctui::app::App;
use arctui::config::Config;
use arctui::model::types::{BrowsePurpose, Screen};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// root/
///   docs/        (dir)
///     inner/     (dir)
///       deep.txt
///     readme.txt
///   a.txt
///   b.txt
///   .hidden
fn make_tree() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::create_dir_all(root.join("docs").join("inner")).unwrap();
    fs::write(root.join("docs").join("inner").join("deep.txt"), "deep").unwrap();
    fs::write(root.join("docs").join("readme.txt"), "readme").unwrap();
    fs::write(root.join("a.txt"), "hello").unwrap();
    fs::write(root.join("b.txt"), "world").unwrap();
    fs::write(root.join(".hidden"), "nope").unwrap();
    tmp
}

fn make_app(root: &Path) -> App {
    App::new(Config::default(), root.to_path_buf())
}

fn highlight(app: &mut App, name: &str) {
    let idx = app
        .model
        .navigation
        .entries
        .iter()
        .position(|e| e.name == name)
        .unwrap_or_else(|| panic!("entry {} not listed", name));
    app.model.navigation.selected = Some(idx);
}

#[test]
fn test_listing_hides_dotfiles_and_sorts_dirs_first() {
    let tmp = make_tree();
    let mut app = make_app(tmp.path());
    app.start_browse(BrowsePurpose::PickForCompress);

    let names: Vec<&str> = app
        .model
        .navigation
        .entries
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, ["docs", "a.txt", "b.txt"]);
    assert_eq!(app.model.navigation.selected, Some(0));
}

#[test]
fn test_descend_and_back_follow_the_stack() {
    let tmp = make_tree();
    let mut app = make_app(tmp.path());
    app.start_browse(BrowsePurpose::PickForCompress);

    highlight(&mut app, "docs");
    app.activate_selected(BrowsePurpose::PickForCompress);
    assert_eq!(app.model.navigation.current_dir, tmp.path().join("docs"));
    assert_eq!(app.model.navigation.selected, Some(0));

    highlight(&mut app, "inner");
    app.activate_selected(BrowsePurpose::PickForCompress);
    assert_eq!(
        app.model.navigation.current_dir,
        tmp.path().join("docs").join("inner")
    );

    app.navigate_back();
    assert_eq!(app.model.navigation.current_dir, tmp.path().join("docs"));
    app.navigate_back();
    assert_eq!(app.model.navigation.current_dir, tmp.path());

    // Back at the root the stack is empty and back is a no-op
    app.navigate_back();
    assert_eq!(app.model.navigation.current_dir, tmp.path());
}

#[test]
fn test_picking_files_accumulates_and_restarts_at_root() {
    let tmp = make_tree();
    let mut app = make_app(tmp.path());
    app.start_browse(BrowsePurpose::PickForCompress);

    highlight(&mut app, "a.txt");
    app.activate_selected(BrowsePurpose::PickForCompress);
    assert_eq!(app.model.selection, vec![tmp.path().join("a.txt")]);
    // Each pick starts a fresh navigator session at the root
    assert_eq!(app.model.navigation.current_dir, tmp.path());
    assert!(app.model.navigation.back_stack.is_empty());

    // Pick a nested file on the second pass
    highlight(&mut app, "docs");
    app.activate_selected(BrowsePurpose::PickForCompress);
    highlight(&mut app, "readme.txt");
    app.activate_selected(BrowsePurpose::PickForCompress);
    assert_eq!(
        app.model.selection,
        vec![
            tmp.path().join("a.txt"),
            tmp.path().join("docs").join("readme.txt")
        ]
    );
}

#[test]
fn test_abort_with_empty_selection_returns_to_menu() {
    let tmp = make_tree();
    let mut app = make_app(tmp.path());
    app.start_browse(BrowsePurpose::PickForCompress);

    app.abort_browse(BrowsePurpose::PickForCompress);
    assert_eq!(app.model.ui.screen, Screen::Menu);
}

#[test]
fn test_abort_with_selection_opens_prompt_with_default_name() {
    let tmp = make_tree();
    let mut app = make_app(tmp.path());
    app.start_browse(BrowsePurpose::PickForCompress);

    highlight(&mut app, "a.txt");
    app.activate_selected(BrowsePurpose::PickForCompress);
    app.abort_browse(BrowsePurpose::PickForCompress);

    assert_eq!(app.model.ui.screen, Screen::NameInput);
    assert_eq!(app.model.ui.input, "compressed_files.zip");
}

#[test]
fn test_compress_workflow_end_to_end() {
    let tmp = make_tree();
    let mut app = make_app(tmp.path());
    app.start_browse(BrowsePurpose::PickForCompress);

    highlight(&mut app, "a.txt");
    app.activate_selected(BrowsePurpose::PickForCompress);
    highlight(&mut app, "b.txt");
    app.activate_selected(BrowsePurpose::PickForCompress);
    app.abort_browse(BrowsePurpose::PickForCompress);

    app.model.ui.input = "bundle.tar.gz".to_string();
    app.confirm_archive_name();

    assert_eq!(app.model.ui.screen, Screen::Notice);
    assert!(tmp.path().join("bundle.tar.gz").is_file());
    assert!(app.model.selection.is_empty());
}

#[test]
fn test_unsupported_archive_name_returns_to_menu_with_error() {
    let tmp = make_tree();
    let mut app = make_app(tmp.path());
    app.start_browse(BrowsePurpose::PickForCompress);

    highlight(&mut app, "a.txt");
    app.activate_selected(BrowsePurpose::PickForCompress);
    app.abort_browse(BrowsePurpose::PickForCompress);

    app.model.ui.input = "bundle.rar".to_string();
    app.confirm_archive_name();

    assert_eq!(app.model.ui.screen, Screen::Menu);
    let (message, _) = app.model.ui.toast.as_ref().expect("an error toast");
    assert!(message.starts_with("Error:"), "got {:?}", message);
    assert!(!tmp.path().join("bundle.rar").exists());
}

#[test]
fn test_extract_workflow_end_to_end() {
    let tmp = make_tree();

    // Produce an archive to pick
    arctui::archive::compress(
        &[tmp.path().join("a.txt"), tmp.path().join("b.txt")],
        &tmp.path().join("bundle.zip"),
        None,
    )
    .unwrap();

    let mut app = make_app(tmp.path());
    app.start_browse(BrowsePurpose::PickArchive);
    highlight(&mut app, "bundle.zip");
    app.activate_selected(BrowsePurpose::PickArchive);

    assert_eq!(app.model.ui.screen, Screen::Notice);
    let out = tmp.path().join("extracted_files");
    assert_eq!(fs::read(out.join("a.txt")).unwrap(), b"hello");
    assert_eq!(fs::read(out.join("b.txt")).unwrap(), b"world");
}

#[test]
fn test_extracting_a_non_archive_surfaces_an_error() {
    let tmp = make_tree();
    let mut app = make_app(tmp.path());
    app.start_browse(BrowsePurpose::PickArchive);

    highlight(&mut app, "a.txt");
    app.activate_selected(BrowsePurpose::PickArchive);

    assert_eq!(app.model.ui.screen, Screen::Menu);
    assert!(app.model.ui.toast.is_some());
    assert!(!tmp.path().join("extracted_files").exists());
}

#[test]
fn test_activate_on_empty_directory_is_a_noop() {
    let tmp = TempDir::new().unwrap();
    let mut app = make_app(tmp.path());
    app.start_browse(BrowsePurpose::PickForCompress);

    assert!(app.model.navigation.entries.is_empty());
    assert_eq!(app.model.navigation.selected, None);

    app.move_selection_down();
    app.move_selection_up();
    app.activate_selected(BrowsePurpose::PickForCompress);

    assert_eq!(app.model.navigation.selected, None);
    assert!(app.model.selection.is_empty());
    assert_eq!(app.model.ui.screen, Screen::Browse(BrowsePurpose::PickForCompress));
}

#[test]
fn test_wrap_around_across_the_listing() {
    let tmp = make_tree();
    let mut app = make_app(tmp.path());
    app.start_browse(BrowsePurpose::PickForCompress);

    let n = app.model.navigation.entries.len();
    assert_eq!(app.model.navigation.selected, Some(0));

    // Moving up from the top wraps to the last entry
    app.move_selection_up();
    assert_eq!(app.model.navigation.selected, Some(n - 1));

    // N moves down return to the starting index
    for _ in 0..n {
        app.move_selection_down();
    }
    assert_eq!(app.model.navigation.selected, Some(n - 1));
}
