//! Navigator state
//!
//! Stack-based directory browsing: current directory, the back-stack of
//! previously visited directories, the cached entry listing, and the
//! highlighted index into it.

use super::types::DirectoryEntry;
use std::path::PathBuf;

/// Navigation state for one browse session.
///
/// Invariant: `selected` is `Some(i)` with `i < entries.len()` whenever
/// `entries` is non-empty, and `None` when it is empty.
#[derive(Clone, Debug)]
pub struct NavigationModel {
    /// Directory currently being listed
    pub current_dir: PathBuf,
    /// Previously visited directories, most recent last
    pub back_stack: Vec<PathBuf>,
    /// Visible entries of `current_dir`
    pub entries: Vec<DirectoryEntry>,
    /// Highlighted index into `entries`
    pub selected: Option<usize>,
}

impl NavigationModel {
    /// Fresh navigator rooted at `root` with an empty back-stack.
    pub fn new(root: PathBuf) -> Self {
        Self {
            current_dir: root,
            back_stack: Vec::new(),
            entries: Vec::new(),
            selected: None,
        }
    }

    /// Replace the entry listing, resetting the highlight to the top.
    pub fn set_entries(&mut self, entries: Vec<DirectoryEntry>) {
        self.selected = if entries.is_empty() { None } else { Some(0) };
        self.entries = entries;
    }

    /// Currently highlighted entry, if any.
    pub fn selected_entry(&self) -> Option<&DirectoryEntry> {
        self.selected.and_then(|i| self.entries.get(i))
    }

    /// Descend into `dir`, remembering the current directory on the stack.
    pub fn enter(&mut self, dir: PathBuf) {
        let previous = std::mem::replace(&mut self.current_dir, dir);
        self.back_stack.push(previous);
    }

    /// Pop the back-stack into the current directory.
    ///
    /// Returns false (and leaves the state untouched) when the stack is
    /// empty, i.e. the session is already at its root.
    pub fn go_back(&mut self) -> bool {
        match self.back_stack.pop() {
            Some(previous) => {
                self.current_dir = previous;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, is_dir: bool) -> DirectoryEntry {
        DirectoryEntry {
            path: PathBuf::from(format!("/tmp/{}", name)),
            name: name.to_string(),
            is_dir,
        }
    }

    #[test]
    fn test_new_navigator_is_empty() {
        let nav = NavigationModel::new(PathBuf::from("/home/user"));
        assert_eq!(nav.current_dir, PathBuf::from("/home/user"));
        assert!(nav.back_stack.is_empty());
        assert!(nav.entries.is_empty());
        assert!(nav.selected.is_none());
    }

    #[test]
    fn test_set_entries_resets_highlight() {
        let mut nav = NavigationModel::new(PathBuf::from("/a"));
        nav.set_entries(vec![entry("x", false), entry("y", true)]);
        assert_eq!(nav.selected, Some(0));

        nav.selected = Some(1);
        nav.set_entries(vec![entry("z", false)]);
        assert_eq!(nav.selected, Some(0));

        nav.set_entries(Vec::new());
        assert_eq!(nav.selected, None);
    }

    #[test]
    fn test_back_stack_is_lifo() {
        let mut nav = NavigationModel::new(PathBuf::from("/a"));
        nav.enter(PathBuf::from("/a/b"));
        nav.enter(PathBuf::from("/a/b/c"));
        nav.enter(PathBuf::from("/a/b/c/d"));

        assert!(nav.go_back());
        assert_eq!(nav.current_dir, PathBuf::from("/a/b/c"));
        assert!(nav.go_back());
        assert_eq!(nav.current_dir, PathBuf::from("/a/b"));
        assert!(nav.go_back());
        assert_eq!(nav.current_dir, PathBuf::from("/a"));

        // At the root the stack is empty and back is a no-op
        assert!(!nav.go_back());
        assert_eq!(nav.current_dir, PathBuf::from("/a"));
    }
}
