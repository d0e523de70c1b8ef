//! Shared model types

use std::path::PathBuf;

/// One visible entry of the browsed directory.
///
/// Recomputed on every listing; never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Absolute path of the entry
    pub path: PathBuf,
    /// Display name (basename)
    pub name: String,
    /// Whether the entry is a directory
    pub is_dir: bool,
}

/// What the current browse session is picking a file for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrowsePurpose {
    /// Accumulating files for a compress job
    PickForCompress,
    /// Picking one archive to extract
    PickArchive,
}

/// Which screen the session controller is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    /// Startup banner, dismissed by any key
    Splash,
    /// Top-level menu: compress / extract / quit
    Menu,
    /// Directory browser (the navigator)
    Browse(BrowsePurpose),
    /// Text prompt for the output archive name
    NameInput,
    /// Completion notice, dismissed by any key
    Notice,
}
