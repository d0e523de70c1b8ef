//! Directory lister
//!
//! Produces the visible entries of one directory: hidden entries filtered
//! out, directories first, then case-insensitive by name.

use crate::error::{Error, Result};
use crate::model::types::DirectoryEntry;
use std::fs;
use std::path::Path;

/// Hidden entries start with this marker.
const HIDDEN_MARKER: char = '.';

/// Whether a basename denotes a hidden entry.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with(HIDDEN_MARKER)
}

/// Sort entries for display: directories first, then case-insensitive name.
pub fn sort_entries(entries: &mut [DirectoryEntry]) {
    entries.sort_by(|a, b| {
        b.is_dir
            .cmp(&a.is_dir)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
}

/// List the immediate children of `path`.
///
/// Hidden entries are excluded unless `show_hidden` is set. Fails with
/// `NotFound`/`PermissionDenied` when the directory cannot be read; the
/// navigator surfaces that instead of crashing.
pub fn list_directory(path: &Path, show_hidden: bool) -> Result<Vec<DirectoryEntry>> {
    let read_dir = fs::read_dir(path).map_err(|e| Error::from_io(e, path))?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| Error::from_io(e, path))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !show_hidden && is_hidden(&name) {
            continue;
        }
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        entries.push(DirectoryEntry {
            path: entry.path(),
            name,
            is_dir,
        });
    }

    sort_entries(&mut entries);
    Ok(entries)
}
