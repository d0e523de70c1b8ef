//! Compress and extract workflows

use super::App;
use crate::archive::{self, ArchiveFormat};
use crate::model::types::{BrowsePurpose, DirectoryEntry, Screen};
use crate::utils::format_bytes;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Extraction destination under the browse root.
const EXTRACT_DIR_NAME: &str = "extracted_files";

impl App {
    /// Menu action '1': start accumulating files to compress.
    pub fn begin_compress(&mut self) {
        self.model.selection.clear();
        self.start_browse(BrowsePurpose::PickForCompress);
    }

    /// Menu action '2': pick one archive to extract.
    pub fn begin_extract(&mut self) {
        self.start_browse(BrowsePurpose::PickArchive);
    }

    /// A file was picked during a compress session: record it and restart
    /// the navigator at the browse root for the next pick.
    pub(crate) fn add_to_selection(&mut self, entry: DirectoryEntry) {
        info!("Selected for compression: {:?}", entry.path);
        self.model.selection.push(entry.path);
        self.model.ui.show_toast(format!("Added: {}", entry.name));
        self.start_browse(BrowsePurpose::PickForCompress);
    }

    /// The compress session was aborted: move on to the name prompt when
    /// anything was selected, otherwise return to the menu.
    pub(crate) fn finish_selection(&mut self) {
        if self.model.selection.is_empty() {
            self.model.ui.screen = Screen::Menu;
            return;
        }
        self.model.ui.input = self.config.default_archive_name.clone();
        self.model.ui.screen = Screen::NameInput;
    }

    /// Confirm the typed archive name and run the compress job.
    ///
    /// No password is solicited in this flow; the backend capability stays
    /// unused until a password prompt is wired in.
    pub fn confirm_archive_name(&mut self) {
        let typed = self.model.ui.input.trim().to_string();
        let name = if typed.is_empty() {
            self.config.default_archive_name.clone()
        } else {
            typed
        };
        let destination = self.resolve_output_path(&name);

        let files = std::mem::take(&mut self.model.selection);
        match archive::compress(&files, &destination, None) {
            Ok(()) => {
                let total = total_size(&files);
                self.show_notice(format!(
                    "Compressed {} file(s) ({}) to {}",
                    files.len(),
                    format_bytes(total),
                    destination.display()
                ));
            }
            Err(e) => {
                self.report_error(e);
                self.model.ui.screen = Screen::Menu;
            }
        }
        self.model.ui.input.clear();
    }

    /// Cancel the name prompt, discarding the selection.
    pub fn cancel_archive_name(&mut self) {
        self.model.selection.clear();
        self.model.ui.input.clear();
        self.model.ui.screen = Screen::Menu;
    }

    /// Extract the picked archive into `<root>/extracted_files`.
    pub(crate) fn run_extract(&mut self, archive_path: PathBuf) {
        // Validate the suffix before touching the filesystem
        if let Err(e) = ArchiveFormat::from_path(&archive_path) {
            self.report_error(e);
            self.model.ui.screen = Screen::Menu;
            return;
        }

        let destination = self.browse_root.join(EXTRACT_DIR_NAME);
        let result = fs::create_dir_all(&destination)
            .map_err(|e| crate::error::Error::from_io(e, &destination))
            .and_then(|()| archive::extract(&archive_path, &destination, None));

        match result {
            Ok(()) => {
                self.show_notice(format!("Extracted to {}", destination.display()));
            }
            Err(e) => {
                self.report_error(e);
                self.model.ui.screen = Screen::Menu;
            }
        }
    }

    /// Relative output names land under the browse root; absolute paths and
    /// names with directory components are used as typed.
    fn resolve_output_path(&self, name: &str) -> PathBuf {
        let path = Path::new(name);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.browse_root.join(path)
        }
    }

    fn show_notice(&mut self, message: String) {
        self.model.ui.notice = Some(message);
        self.model.ui.screen = Screen::Notice;
    }
}

fn total_size(files: &[PathBuf]) -> u64 {
    files
        .iter()
        .filter_map(|p| fs::metadata(p).ok())
        .map(|m| m.len())
        .sum()
}
