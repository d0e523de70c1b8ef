//! Navigator operations: browse session lifecycle and movement

use super::App;
use crate::logic::{listing, navigation};
use crate::model::types::{BrowsePurpose, Screen};
use crate::model::NavigationModel;

impl App {
    /// Start a fresh single-use browse session at the browse root.
    pub fn start_browse(&mut self, purpose: BrowsePurpose) {
        self.model.navigation = NavigationModel::new(self.browse_root.clone());
        if self.reload_entries() {
            self.model.ui.screen = Screen::Browse(purpose);
        } else {
            // Root itself is unreadable; nothing to browse
            self.model.ui.screen = Screen::Menu;
        }
    }

    /// Re-list the current directory into the model.
    ///
    /// Returns false when the listing failed; the error has already been
    /// surfaced on the status line.
    pub fn reload_entries(&mut self) -> bool {
        match listing::list_directory(&self.model.navigation.current_dir, self.config.show_hidden)
        {
            Ok(entries) => {
                self.model.navigation.set_entries(entries);
                true
            }
            Err(e) => {
                self.report_error(e);
                false
            }
        }
    }

    pub fn move_selection_up(&mut self) {
        let nav = &mut self.model.navigation;
        nav.selected = navigation::move_up(nav.selected, nav.entries.len());
    }

    pub fn move_selection_down(&mut self) {
        let nav = &mut self.model.navigation;
        nav.selected = navigation::move_down(nav.selected, nav.entries.len());
    }

    /// Activate the highlighted entry: descend into a directory, or yield
    /// a file to the workflow that started the session.
    pub fn activate_selected(&mut self, purpose: BrowsePurpose) {
        let Some(entry) = self.model.navigation.selected_entry().cloned() else {
            return; // empty listing, nothing to activate
        };

        if entry.is_dir {
            self.model.navigation.enter(entry.path);
            if !self.reload_entries() {
                // Unreadable directory; step back to where we were
                self.model.navigation.go_back();
                self.reload_entries();
            }
            return;
        }

        match purpose {
            BrowsePurpose::PickForCompress => self.add_to_selection(entry),
            BrowsePurpose::PickArchive => self.run_extract(entry.path),
        }
    }

    /// Pop the back-stack. No-op when already at the session root.
    pub fn navigate_back(&mut self) {
        if self.model.navigation.go_back() {
            self.reload_entries();
        }
    }

    /// Abort the browse session without picking anything.
    pub fn abort_browse(&mut self, purpose: BrowsePurpose) {
        match purpose {
            BrowsePurpose::PickForCompress => self.finish_selection(),
            BrowsePurpose::PickArchive => {
                self.model.ui.screen = Screen::Menu;
            }
        }
    }
}
