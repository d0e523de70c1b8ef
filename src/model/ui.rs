//! UI state: current screen, status toast, text input, quit flag

use super::types::Screen;
use std::time::Instant;

/// How long a status toast stays on screen.
const TOAST_DURATION_MS: u128 = 3500;

/// UI state for the session controller.
#[derive(Clone, Debug)]
pub struct UiModel {
    /// Screen currently shown
    pub screen: Screen,
    /// Transient status/error message with the time it was shown
    pub toast: Option<(String, Instant)>,
    /// Buffer for the archive-name prompt
    pub input: String,
    /// Text of the completion notice screen
    pub notice: Option<String>,
    /// Set when the user chooses quit at the menu
    pub should_quit: bool,
}

impl UiModel {
    pub fn new() -> Self {
        Self {
            screen: Screen::Splash,
            toast: None,
            input: String::new(),
            notice: None,
            should_quit: false,
        }
    }

    /// Show a transient status message.
    pub fn show_toast(&mut self, message: String) {
        self.toast = Some((message, Instant::now()));
    }

    /// Whether the current toast has been on screen long enough to dismiss.
    pub fn should_dismiss_toast(&self) -> bool {
        self.toast
            .as_ref()
            .map(|(_, shown_at)| shown_at.elapsed().as_millis() >= TOAST_DURATION_MS)
            .unwrap_or(false)
    }

    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }
}

impl Default for UiModel {
    fn default() -> Self {
        Self::new()
    }
}
