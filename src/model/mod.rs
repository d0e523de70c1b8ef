//! Application model
//!
//! Pure, cloneable state split into focused sub-models:
//!
//! - **NavigationModel**: current directory, back-stack, highlight
//! - **UiModel**: screen, toast, text input, quit flag
//!
//! plus the selection set accumulated during a compress workflow.
//! All I/O lives in the app layer; the model only holds state.

pub mod navigation;
pub mod types;
pub mod ui;

pub use navigation::NavigationModel;
pub use types::*;
pub use ui::UiModel;

use std::path::PathBuf;

/// Root application model.
#[derive(Clone, Debug)]
pub struct Model {
    /// Navigator state for the active browse session
    pub navigation: NavigationModel,

    /// Screen, toast, input buffer
    pub ui: UiModel,

    /// Files accumulated for the current compress workflow, in pick order
    pub selection: Vec<PathBuf>,
}

impl Model {
    /// Create the initial model with the navigator rooted at `root`.
    pub fn new(root: PathBuf) -> Self {
        Self {
            navigation: NavigationModel::new(root),
            ui: UiModel::new(),
            selection: Vec::new(),
        }
    }
}
