//! Application layer: the session controller and navigator operations
//!
//! Owns the model and performs all I/O (directory listing, archive calls),
//! converting backend errors into status messages instead of letting them
//! terminate the process.

pub mod file_ops;
pub mod navigation;

use crate::config::Config;
use crate::error::Error;
use crate::model::Model;
use std::path::PathBuf;

pub struct App {
    pub model: Model,
    pub config: Config,
    /// Root directory every browse session starts from
    pub browse_root: PathBuf,
}

impl App {
    pub fn new(config: Config, browse_root: PathBuf) -> Self {
        Self {
            model: Model::new(browse_root.clone()),
            config,
            browse_root,
        }
    }

    /// Surface a backend error on the status line and log it.
    pub(crate) fn report_error(&mut self, err: Error) {
        tracing::warn!("operation failed: {}", err);
        self.model.ui.show_toast(format!("Error: {}", err));
    }
}
