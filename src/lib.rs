//! arctui - terminal archive manager
//!
//! Browse the filesystem, bundle selected files into a zip/tar archive
//! (optionally AES-password-protected zip), or extract an existing archive.
//! A single-image re-encoding utility is included as a library module.

pub mod app;
pub mod archive;
pub mod config;
pub mod error;
pub mod handlers;
pub mod image_ops;
pub mod logic;
pub mod model;
pub mod ui;
pub mod utils;
