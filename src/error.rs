//! Error types for the archive and image backends

use std::path::PathBuf;
use thiserror::Error;

/// Backend error type. The session controller converts these into
/// status-line messages instead of terminating the process.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Path does not exist
    #[error("Not found: {0}")]
    NotFound(PathBuf),

    /// Access to a path was denied
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Destination/archive suffix is not one of the recognized formats
    #[error("Unsupported archive format: {0}")]
    UnsupportedFormat(String),

    /// Decryption of a password-protected archive failed
    #[error("Wrong password for archive: {0}")]
    WrongPassword(PathBuf),

    /// Archive-level failure (malformed container, codec error)
    #[error("Archive error: {0}")]
    Archive(String),

    /// Image decode/encode failure
    #[error("Image error: {0}")]
    Image(String),
}

impl Error {
    /// Classify a raw I/O error against the path that produced it.
    pub fn from_io(err: std::io::Error, path: &std::path::Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => Error::PermissionDenied(path.to_path_buf()),
            _ => Error::Io(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
