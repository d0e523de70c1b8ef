//! Archive backend: suffix-dispatched compression and extraction
//!
//! The destination/source filename suffix is parsed once into a closed
//! [`ArchiveFormat`] at the boundary; everything downstream dispatches on the
//! variant. An unrecognized suffix fails fast with
//! [`Error::UnsupportedFormat`](crate::error::Error::UnsupportedFormat)
//! before any filesystem write.

pub mod tar;
pub mod zip;

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::info;

use self::tar::TarCompression;

/// The closed set of supported archive formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
    Tar,
    TarGz,
    TarBz2,
    TarXz,
}

impl ArchiveFormat {
    /// Recognized filename suffixes, in dispatch precedence order.
    pub const SUFFIXES: [&'static str; 5] = [".zip", ".tar.gz", ".tar.bz2", ".tar.xz", ".tar"];

    /// Parse a format from a filename suffix.
    ///
    /// Compound tar suffixes are checked before plain `.tar` so that
    /// `backup.tar.gz` never parses as an uncompressed tar.
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        if name.ends_with(".zip") {
            Ok(ArchiveFormat::Zip)
        } else if name.ends_with(".tar.gz") {
            Ok(ArchiveFormat::TarGz)
        } else if name.ends_with(".tar.bz2") {
            Ok(ArchiveFormat::TarBz2)
        } else if name.ends_with(".tar.xz") {
            Ok(ArchiveFormat::TarXz)
        } else if name.ends_with(".tar") {
            Ok(ArchiveFormat::Tar)
        } else {
            Err(Error::UnsupportedFormat(path.display().to_string()))
        }
    }

}

/// Compress `files` into `destination`, each stored under its basename only.
///
/// The format is selected by the destination suffix. A `password` is applied
/// only to ZIP output (AES-256); it is ignored by the tar variants, which
/// have no encryption support.
pub fn compress(files: &[PathBuf], destination: &Path, password: Option<&str>) -> Result<()> {
    let format = ArchiveFormat::from_path(destination)?;

    // Validate sources before the destination file is created, so a bad
    // selection never leaves a partial archive behind.
    for file in files {
        if !file.is_file() {
            return Err(Error::NotFound(file.clone()));
        }
    }

    info!("Compressing {} file(s) into {:?} as {:?}", files.len(), destination, format);

    match format {
        ArchiveFormat::Zip => zip::pack_zip(files, destination, password),
        ArchiveFormat::Tar => tar::pack_tar(files, destination, TarCompression::None),
        ArchiveFormat::TarGz => tar::pack_tar(files, destination, TarCompression::Gzip),
        ArchiveFormat::TarBz2 => tar::pack_tar(files, destination, TarCompression::Bzip2),
        ArchiveFormat::TarXz => tar::pack_tar(files, destination, TarCompression::Xz),
    }
}

/// Extract all entries of `archive` into `destination_dir`.
///
/// The caller is responsible for creating `destination_dir`. A `password`
/// is applied only to ZIP archives.
pub fn extract(archive: &Path, destination_dir: &Path, password: Option<&str>) -> Result<()> {
    let format = ArchiveFormat::from_path(archive)?;

    if !archive.is_file() {
        return Err(Error::NotFound(archive.to_path_buf()));
    }

    info!("Extracting {:?} ({:?}) into {:?}", archive, format, destination_dir);

    match format {
        ArchiveFormat::Zip => zip::extract_zip(archive, destination_dir, password),
        ArchiveFormat::Tar => tar::extract_tar(archive, destination_dir, TarCompression::None),
        ArchiveFormat::TarGz => tar::extract_tar(archive, destination_dir, TarCompression::Gzip),
        ArchiveFormat::TarBz2 => tar::extract_tar(archive, destination_dir, TarCompression::Bzip2),
        ArchiveFormat::TarXz => tar::extract_tar(archive, destination_dir, TarCompression::Xz),
    }
}
