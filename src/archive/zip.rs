//! Zip archive operations (deflate, optional AES-256 encryption)

use crate::error::{Error, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{AesMode, CompressionMethod, ZipArchive, ZipWriter};

/// Pack `files` into a zip archive at `output`, each under its basename.
///
/// When `password` is given, entries are deflate-compressed and AES-256
/// encrypted; extraction then requires the same password.
pub fn pack_zip(files: &[PathBuf], output: &Path, password: Option<&str>) -> Result<()> {
    let file = File::create(output).map_err(|e| Error::from_io(e, output))?;
    let mut writer = ZipWriter::new(file);

    let mut options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    if let Some(pass) = password {
        options = options.with_aes_encryption(AesMode::Aes256, pass);
    }

    for path in files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| Error::Archive(format!("{:?} has no basename", path)))?;

        debug!("Adding file to ZIP: {:?} as {}", path, name);
        writer
            .start_file(name, options)
            .map_err(|e| Error::Archive(e.to_string()))?;
        let mut src = File::open(path).map_err(|e| Error::from_io(e, path))?;
        io::copy(&mut src, &mut writer)?;
    }

    writer.finish().map_err(|e| Error::Archive(e.to_string()))?;
    Ok(())
}

/// Extract every entry of a zip archive into `output_dir`, decrypting with
/// `password` when given.
pub fn extract_zip(archive_path: &Path, output_dir: &Path, password: Option<&str>) -> Result<()> {
    let file = File::open(archive_path).map_err(|e| Error::from_io(e, archive_path))?;
    let mut archive =
        ZipArchive::new(file).map_err(|e| map_zip_error(archive_path, e, password))?;

    for i in 0..archive.len() {
        let mut entry = match password {
            Some(pass) => archive
                .by_index_decrypt(i, pass.as_bytes())
                .map_err(|e| map_zip_error(archive_path, e, password))?,
            None => archive
                .by_index(i)
                .map_err(|e| map_zip_error(archive_path, e, password))?,
        };

        // enclosed_name() rejects entries that would escape the output dir
        let Some(relative) = entry.enclosed_name() else {
            return Err(Error::Archive(format!(
                "entry {:?} has an unsafe path",
                entry.name()
            )));
        };
        let dest = output_dir.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&dest)?;
            continue;
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = File::create(&dest).map_err(|e| Error::from_io(e, &dest))?;
        io::copy(&mut entry, &mut out)
            .map_err(|e| map_zip_io_error(archive_path, e, password))?;
    }

    Ok(())
}

/// Map zip crate errors onto the backend error type, keeping password
/// failures distinct from ordinary archive corruption.
fn map_zip_error(path: &Path, error: ZipError, password: Option<&str>) -> Error {
    match error {
        ZipError::InvalidPassword => Error::WrongPassword(path.to_path_buf()),
        ZipError::UnsupportedArchive(detail) if detail == ZipError::PASSWORD_REQUIRED => {
            Error::WrongPassword(path.to_path_buf())
        }
        ZipError::UnsupportedArchive(detail)
            if password.is_some() && detail.to_ascii_lowercase().contains("password") =>
        {
            Error::WrongPassword(path.to_path_buf())
        }
        other => Error::Archive(other.to_string()),
    }
}

/// A wrong password on a non-AES (ZipCrypto) entry is only detected while
/// streaming, as an I/O-level CRC/decrypt failure.
fn map_zip_io_error(path: &Path, error: io::Error, password: Option<&str>) -> Error {
    if password.is_some() && error.kind() == io::ErrorKind::InvalidData {
        Error::WrongPassword(path.to_path_buf())
    } else {
        Error::Io(error)
    }
}
