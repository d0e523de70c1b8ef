//! Tar archive operations (plain, gzip, bzip2, xz)

use crate::error::{Error, Result};
use bzip2::read::BzDecoder;
use bzip2::write::BzEncoder;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression as GzLevel;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tar::{Archive, Builder};
use tracing::debug;
use xz2::read::XzDecoder;
use xz2::write::XzEncoder;

/// Stream compression applied around the tar container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TarCompression {
    None,
    Gzip,
    Bzip2,
    Xz,
}

/// Pack `files` into a tar archive at `output`, each under its basename.
pub fn pack_tar(files: &[PathBuf], output: &Path, compression: TarCompression) -> Result<()> {
    let file = File::create(output).map_err(|e| Error::from_io(e, output))?;

    // The encoder must be finished after the tar trailer is written, so each
    // variant drives the builder to completion itself.
    match compression {
        TarCompression::None => {
            let mut builder = Builder::new(file);
            append_all(&mut builder, files)?;
            builder.into_inner().map_err(|e| Error::Archive(e.to_string()))?;
        }
        TarCompression::Gzip => {
            let mut builder = Builder::new(GzEncoder::new(file, GzLevel::default()));
            append_all(&mut builder, files)?;
            builder
                .into_inner()
                .map_err(|e| Error::Archive(e.to_string()))?
                .finish()
                .map_err(|e| Error::Archive(e.to_string()))?;
        }
        TarCompression::Bzip2 => {
            let mut builder = Builder::new(BzEncoder::new(file, bzip2::Compression::default()));
            append_all(&mut builder, files)?;
            builder
                .into_inner()
                .map_err(|e| Error::Archive(e.to_string()))?
                .finish()
                .map_err(|e| Error::Archive(e.to_string()))?;
        }
        TarCompression::Xz => {
            let mut builder = Builder::new(XzEncoder::new(file, 6));
            append_all(&mut builder, files)?;
            builder
                .into_inner()
                .map_err(|e| Error::Archive(e.to_string()))?
                .finish()
                .map_err(|e| Error::Archive(e.to_string()))?;
        }
    }

    Ok(())
}

/// Extract every entry of a tar archive into `output_dir`.
pub fn extract_tar(archive: &Path, output_dir: &Path, compression: TarCompression) -> Result<()> {
    let file = File::open(archive).map_err(|e| Error::from_io(e, archive))?;

    match compression {
        TarCompression::None => unpack(Archive::new(file), output_dir),
        TarCompression::Gzip => unpack(Archive::new(GzDecoder::new(file)), output_dir),
        TarCompression::Bzip2 => unpack(Archive::new(BzDecoder::new(file)), output_dir),
        TarCompression::Xz => unpack(Archive::new(XzDecoder::new(file)), output_dir),
    }
}

fn append_all<W: Write>(builder: &mut Builder<W>, files: &[PathBuf]) -> Result<()> {
    for path in files {
        let name = path
            .file_name()
            .ok_or_else(|| Error::Archive(format!("{:?} has no basename", path)))?;

        debug!("Adding file: {:?} as {:?}", path, name);
        builder
            .append_path_with_name(path, Path::new(name))
            .map_err(|e| Error::from_io(e, path))?;
    }
    Ok(())
}

fn unpack<R: Read>(mut archive: Archive<R>, output_dir: &Path) -> Result<()> {
    archive
        .unpack(output_dir)
        .map_err(|e| Error::Archive(e.to_string()))
}
