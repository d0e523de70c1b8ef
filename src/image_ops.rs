//! Image backend: single-image re-encoding and format conversion
//!
//! Callable utility, not wired into the interactive flow.

use crate::error::{Error, Result};
use image::codecs::jpeg::JpegEncoder;
use image::ImageFormat;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default lossy quality used when the caller does not specify one.
pub const DEFAULT_QUALITY: u8 = 85;

/// Re-encode an image at the given lossy quality and write it to `dest`.
///
/// The output format follows the destination extension. Quality applies to
/// JPEG output; formats without a quality knob are re-encoded with their
/// default settings.
pub fn compress_image(source: &Path, dest: &Path, quality: u8) -> Result<()> {
    let img = image::open(source).map_err(|e| Error::Image(e.to_string()))?;
    let format = ImageFormat::from_path(dest).map_err(|e| Error::Image(e.to_string()))?;

    info!("Re-encoding {:?} -> {:?} ({:?}, quality {})", source, dest, format, quality);

    match format {
        ImageFormat::Jpeg => {
            let file = File::create(dest).map_err(|e| Error::from_io(e, dest))?;
            let mut writer = BufWriter::new(file);
            let encoder = JpegEncoder::new_with_quality(&mut writer, quality);
            img.write_with_encoder(encoder)
                .map_err(|e| Error::Image(e.to_string()))?;
        }
        _ => {
            img.save(dest).map_err(|e| Error::Image(e.to_string()))?;
        }
    }

    Ok(())
}

/// Convert an image into `target_format`, writing `<stem>.<target_format>`
/// alongside the source, and return the new path.
pub fn convert_image(source: &Path, target_format: &str) -> Result<PathBuf> {
    let format = ImageFormat::from_extension(target_format)
        .ok_or_else(|| Error::Image(format!("unknown image format: {}", target_format)))?;

    let img = image::open(source).map_err(|e| Error::Image(e.to_string()))?;
    let output = source.with_extension(target_format);

    info!("Converting {:?} -> {:?} ({:?})", source, output, format);

    img.save_with_format(&output, format)
        .map_err(|e| Error::Image(e.to_string()))?;
    Ok(output)
}
