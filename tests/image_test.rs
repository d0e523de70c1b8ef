//! Image backend tests

use arctui::error::Error;
use arctui::image_ops;
use image::{ImageFormat, ImageReader, RgbImage};
use tempfile::TempDir;

fn sample_png(dir: &std::path::Path) -> std::path::PathBuf {
    // A small gradient so lossy encoders have something to chew on
    let img = RgbImage::from_fn(32, 32, |x, y| {
        image::Rgb([(x * 8) as u8, (y * 8) as u8, ((x + y) * 4) as u8])
    });
    let path = dir.join("sample.png");
    img.save(&path).unwrap();
    path
}

#[test]
fn test_convert_writes_sibling_with_new_extension() {
    let tmp = TempDir::new().unwrap();
    let source = sample_png(tmp.path());

    let converted = image_ops::convert_image(&source, "jpeg").unwrap();
    assert_eq!(converted, tmp.path().join("sample.jpeg"));
    assert!(converted.is_file());

    let format = ImageReader::open(&converted)
        .unwrap()
        .with_guessed_format()
        .unwrap()
        .format();
    assert_eq!(format, Some(ImageFormat::Jpeg));

    let img = image::open(&converted).unwrap();
    assert_eq!((img.width(), img.height()), (32, 32));
}

#[test]
fn test_convert_rejects_unknown_format() {
    let tmp = TempDir::new().unwrap();
    let source = sample_png(tmp.path());

    let err = image_ops::convert_image(&source, "xyzzy").unwrap_err();
    assert!(matches!(err, Error::Image(_)));
}

#[test]
fn test_compress_reencodes_at_given_quality() {
    let tmp = TempDir::new().unwrap();
    let source = sample_png(tmp.path());
    let dest = tmp.path().join("small.jpg");

    image_ops::compress_image(&source, &dest, 40).unwrap();
    assert!(dest.is_file());

    let img = image::open(&dest).unwrap();
    assert_eq!((img.width(), img.height()), (32, 32));
}

#[test]
fn test_compress_missing_source_fails() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("ghost.png");
    let dest = tmp.path().join("out.jpg");

    assert!(image_ops::compress_image(&missing, &dest, 85).is_err());
    assert!(!dest.exists());
}
