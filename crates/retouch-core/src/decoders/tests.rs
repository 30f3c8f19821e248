//! Tests for image decoders

use super::*;
use image::{GrayImage, Rgb, RgbImage, Rgba, RgbaImage};
use tempfile::tempdir;

#[test]
fn test_supported_extensions_ignore_case() {
    assert!(is_supported_extension("a/b/photo.JPG"));
    assert!(is_supported_extension("scan.tiff"));
    assert!(is_supported_extension("x.Bmp"));
    assert!(!is_supported_extension("notes.txt"));
    assert!(!is_supported_extension("no_extension"));
}

#[test]
fn test_decode_gray_png_as_mono() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gray.png");
    GrayImage::from_raw(2, 1, vec![10, 200])
        .unwrap()
        .save(&path)
        .unwrap();

    let frame = decode_image(&path).unwrap();

    assert!(matches!(frame, Frame::Mono(_)));
    assert_eq!(frame.samples(), &[10, 200]);
}

#[test]
fn test_decode_rgb_bmp_as_color() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("color.bmp");
    RgbImage::from_pixel(3, 2, Rgb([1, 2, 3])).save(&path).unwrap();

    let frame = decode_image(&path).unwrap();

    assert!(frame.is_color());
    assert_eq!((frame.width(), frame.height()), (3, 2));
    assert_eq!(&frame.samples()[..3], &[1, 2, 3]);
}

#[test]
fn test_decode_drops_alpha() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("alpha.png");
    RgbaImage::from_pixel(2, 2, Rgba([40, 50, 60, 7]))
        .save(&path)
        .unwrap();

    let frame = decode_image(&path).unwrap();

    assert_eq!(frame.channels(), 3);
    assert_eq!(&frame.samples()[..3], &[40, 50, 60]);
}

#[test]
fn test_unsupported_extension() {
    let err = decode_image("document.pdf").unwrap_err();
    match err {
        EnhanceError::Decode { message, .. } => assert!(message.contains("Unsupported")),
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_missing_file_is_decode_error() {
    let err = decode_image("/nonexistent/photo.png").unwrap_err();
    assert!(matches!(err, EnhanceError::Decode { .. }));
}

#[test]
fn test_corrupt_file_is_decode_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.jpg");
    std::fs::write(&path, b"definitely not a jpeg").unwrap();

    assert!(matches!(
        decode_image(&path),
        Err(EnhanceError::Decode { .. })
    ));
}
