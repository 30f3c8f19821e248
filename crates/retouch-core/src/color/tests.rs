//! Tests for color conversion functions

use super::*;

#[test]
fn test_rgb_hsv_roundtrip() {
    let test_cases = [
        (255.0, 0.0, 0.0),   // Red
        (0.0, 255.0, 0.0),   // Green
        (0.0, 0.0, 255.0),   // Blue
        (255.0, 255.0, 255.0), // White
        (0.0, 0.0, 0.0),     // Black
        (128.0, 128.0, 128.0), // Gray
        (255.0, 128.0, 0.0), // Orange
        (128.0, 0.0, 128.0), // Purple
        (37.0, 201.0, 90.0),
    ];

    for (r, g, b) in test_cases {
        let hsv = rgb_to_hsv(r, g, b);
        let (r2, g2, b2) = hsv_to_rgb(hsv);

        assert!((r - r2).abs() < 1e-3, "R mismatch for ({}, {}, {}): {}", r, g, b, r2);
        assert!((g - g2).abs() < 1e-3, "G mismatch for ({}, {}, {}): {}", r, g, b, g2);
        assert!((b - b2).abs() < 1e-3, "B mismatch for ({}, {}, {}): {}", r, g, b, b2);
    }
}

#[test]
fn test_hsv_values() {
    let red = rgb_to_hsv(255.0, 0.0, 0.0);
    assert!((red.h - 0.0).abs() < 1e-5);
    assert!((red.s - 255.0).abs() < 1e-3);
    assert!((red.v - 255.0).abs() < 1e-3);

    let green = rgb_to_hsv(0.0, 255.0, 0.0);
    assert!((green.h - 120.0).abs() < 1e-3);

    let blue = rgb_to_hsv(0.0, 0.0, 255.0);
    assert!((blue.h - 240.0).abs() < 1e-3);

    // Half-saturated: max 200, min 100
    let muted = rgb_to_hsv(200.0, 100.0, 100.0);
    assert!((muted.s - 127.5).abs() < 1e-3);
}

#[test]
fn test_gray_has_zero_saturation() {
    for v in [0.0, 1.0, 128.0, 255.0] {
        let hsv = rgb_to_hsv(v, v, v);
        assert_eq!(hsv.s, 0.0);
        assert_eq!(hsv.v, v);
    }
}

#[test]
fn test_luma_weights() {
    assert_eq!(luma(0, 0, 0), 0);
    assert_eq!(luma(255, 255, 255), 255);
    assert_eq!(luma(128, 128, 128), 128);
    // 0.299 * 255 = 76.245
    assert_eq!(luma(255, 0, 0), 76);
    // 0.587 * 255 = 149.685
    assert_eq!(luma(0, 255, 0), 150);
    // 0.114 * 255 = 29.07
    assert_eq!(luma(0, 0, 255), 29);
}

#[test]
fn test_rgb_to_luma_preserves_dimensions() {
    let rgb = image::RgbImage::from_fn(3, 2, |x, _| image::Rgb([x as u8 * 100, 50, 0]));
    let gray = rgb_to_luma(&rgb);

    assert_eq!(gray.dimensions(), (3, 2));
    assert_eq!(gray.get_pixel(0, 0).0[0], luma(0, 50, 0));
    assert_eq!(gray.get_pixel(2, 1).0[0], luma(200, 50, 0));
}
