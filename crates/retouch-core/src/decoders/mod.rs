//! Image decoders
//!
//! JPEG, PNG, TIFF and BMP files are read through the `image` crate and
//! normalized into a [`Frame`].

#[cfg(test)]
mod tests;

use std::path::Path;

use image::ImageReader;

use crate::error::{EnhanceError, Result};
use crate::frame::Frame;

/// File extensions (lowercase) that [`decode_image`] accepts
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "tif", "tiff", "bmp"];

/// True when the path has one of [`SUPPORTED_EXTENSIONS`], ignoring case.
pub fn is_supported_extension<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .is_some_and(|e| SUPPORTED_EXTENSIONS.contains(&e.as_str()))
}

/// Decode an image from a file path
///
/// 8-bit grayscale files become [`Frame::Mono`]; every other layout becomes
/// 8-bit [`Frame::Color`] with any alpha channel dropped.
pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<Frame> {
    let path = path.as_ref();
    let decode_err = |message: String| EnhanceError::Decode {
        path: path.to_path_buf(),
        message,
    };

    if !is_supported_extension(path) {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        return Err(decode_err(format!("Unsupported file format: {:?}", extension)));
    }

    let image = ImageReader::open(path)
        .map_err(|e| decode_err(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| decode_err(e.to_string()))?
        .decode()
        .map_err(|e| decode_err(e.to_string()))?;

    log::trace!(
        "decoded {}: {}x{} {:?}",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );

    let frame = Frame::from_dynamic(image);
    frame.ensure_non_empty()?;
    Ok(frame)
}
