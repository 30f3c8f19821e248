//! Image exporters
//!
//! Write an enhanced [`Frame`] in the format implied by the output file
//! extension. Monochrome frames are written as single-channel images.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageFormat};

use crate::config::DEFAULT_JPEG_QUALITY;
use crate::error::{EnhanceError, Result};
use crate::frame::Frame;

/// Export a frame using the default JPEG quality.
pub fn export_frame<P: AsRef<Path>>(frame: &Frame, path: P) -> Result<()> {
    export_frame_with_quality(frame, path, DEFAULT_JPEG_QUALITY)
}

/// Export a frame; `jpeg_quality` (1-100) only affects JPEG output.
pub fn export_frame_with_quality<P: AsRef<Path>>(
    frame: &Frame,
    path: P,
    jpeg_quality: u8,
) -> Result<()> {
    let path = path.as_ref();
    let encode_err = |message: String| EnhanceError::Encode {
        path: path.to_path_buf(),
        message,
    };

    let format = ImageFormat::from_path(path).map_err(|e| encode_err(e.to_string()))?;

    match format {
        ImageFormat::Jpeg => {
            let file = File::create(path)
                .map_err(|e| encode_err(format!("Failed to create file: {}", e)))?;
            let encoder =
                JpegEncoder::new_with_quality(BufWriter::new(file), jpeg_quality.clamp(1, 100));
            let color_type = match frame {
                Frame::Mono(_) => ExtendedColorType::L8,
                Frame::Color(_) => ExtendedColorType::Rgb8,
            };
            encoder
                .write_image(frame.samples(), frame.width(), frame.height(), color_type)
                .map_err(|e| encode_err(e.to_string()))?;
        }
        other => {
            let saved = match frame {
                Frame::Mono(gray) => gray.save_with_format(path, other),
                Frame::Color(rgb) => rgb.save_with_format(path, other),
            };
            saved.map_err(|e| encode_err(e.to_string()))?;
        }
    }

    log::trace!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoders::decode_image;
    use tempfile::tempdir;

    fn gradient(width: u32, height: u32) -> Frame {
        let data = (0..width * height * 3).map(|i| (i % 256) as u8).collect();
        Frame::from_raw(width, height, 3, data).unwrap()
    }

    #[test]
    fn test_png_roundtrip_is_lossless() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.png");
        let frame = gradient(8, 4);

        export_frame(&frame, &path).unwrap();

        assert_eq!(decode_image(&path).unwrap(), frame);
    }

    #[test]
    fn test_mono_frame_stays_single_channel() {
        let dir = tempdir().unwrap();
        let frame = Frame::from_raw(3, 1, 1, vec![0, 128, 255]).unwrap();

        for name in ["gray.png", "gray.tiff", "gray.jpg"] {
            let path = dir.path().join(name);
            export_frame(&frame, &path).unwrap();
            let decoded = decode_image(&path).unwrap();
            assert_eq!(decoded.channels(), 1, "{} should decode as mono", name);
        }
    }

    #[test]
    fn test_jpeg_export_writes_decodable_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("photo.JPG");
        let frame = gradient(16, 16);

        export_frame_with_quality(&frame, &path, 80).unwrap();

        let decoded = decode_image(&path).unwrap();
        assert!(decoded.is_color());
        assert_eq!((decoded.width(), decoded.height()), (16, 16));
    }

    #[test]
    fn test_unknown_extension_is_encode_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.xyz");

        let err = export_frame(&gradient(2, 2), &path).unwrap_err();

        assert!(matches!(err, EnhanceError::Encode { .. }));
    }

    #[test]
    fn test_missing_directory_is_encode_error() {
        let err = export_frame(&gradient(2, 2), "/nonexistent/directory/out.jpg").unwrap_err();
        assert!(err.to_string().contains("Failed to create file"));
    }
}
