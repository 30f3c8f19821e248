//! Single image processing functions.

use std::path::Path;

use retouch_core::decoders::decode_image;
use retouch_core::exporters::export_frame_with_quality;
use retouch_core::pipeline::{enhance, EnhanceReport};

use crate::types::ProcessingParams;

/// Decode, enhance and export one image.
///
/// The output directory is created if needed. Nothing is written when
/// decoding or enhancement fails.
pub fn process_single_image(
    input: &Path,
    output_path: &Path,
    params: &ProcessingParams,
) -> Result<EnhanceReport, String> {
    let frame = decode_image(input).map_err(|e| e.to_string())?;
    let enhanced = enhance(frame, params.kind, &params.corrections).map_err(|e| e.to_string())?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create output directory: {}", e))?;
        }
    }

    export_frame_with_quality(&enhanced.frame, output_path, params.output.jpeg_quality)
        .map_err(|e| e.to_string())?;

    log::debug!("{}: {:?}", input.display(), enhanced.report);
    Ok(enhanced.report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use retouch_core::models::RemapPolicy;
    use tempfile::tempdir;

    #[test]
    fn test_process_single_image_writes_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out").join("in - edit.png");
        RgbImage::from_fn(4, 4, |x, y| Rgb([(x * 40) as u8, (y * 30) as u8, 90]))
            .save(&input)
            .unwrap();

        let report = process_single_image(&input, &output, &ProcessingParams::default()).unwrap();

        assert!(output.exists());
        assert!(report.white_balance.is_some());
        assert!(report.brightness.is_some());
    }

    #[test]
    fn test_monochrome_output_is_single_channel() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("in - edit.png");
        RgbImage::from_fn(3, 3, |x, _| Rgb([(x * 100) as u8, 20, 20]))
            .save(&input)
            .unwrap();

        let mut params = ProcessingParams::default();
        params.corrections.monochrome = Some(RemapPolicy::Forced);
        process_single_image(&input, &output, &params).unwrap();

        let written = image::open(&output).unwrap();
        assert_eq!(written.color(), image::ColorType::L8);
    }

    #[test]
    fn test_decode_failure_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("broken.png");
        let output = dir.path().join("broken - edit.png");
        std::fs::write(&input, b"garbage").unwrap();

        let err = process_single_image(&input, &output, &ProcessingParams::default()).unwrap_err();

        assert!(err.contains("Failed to decode"));
        assert!(!output.exists());
    }
}
