//! Enhancement pipeline
//!
//! Runs the enabled corrections in a fixed order over one frame:
//!
//! 1. white balance
//! 2. monochrome conversion, when placed [`MonochromePlacement::AfterWhiteBalance`]
//! 3. brightness
//! 4. contrast
//! 5. saturation (color photos only, and never when converting to monochrome)
//! 6. monochrome conversion, when placed [`MonochromePlacement::Last`]
//!
//! Every stage measures the output of the stage before it.


use image::DynamicImage;
use serde::Serialize;

use crate::auto_adjust::{brightness, contrast, saturation, white_balance, ContrastParams};
use crate::error::Result;
use crate::frame::Frame;
use crate::models::{CorrectionConfig, MonochromePlacement, PhotoKind};
use crate::monochrome::{convert_to_monochrome, RemapWindow};

/// What each stage did during one run.
///
/// `None` means the stage was disabled or did not apply to the frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EnhanceReport {
    /// Per-channel gains (R, G, B)
    pub white_balance: Option<[f32; 3]>,
    pub brightness: Option<f32>,
    pub contrast: Option<ContrastParams>,
    pub saturation: Option<f32>,
    pub monochrome: Option<RemapWindow>,
}

/// Output of [`enhance`]
#[derive(Debug, Clone)]
pub struct Enhanced {
    pub frame: Frame,
    pub report: EnhanceReport,
}

/// Apply the enabled corrections to `frame`.
///
/// Fails only when the frame has no pixels. Degenerate statistics are
/// resolved by the stages themselves.
pub fn enhance(frame: Frame, kind: PhotoKind, config: &CorrectionConfig) -> Result<Enhanced> {
    frame.ensure_non_empty()?;

    log::debug!(
        "enhancing {}x{} {} frame ({:?})",
        frame.width(),
        frame.height(),
        if frame.is_color() { "color" } else { "mono" },
        kind
    );

    let mut frame = frame;
    let mut report = EnhanceReport::default();

    if config.white_balance {
        report.white_balance = white_balance(&mut frame);
    }

    if let Some(policy) = config.monochrome {
        if config.monochrome_placement == MonochromePlacement::AfterWhiteBalance {
            let (mono, window) = convert_to_monochrome(frame, policy);
            frame = mono;
            report.monochrome = Some(window);
        }
    }

    if config.brightness {
        report.brightness = Some(brightness(&mut frame));
    }

    if config.contrast {
        report.contrast = Some(contrast(&mut frame));
    }

    if config.saturation && config.monochrome.is_none() {
        report.saturation = saturation(&mut frame, kind);
    }

    if let Some(policy) = config.monochrome {
        if config.monochrome_placement == MonochromePlacement::Last {
            let (mono, window) = convert_to_monochrome(frame, policy);
            frame = mono;
            report.monochrome = Some(window);
        }
    }

    Ok(Enhanced { frame, report })
}

/// Normalize a decoded image and run [`enhance`] on it.
pub fn enhance_dynamic(
    image: DynamicImage,
    kind: PhotoKind,
    config: &CorrectionConfig,
) -> Result<Enhanced> {
    enhance(Frame::from_dynamic(image), kind, config)
}

/// Measure what [`enhance`] would do without keeping the result.
pub fn preview(frame: &Frame, kind: PhotoKind, config: &CorrectionConfig) -> Result<EnhanceReport> {
    enhance(frame.clone(), kind, config).map(|enhanced| enhanced.report)
}
