//! Automatic brightness normalization
//!
//! Scales every sample so the mean brightness approaches [`TARGET_MEAN`],
//! with the multiplier bounded by [`BRIGHTNESS_FACTOR_RANGE`].

use crate::frame::Frame;
use crate::stats::mean_luminance;

use super::{apply_lut, build_lut, BRIGHTNESS_FACTOR_RANGE, TARGET_MEAN};

/// Compute the brightness multiplier without applying it.
///
/// The mean is the single channel mean for monochrome frames and the
/// unweighted mean of the three channel means for color frames.
pub fn compute_brightness_factor(frame: &Frame) -> f32 {
    let mean = mean_luminance(frame);
    let factor = (TARGET_MEAN / mean.max(1.0)) as f32;
    factor.clamp(BRIGHTNESS_FACTOR_RANGE.0, BRIGHTNESS_FACTOR_RANGE.1)
}

/// Automatic brightness, applied in place. Returns the multiplier used.
pub fn brightness(frame: &mut Frame) -> f32 {
    let factor = compute_brightness_factor(frame);

    if (factor - 1.0).abs() < 1e-6 {
        return factor;
    }

    let lut = build_lut(|value| value * factor);
    apply_lut(frame, &lut);

    log::debug!("brightness factor: {:.4}", factor);
    factor
}
