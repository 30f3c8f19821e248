//! Automatic saturation boost
//!
//! Measures the mean HSV saturation and scales it toward [`TARGET_MEAN`].
//! The factor is floored at 1.0: this correction never desaturates.

use crate::color::{hsv_to_rgb, rgb_to_hsv};
use crate::frame::{quantize, Frame};
use crate::models::PhotoKind;
use crate::parallel::{parallel_fold_reduce, parallel_for_each_chunk_mut};

use super::{SATURATION_FACTOR_RANGE, TARGET_MEAN};

/// Fractional bits of the fixed-point per-pixel saturation.
const SATURATION_FRACTION_BITS: u32 = 16;

/// HSV saturation of one RGB pixel on the 0-255 scale, in fixed point
/// with [`SATURATION_FRACTION_BITS`] fractional bits, rounded to nearest.
fn fixed_saturation(pixel: &[u8]) -> u64 {
    let max = pixel[0].max(pixel[1]).max(pixel[2]) as u64;
    let min = pixel[0].min(pixel[1]).min(pixel[2]) as u64;
    if max == 0 || max == min {
        return 0;
    }

    ((((max - min) * 255) << SATURATION_FRACTION_BITS) + max / 2) / max
}

/// Compute the saturation multiplier without applying it.
///
/// Returns `None` when the correction does not apply: the photo is declared
/// monochrome, the frame has a single channel, or the mean saturation is
/// zero (a fully desaturated source).
pub fn compute_saturation_factor(frame: &Frame, kind: PhotoKind) -> Option<f32> {
    if kind == PhotoKind::Monochrome {
        return None;
    }
    let Frame::Color(_) = frame else {
        return None;
    };

    let samples = frame.samples();
    let num_pixels = samples.len() / 3;
    if num_pixels == 0 {
        return None;
    }

    // Integer accumulation keeps the sum independent of how rayon splits it
    let saturation_sum = parallel_fold_reduce(
        samples,
        3,
        || 0u64,
        |acc, pixel| acc + fixed_saturation(pixel),
        |a, b| a + b,
    );
    let mean_saturation =
        saturation_sum as f64 / (1u64 << SATURATION_FRACTION_BITS) as f64 / num_pixels as f64;
    log::trace!("mean saturation: {:.3}", mean_saturation);

    if mean_saturation <= 0.0 {
        return None;
    }

    let factor = (TARGET_MEAN / mean_saturation) as f32;
    Some(factor.clamp(SATURATION_FACTOR_RANGE.0, SATURATION_FACTOR_RANGE.1))
}

/// Automatic saturation, applied in place.
///
/// Returns the multiplier used, or `None` when the correction was skipped.
pub fn saturation(frame: &mut Frame, kind: PhotoKind) -> Option<f32> {
    let factor = compute_saturation_factor(frame, kind)?;

    if (factor - 1.0).abs() < 1e-6 {
        return Some(factor);
    }

    parallel_for_each_chunk_mut(frame.samples_mut(), 3, |pixel| {
        let mut hsv = rgb_to_hsv(pixel[0] as f32, pixel[1] as f32, pixel[2] as f32);
        hsv.s = (hsv.s * factor).min(255.0);
        let (r, g, b) = hsv_to_rgb(hsv);
        pixel[0] = quantize(r);
        pixel[1] = quantize(g);
        pixel[2] = quantize(b);
    });

    log::debug!("saturation factor: {:.4}", factor);
    Some(factor)
}
