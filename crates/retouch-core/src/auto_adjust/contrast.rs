//! Automatic contrast stretch
//!
//! One scalar factor is derived from the channel ranges and applied
//! uniformly around the frame's mean luma. Channels are never stretched
//! independently, so the color balance set by earlier stages survives.

use serde::Serialize;

use crate::frame::Frame;
use crate::stats::{channel_extrema, mean_luma};

use super::{apply_lut, build_lut, CONTRAST_FACTOR_RANGE};

/// Contrast parameters derived from a frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastParams {
    /// Stretch factor, within [`CONTRAST_FACTOR_RANGE`]
    pub factor: f32,
    /// Pivot of the stretch: the frame's mean luma, rounded
    pub midpoint: f32,
}

/// Factor that would stretch [min, max] to the full 8-bit range.
fn range_factor((min, max): (u8, u8)) -> f32 {
    255.0 / f32::from(max.saturating_sub(min).max(1))
}

/// Compute contrast parameters without applying them.
///
/// Color frames average the per-channel range factors into one scalar.
pub fn compute_contrast(frame: &Frame) -> ContrastParams {
    let samples = frame.samples();
    let raw_factor = match frame {
        Frame::Mono(_) => range_factor(channel_extrema::<1>(samples)[0]),
        Frame::Color(_) => {
            let extrema = channel_extrema::<3>(samples);
            extrema.iter().map(|&range| range_factor(range)).sum::<f32>() / 3.0
        }
    };

    ContrastParams {
        factor: raw_factor.clamp(CONTRAST_FACTOR_RANGE.0, CONTRAST_FACTOR_RANGE.1),
        midpoint: mean_luma(frame).round() as f32,
    }
}

/// Automatic contrast, applied in place.
///
/// Every sample becomes `midpoint + (sample - midpoint) * factor`.
pub fn contrast(frame: &mut Frame) -> ContrastParams {
    let params = compute_contrast(frame);

    if (params.factor - 1.0).abs() < 1e-6 {
        return params;
    }

    let ContrastParams { factor, midpoint } = params;
    let lut = build_lut(|value| midpoint + (value - midpoint) * factor);
    apply_lut(frame, &lut);

    log::debug!(
        "contrast factor: {:.4} around midpoint {}",
        factor,
        midpoint
    );
    params
}
