//! Monochrome conversion with luminance range remapping
//!
//! The frame is reduced to Rec.601 luma, then a [`RemapPolicy`] picks the
//! input window that gets stretched onto [0, 255]. A flat image (every pixel
//! the same luma) is returned unchanged by every policy.

use image::GrayImage;
use serde::Serialize;

use crate::auto_adjust::{apply_lut_samples, build_lut};
use crate::color::rgb_to_luma;
use crate::frame::Frame;
use crate::models::RemapPolicy;
use crate::stats::{channel_extrema, percentile};

/// Lower percentile anchor of [`RemapPolicy::Percentile`]
pub const PERCENTILE_LOW: f32 = 10.0;

/// Upper percentile anchor of [`RemapPolicy::Percentile`]
pub const PERCENTILE_HIGH: f32 = 90.0;

/// Input luma window chosen by a remap policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RemapWindow {
    pub policy: RemapPolicy,
    /// Luma mapped to 0
    pub low: f32,
    /// Luma mapped to 255 (before the denominator floor)
    pub high: f32,
    /// False when the image was flat and left untouched
    pub applied: bool,
}

impl RemapWindow {
    /// Divisor of the linear stretch.
    fn span(&self) -> f32 {
        match self.policy {
            RemapPolicy::Natural => self.high - self.low,
            RemapPolicy::Forced | RemapPolicy::Percentile => (self.high - self.low).max(1.0),
        }
    }
}

/// Choose the remap window for a luma buffer without modifying it.
pub fn compute_remap_window(luma: &[u8], policy: RemapPolicy) -> RemapWindow {
    let [(min, max)] = channel_extrema::<1>(luma);
    let flat = min == max;

    let (low, high) = match policy {
        RemapPolicy::Natural | RemapPolicy::Forced => (f32::from(min), f32::from(max)),
        RemapPolicy::Percentile => (
            percentile(luma, PERCENTILE_LOW),
            percentile(luma, PERCENTILE_HIGH),
        ),
    };

    RemapWindow {
        policy,
        low,
        high,
        applied: !flat,
    }
}

/// Remap a luma image in place according to `policy`.
pub fn remap_luma(gray: &mut GrayImage, policy: RemapPolicy) -> RemapWindow {
    let window = compute_remap_window(gray.as_raw(), policy);
    if !window.applied {
        log::debug!("monochrome remap skipped: flat image");
        return window;
    }

    let low = window.low;
    let span = window.span();
    let lut = build_lut(|value| (value - low) / span * 255.0);
    apply_lut_samples(&mut **gray, 1, &lut);

    log::debug!(
        "monochrome remap ({:?}): [{:.1}, {:.1}] -> [0, 255]",
        policy,
        window.low,
        window.high
    );
    window
}

/// Convert a frame to monochrome and remap its luminance range.
///
/// Color frames are reduced to luma first; monochrome frames are remapped
/// directly.
pub fn convert_to_monochrome(frame: Frame, policy: RemapPolicy) -> (Frame, RemapWindow) {
    let mut gray = match frame {
        Frame::Mono(gray) => gray,
        Frame::Color(rgb) => rgb_to_luma(&rgb),
    };

    let window = remap_luma(&mut gray, policy);
    (Frame::Mono(gray), window)
}
