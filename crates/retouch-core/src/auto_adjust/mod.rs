//! Automatic adjustment functions for 8-bit frames
//!
//! Provides the statistics-driven corrections applied by the pipeline:
//! white balance, brightness, contrast and saturation. Each correction
//! measures the frame it receives, derives a factor, and applies it in place.
//! The `compute_*` variants only measure, for previews and reports.

mod brightness;
mod contrast;
mod saturation;
mod white_balance;


use crate::frame::{quantize, Frame};
use crate::parallel::parallel_for_each_chunk_mut;

/// Mean sample value the brightness and saturation corrections aim for
pub const TARGET_MEAN: f64 = 128.0;

/// Bounds on the brightness multiplier
pub const BRIGHTNESS_FACTOR_RANGE: (f32, f32) = (0.8, 1.5);

/// Bounds on the contrast stretch
pub const CONTRAST_FACTOR_RANGE: (f32, f32) = (0.8, 2.0);

/// Bounds on the saturation multiplier; never below 1.0, so it only boosts
pub const SATURATION_FACTOR_RANGE: (f32, f32) = (1.0, 2.0);

pub use brightness::{brightness, compute_brightness_factor};
pub use contrast::{compute_contrast, contrast, ContrastParams};
pub use saturation::{compute_saturation_factor, saturation};
pub use white_balance::{compute_white_balance_gains, white_balance};

/// Lookup table for a scalar sample transform, quantized back to 8 bits.
pub(crate) fn build_lut(f: impl Fn(f32) -> f32) -> [u8; 256] {
    std::array::from_fn(|value| quantize(f(value as f32)))
}

/// Apply one lookup table to every sample of the frame.
pub(crate) fn apply_lut(frame: &mut Frame, lut: &[u8; 256]) {
    let channels = frame.channels() as usize;
    apply_lut_samples(frame.samples_mut(), channels, lut);
}

/// Apply one lookup table to interleaved samples, `channels` per pixel.
pub(crate) fn apply_lut_samples(samples: &mut [u8], channels: usize, lut: &[u8; 256]) {
    parallel_for_each_chunk_mut(samples, channels, |pixel| {
        for sample in pixel.iter_mut() {
            *sample = lut[*sample as usize];
        }
    });
}
