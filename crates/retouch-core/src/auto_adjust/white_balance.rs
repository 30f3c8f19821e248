//! Gray-world white balance
//!
//! Assumes the average color of the scene is neutral: each channel is scaled
//! so its mean matches the mean of all three channel means.

use crate::frame::Frame;
use crate::stats::channel_means;

use super::build_lut;
use crate::parallel::parallel_for_each_chunk_mut;

/// Compute per-channel white balance gains without applying them.
///
/// Returns `None` for monochrome frames. Channel means are floored at 1
/// before anything else, so the grand mean is the average of the floored
/// means and each gain is `grand_mean / floored_mean`. Gains are not
/// range-limited.
pub fn compute_white_balance_gains(frame: &Frame) -> Option<[f32; 3]> {
    let Frame::Color(_) = frame else {
        return None;
    };

    let means = channel_means::<3>(frame.samples()).map(|mean| mean.max(1.0));
    let grand_mean = means.iter().sum::<f64>() / 3.0;

    Some(means.map(|mean| (grand_mean / mean) as f32))
}

/// Gray-world white balance, applied in place.
///
/// Returns the gains that were applied, or `None` when the frame is
/// monochrome and nothing was done.
pub fn white_balance(frame: &mut Frame) -> Option<[f32; 3]> {
    let gains = compute_white_balance_gains(frame)?;

    if gains.iter().all(|gain| (gain - 1.0).abs() < 1e-6) {
        return Some(gains);
    }

    let luts = gains.map(|gain| build_lut(|value| value * gain));
    parallel_for_each_chunk_mut(frame.samples_mut(), 3, |pixel| {
        for (sample, lut) in pixel.iter_mut().zip(luts.iter()) {
            *sample = lut[*sample as usize];
        }
    });

    log::debug!(
        "white balance gains: R={:.4} G={:.4} B={:.4}",
        gains[0],
        gains[1],
        gains[2]
    );
    Some(gains)
}
