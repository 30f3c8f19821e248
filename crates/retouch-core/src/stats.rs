//! Image statistics consumed by the correction stages
//!
//! Every function here is read-only. Statistics are only meaningful for
//! frames with at least one pixel; the pipeline rejects empty frames before
//! any of these run, and the functions return neutral values rather than
//! panicking if handed an empty slice.

use serde::Serialize;

use crate::color::luma;
use crate::frame::Frame;
use crate::parallel::parallel_fold_reduce;

/// Mean of each channel over interleaved samples with `C` channels.
pub fn channel_means<const C: usize>(samples: &[u8]) -> [f64; C] {
    let num_pixels = samples.len() / C;
    if num_pixels == 0 {
        return [0.0; C];
    }

    // Integer sums keep the result independent of the reduction order
    let sums = parallel_fold_reduce(
        samples,
        C,
        || [0u64; C],
        |mut acc, pixel| {
            for (sum, &value) in acc.iter_mut().zip(pixel) {
                *sum += u64::from(value);
            }
            acc
        },
        |mut a, b| {
            for (x, y) in a.iter_mut().zip(b) {
                *x += y;
            }
            a
        },
    );

    sums.map(|sum| sum as f64 / num_pixels as f64)
}

/// (min, max) of each channel over interleaved samples with `C` channels.
pub fn channel_extrema<const C: usize>(samples: &[u8]) -> [(u8, u8); C] {
    if samples.len() < C {
        return [(0, 0); C];
    }

    parallel_fold_reduce(
        samples,
        C,
        || [(u8::MAX, u8::MIN); C],
        |mut acc, pixel| {
            for (range, &value) in acc.iter_mut().zip(pixel) {
                range.0 = range.0.min(value);
                range.1 = range.1.max(value);
            }
            acc
        },
        |mut a, b| {
            for (x, y) in a.iter_mut().zip(b) {
                x.0 = x.0.min(y.0);
                x.1 = x.1.max(y.1);
            }
            a
        },
    )
}

/// 256-bin histogram of a single-channel buffer.
pub fn histogram(samples: &[u8]) -> Vec<u64> {
    parallel_fold_reduce(
        samples,
        1,
        || vec![0u64; 256],
        |mut bins, sample| {
            bins[sample[0] as usize] += 1;
            bins
        },
        |mut a, b| {
            for (x, y) in a.iter_mut().zip(b) {
                *x += y;
            }
            a
        },
    )
}

/// Percentile of a single-channel buffer.
///
/// Uses linear interpolation between the two closest ranks
/// (rank = pct / 100 * (n - 1)), computed exactly from the histogram
/// without sorting a copy of the data.
pub fn percentile(samples: &[u8], pct: f32) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }

    let bins = histogram(samples);
    let rank = (pct.clamp(0.0, 100.0) as f64 / 100.0) * (samples.len() - 1) as f64;
    let lower_rank = rank.floor() as u64;
    let upper_rank = rank.ceil() as u64;

    let lower = order_statistic(&bins, lower_rank) as f64;
    let upper = order_statistic(&bins, upper_rank) as f64;

    (lower + (upper - lower) * (rank - lower_rank as f64)) as f32
}

/// Value at zero-based position `k` of the sorted samples.
fn order_statistic(bins: &[u64], k: u64) -> u8 {
    let mut cumulative = 0u64;
    for (value, &count) in bins.iter().enumerate() {
        cumulative += count;
        if cumulative > k {
            return value as u8;
        }
    }
    u8::MAX
}

/// Mean brightness as the arithmetic mean of the channel means.
///
/// Unweighted: for color frames this is (mean_r + mean_g + mean_b) / 3.
pub fn mean_luminance(frame: &Frame) -> f64 {
    match frame {
        Frame::Mono(_) => channel_means::<1>(frame.samples())[0],
        Frame::Color(_) => {
            let means = channel_means::<3>(frame.samples());
            means.iter().sum::<f64>() / 3.0
        }
    }
}

/// Mean of the Rec.601 luma of every pixel.
pub fn mean_luma(frame: &Frame) -> f64 {
    match frame {
        Frame::Mono(_) => channel_means::<1>(frame.samples())[0],
        Frame::Color(_) => {
            let samples = frame.samples();
            let num_pixels = samples.len() / 3;
            if num_pixels == 0 {
                return 0.0;
            }
            let sum = parallel_fold_reduce(
                samples,
                3,
                || 0u64,
                |acc, pixel| acc + u64::from(luma(pixel[0], pixel[1], pixel[2])),
                |a, b| a + b,
            );
            sum as f64 / num_pixels as f64
        }
    }
}

/// Per-channel summary of one channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChannelSummary {
    pub min: u8,
    pub max: u8,
    pub mean: f64,
}

/// Statistics snapshot of a frame, used for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameStats {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    /// One entry for monochrome frames, three (R, G, B) for color frames
    pub per_channel: Vec<ChannelSummary>,
    pub mean_luminance: f64,
    pub luma_p10: f32,
    pub luma_p90: f32,
}

impl FrameStats {
    pub fn compute(frame: &Frame) -> Self {
        let samples = frame.samples();
        let per_channel = match frame {
            Frame::Mono(_) => summarize(channel_means::<1>(samples), channel_extrema::<1>(samples)),
            Frame::Color(_) => summarize(channel_means::<3>(samples), channel_extrema::<3>(samples)),
        };

        let luma_plane = frame.to_luma();
        Self {
            width: frame.width(),
            height: frame.height(),
            channels: frame.channels(),
            per_channel,
            mean_luminance: mean_luminance(frame),
            luma_p10: percentile(luma_plane.as_raw(), 10.0),
            luma_p90: percentile(luma_plane.as_raw(), 90.0),
        }
    }
}

fn summarize<const C: usize>(means: [f64; C], extrema: [(u8, u8); C]) -> Vec<ChannelSummary> {
    means
        .iter()
        .zip(extrema.iter())
        .map(|(&mean, &(min, max))| ChannelSummary { min, max, mean })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_means_rgb() {
        let samples = [10, 20, 30, 30, 40, 50];
        let means = channel_means::<3>(&samples);
        assert_eq!(means, [20.0, 30.0, 40.0]);
    }

    #[test]
    fn test_channel_means_empty() {
        assert_eq!(channel_means::<3>(&[]), [0.0; 3]);
    }

    #[test]
    fn test_channel_extrema() {
        let samples = [5, 200, 7, 250, 3, 7, 100, 100, 7];
        let extrema = channel_extrema::<3>(&samples);
        assert_eq!(extrema, [(5, 250), (3, 200), (7, 7)]);

        let mono = channel_extrema::<1>(&[9, 4, 17]);
        assert_eq!(mono, [(4, 17)]);
    }

    #[test]
    fn test_histogram_counts() {
        let bins = histogram(&[0, 0, 255, 7]);
        assert_eq!(bins.len(), 256);
        assert_eq!(bins[0], 2);
        assert_eq!(bins[7], 1);
        assert_eq!(bins[255], 1);
        assert_eq!(bins.iter().sum::<u64>(), 4);
    }

    #[test]
    fn test_percentile_interpolates_between_ranks() {
        let samples = [100, 100, 100, 160];
        assert!((percentile(&samples, 10.0) - 100.0).abs() < 1e-4);
        // rank 2.7 -> 100 + 0.7 * 60
        assert!((percentile(&samples, 90.0) - 142.0).abs() < 1e-4);
        assert!((percentile(&samples, 0.0) - 100.0).abs() < 1e-4);
        assert!((percentile(&samples, 100.0) - 160.0).abs() < 1e-4);
    }

    #[test]
    fn test_percentile_is_order_independent() {
        let ascending: Vec<u8> = (0..=100).collect();
        let mut shuffled = ascending.clone();
        shuffled.reverse();
        shuffled.swap(3, 70);

        assert!((percentile(&ascending, 50.0) - 50.0).abs() < 1e-4);
        assert_eq!(percentile(&ascending, 25.0), percentile(&shuffled, 25.0));
    }

    #[test]
    fn test_mean_luminance_is_unweighted() {
        let frame = Frame::from_raw(1, 1, 3, vec![255, 0, 0]).unwrap();
        assert!((mean_luminance(&frame) - 85.0).abs() < 1e-9);
        // Rec.601 weights red at 0.299
        assert!((mean_luma(&frame) - 76.0).abs() < 1e-9);
    }

    #[test]
    fn test_frame_stats_mono() {
        let frame = Frame::from_raw(2, 2, 1, vec![0, 0, 255, 255]).unwrap();
        let stats = FrameStats::compute(&frame);

        assert_eq!(stats.channels, 1);
        assert_eq!(stats.per_channel.len(), 1);
        assert_eq!(stats.per_channel[0].min, 0);
        assert_eq!(stats.per_channel[0].max, 255);
        assert!((stats.mean_luminance - 127.5).abs() < 1e-9);
    }
}
