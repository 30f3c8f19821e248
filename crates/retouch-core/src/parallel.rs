//! Parallelization helpers for per-pixel work
//!
//! Small images are processed sequentially; above [`PARALLEL_THRESHOLD`]
//! pixels the same closures run on the rayon pool. Both paths produce
//! identical results only when the reduction is associative, so callers
//! accumulate in integers rather than floats.

use rayon::prelude::*;

/// Minimum number of pixels to trigger parallel processing
pub(crate) const PARALLEL_THRESHOLD: usize = 30_000;

/// Parallel fold/reduce over chunks with automatic threshold-based dispatch.
///
/// # Arguments
/// * `data` - The slice to process
/// * `chunk_size` - Size of each chunk (e.g., 3 for RGB pixels)
/// * `init` - Function that creates a new accumulator
/// * `fold_fn` - Function that folds a chunk into the accumulator
/// * `reduce_fn` - Function that combines two accumulators
///
/// # Example
/// ```ignore
/// let sums = parallel_fold_reduce(
///     samples,
///     3,
///     || [0u64; 3],
///     |mut acc, px| { acc[0] += px[0] as u64; acc[1] += px[1] as u64; acc[2] += px[2] as u64; acc },
///     |a, b| [a[0] + b[0], a[1] + b[1], a[2] + b[2]],
/// );
/// ```
pub(crate) fn parallel_fold_reduce<T, A, I, F, R>(
    data: &[T],
    chunk_size: usize,
    init: I,
    fold_fn: F,
    reduce_fn: R,
) -> A
where
    T: Sync,
    A: Send + Clone,
    I: Fn() -> A + Sync,
    F: Fn(A, &[T]) -> A + Sync,
    R: Fn(A, A) -> A + Sync,
{
    let num_elements = data.len() / chunk_size;

    if num_elements >= PARALLEL_THRESHOLD {
        data.par_chunks_exact(chunk_size)
            .fold(&init, &fold_fn)
            .reduce(&init, &reduce_fn)
    } else {
        let mut acc = init();
        for chunk in data.chunks_exact(chunk_size) {
            acc = fold_fn(acc, chunk);
        }
        acc
    }
}

/// Parallel for-each over mutable chunks with automatic threshold-based dispatch.
///
/// # Example
/// ```ignore
/// parallel_for_each_chunk_mut(samples, 3, |pixel| {
///     pixel[0] = quantize(pixel[0] as f32 * r_gain);
/// });
/// ```
pub(crate) fn parallel_for_each_chunk_mut<T, F>(data: &mut [T], chunk_size: usize, f: F)
where
    T: Send + Sync,
    F: Fn(&mut [T]) + Sync,
{
    let num_elements = data.len() / chunk_size;

    if num_elements >= PARALLEL_THRESHOLD {
        data.par_chunks_exact_mut(chunk_size).for_each(&f);
    } else {
        for chunk in data.chunks_exact_mut(chunk_size) {
            f(chunk);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_channels(data: &[u8]) -> (u64, u64, u64) {
        parallel_fold_reduce(
            data,
            3,
            || (0u64, 0u64, 0u64),
            |acc, pixel| {
                (
                    acc.0 + pixel[0] as u64,
                    acc.1 + pixel[1] as u64,
                    acc.2 + pixel[2] as u64,
                )
            },
            |a, b| (a.0 + b.0, a.1 + b.1, a.2 + b.2),
        )
    }

    #[test]
    fn test_parallel_fold_reduce_small() {
        // Small dataset - sequential path
        let data: Vec<u8> = vec![1, 2, 3, 4, 5, 6];

        assert_eq!(sum_channels(&data), (5, 7, 9));
    }

    #[test]
    fn test_parallel_fold_reduce_large() {
        // Large dataset - parallel path
        let num_pixels = PARALLEL_THRESHOLD + 1000;
        let mut data: Vec<u8> = Vec::with_capacity(num_pixels * 3);
        for i in 0..num_pixels {
            data.push((i % 256) as u8);
            data.push(10);
            data.push(200);
        }

        let expected_r: u64 = (0..num_pixels).map(|i| (i % 256) as u64).sum();
        let (r_sum, g_sum, b_sum) = sum_channels(&data);

        assert_eq!(r_sum, expected_r);
        assert_eq!(g_sum, 10 * num_pixels as u64);
        assert_eq!(b_sum, 200 * num_pixels as u64);
    }

    #[test]
    fn test_parallel_for_each_chunk_mut_small() {
        let mut data: Vec<u8> = vec![10, 20, 30, 40, 50, 60];

        parallel_for_each_chunk_mut(&mut data, 3, |pixel| {
            pixel[0] /= 2;
            pixel[2] = pixel[2].saturating_add(200);
        });

        assert_eq!(data, vec![5, 20, 230, 20, 50, 255]);
    }

    #[test]
    fn test_parallel_for_each_chunk_mut_large() {
        let num_pixels = PARALLEL_THRESHOLD + 1000;
        let mut data: Vec<u8> = vec![1; num_pixels * 3];

        parallel_for_each_chunk_mut(&mut data, 3, |pixel| {
            for sample in pixel.iter_mut() {
                *sample *= 2;
            }
        });

        assert!(data.iter().all(|&v| v == 2));
    }
}
