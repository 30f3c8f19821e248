use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use retouch_cli::{
    batch_output_path, expand_inputs, load_processing_params, process_single_image,
    CorrectionArgs,
};

/// Execute the batch command: enhance every supported image in `src_dir`
/// and write the results into `dst_dir`.
///
/// A failing file is reported and skipped; the command fails at the end if
/// any file failed.
pub fn cmd_batch(
    src_dir: PathBuf,
    dst_dir: PathBuf,
    recursive: bool,
    threads: Option<usize>,
    args: CorrectionArgs,
) -> Result<(), String> {
    let batch_start = Instant::now();
    let params = load_processing_params(&args)?;

    let inputs = expand_inputs(&src_dir, recursive)?;
    if inputs.is_empty() {
        return Err(format!(
            "No supported image files found in {} (supported: {})",
            src_dir.display(),
            retouch_core::decoders::SUPPORTED_EXTENSIONS.join(", ")
        ));
    }

    println!("Found {} image files to process", inputs.len());

    // Configure thread pool if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        println!("Using {} threads for parallel processing", num_threads);
    }

    if !dst_dir.exists() {
        std::fs::create_dir_all(&dst_dir)
            .map_err(|e| format!("Failed to create output directory: {}", e))?;
    }

    println!("\nProcessing {} files in parallel...\n", inputs.len());

    // Progress tracking
    let processed_count = AtomicUsize::new(0);
    let total_files = inputs.len();

    let results: Vec<Result<PathBuf, String>> = inputs
        .par_iter()
        .map(|input| {
            let file_start = Instant::now();
            let output_path =
                batch_output_path(input, &src_dir, &dst_dir, &params.output.suffix)?;

            let result = process_single_image(input, &output_path, &params);

            let count = processed_count.fetch_add(1, Ordering::SeqCst) + 1;
            match &result {
                Ok(_) => println!(
                    "[{}/{}] {} -> {} ({:.2}s)",
                    count,
                    total_files,
                    input.display(),
                    output_path.display(),
                    file_start.elapsed().as_secs_f64()
                ),
                Err(e) => println!(
                    "[{}/{}] {} FAILED: {}",
                    count,
                    total_files,
                    input.display(),
                    e
                ),
            }

            result.map(|_| output_path)
        })
        .collect();

    // Summarize results
    let mut success_count = 0;
    let mut errors: Vec<(PathBuf, String)> = Vec::new();

    for (input, result) in inputs.iter().zip(results) {
        match result {
            Ok(_) => success_count += 1,
            Err(e) => errors.push((input.clone(), e)),
        }
    }

    let batch_elapsed = batch_start.elapsed();

    println!("\n========================================");
    println!("BATCH PROCESSING COMPLETE");
    println!("========================================");
    println!("  Successful: {}", success_count);
    println!("  Failed:     {}", errors.len());
    println!("  Output dir: {}", dst_dir.display());
    println!("  Total time: {:.2}s", batch_elapsed.as_secs_f64());
    if success_count > 0 {
        println!(
            "  Avg time:   {:.2}s per file",
            batch_elapsed.as_secs_f64() / success_count as f64
        );
    }

    if !errors.is_empty() {
        println!("\nErrors:");
        for (path, error) in &errors {
            println!("  {}: {}", path.display(), error);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(format!("{} files failed to process", errors.len()))
    }
}
