use std::path::PathBuf;
use std::time::Instant;

use retouch_cli::{determine_output_path, load_processing_params, process_single_image, CorrectionArgs};

/// Execute the enhance command on a single file.
pub fn cmd_enhance(
    input: PathBuf,
    out: Option<PathBuf>,
    args: CorrectionArgs,
) -> Result<(), String> {
    let start = Instant::now();
    let params = load_processing_params(&args)?;

    if !input.is_file() {
        return Err(format!("Input file not found: {}", input.display()));
    }

    let output_path = determine_output_path(&input, out.as_deref(), &params.output.suffix)?;
    if output_path == input {
        return Err(format!(
            "Output path {} would overwrite the input",
            output_path.display()
        ));
    }

    println!("Enhancing {}...", input.display());
    let report = process_single_image(&input, &output_path, &params)?;

    if let Some(gains) = report.white_balance {
        println!(
            "  White balance: [{:.3}, {:.3}, {:.3}]",
            gains[0], gains[1], gains[2]
        );
    }
    if let Some(factor) = report.brightness {
        println!("  Brightness: x{:.3}", factor);
    }
    if let Some(contrast) = report.contrast {
        println!("  Contrast: x{:.3}", contrast.factor);
    }
    if let Some(factor) = report.saturation {
        println!("  Saturation: x{:.3}", factor);
    }
    if let Some(window) = report.monochrome {
        println!("  Monochrome: {:?}", window.policy);
    }

    println!(
        "Saved {} ({:.2}s)",
        output_path.display(),
        start.elapsed().as_secs_f64()
    );
    Ok(())
}
