use serde::Serialize;
use std::path::PathBuf;

use retouch_core::decoders::decode_image;
use retouch_core::models::{CorrectionConfig, PhotoKind};
use retouch_core::pipeline::{preview, EnhanceReport};
use retouch_core::stats::FrameStats;

use retouch_cli::{load_processing_params, CorrectionArgs};

/// Analysis result structure for JSON output.
///
/// Statistics of the input plus the factors each enabled stage would apply.
#[derive(Serialize)]
pub struct AnalysisResult {
    pub file: String,
    pub kind: PhotoKind,
    pub stats: FrameStats,
    pub corrections: CorrectionConfig,
    pub report: EnhanceReport,
}

/// Execute the analyze command: print image statistics and a dry run of the
/// enhancement pipeline. Nothing is written to disk.
///
/// With no corrections selected (by flags or config), every color correction
/// is previewed.
pub fn cmd_analyze(input: PathBuf, args: CorrectionArgs, json_output: bool) -> Result<(), String> {
    let mut params = load_processing_params(&args)?;
    if params.corrections.is_noop() {
        params.corrections = CorrectionConfig {
            monochrome: params.corrections.monochrome,
            monochrome_placement: params.corrections.monochrome_placement,
            ..CorrectionConfig::all()
        };
    }

    let frame = decode_image(&input).map_err(|e| e.to_string())?;
    let stats = FrameStats::compute(&frame);
    let report = preview(&frame, params.kind, &params.corrections).map_err(|e| e.to_string())?;

    let result = AnalysisResult {
        file: input.display().to_string(),
        kind: params.kind,
        stats,
        corrections: params.corrections,
        report,
    };

    if json_output {
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| format!("Failed to serialize analysis: {}", e))?;
        println!("{}", json);
    } else {
        print_analysis(&result);
    }

    Ok(())
}

fn print_analysis(result: &AnalysisResult) {
    let stats = &result.stats;

    println!("Analyzing: {}\n", result.file);

    println!("Image Info:");
    println!("  Dimensions: {}x{}", stats.width, stats.height);
    println!("  Channels: {}", stats.channels);
    println!("  Photo kind: {:?}", result.kind);

    println!("\nChannel Statistics:");
    let names: &[&str] = if stats.channels == 1 {
        &["Luma"]
    } else {
        &["Red", "Green", "Blue"]
    };
    for (name, channel) in names.iter().zip(&stats.per_channel) {
        println!(
            "  {:<6} min={:>3}, max={:>3}, mean={:.2}",
            format!("{}:", name),
            channel.min,
            channel.max,
            channel.mean
        );
    }
    println!("  Mean luminance: {:.2}", stats.mean_luminance);
    println!("  Luma p10/p90: {:.1} / {:.1}", stats.luma_p10, stats.luma_p90);

    let report = &result.report;
    let corrections = &result.corrections;

    println!("\nPlanned Corrections:");
    if corrections.white_balance {
        match report.white_balance {
            Some(gains) => println!(
                "  White balance: gains [{:.3}, {:.3}, {:.3}]",
                gains[0], gains[1], gains[2]
            ),
            None => println!("  White balance: skipped (monochrome)"),
        }
    }
    if let Some(factor) = report.brightness {
        println!("  Brightness: x{:.3}", factor);
    }
    if let Some(params) = report.contrast {
        println!(
            "  Contrast: x{:.3} around {:.0}",
            params.factor, params.midpoint
        );
    }
    if corrections.saturation {
        match report.saturation {
            Some(factor) => println!("  Saturation: x{:.3}", factor),
            None => println!("  Saturation: skipped"),
        }
    }
    if let Some(window) = report.monochrome {
        if window.applied {
            println!(
                "  Monochrome ({:?}): [{:.1}, {:.1}] -> [0, 255]",
                window.policy, window.low, window.high
            );
        } else {
            println!("  Monochrome ({:?}): flat image, left unchanged", window.policy);
        }
    }
}
