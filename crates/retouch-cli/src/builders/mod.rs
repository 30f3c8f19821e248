//! Builder functions for CLI options.

use retouch_core::config::{load_config, load_config_from, log_config_usage, RetouchConfig};
use retouch_core::models::CorrectionConfig;

use crate::args::CorrectionArgs;
use crate::parsers::{parse_mono_placement, parse_photo_kind, parse_remap_policy};
use crate::types::ProcessingParams;

/// Merge command-line flags over the config file defaults.
///
/// Correction toggles are taken from the flags when any is given, otherwise
/// from the config. `--kind`, `--mono` and `--mono-placement` each override
/// their config value individually.
pub fn build_processing_params(
    args: &CorrectionArgs,
    config: &RetouchConfig,
) -> Result<ProcessingParams, String> {
    let defaults = &config.defaults;

    let kind = match &args.kind {
        Some(kind) => parse_photo_kind(kind)?,
        None => defaults.photo_kind,
    };

    let mut corrections = if args.all {
        CorrectionConfig::all()
    } else if args.has_toggles() {
        CorrectionConfig {
            white_balance: args.white_balance,
            brightness: args.brightness,
            contrast: args.contrast,
            saturation: args.saturation,
            ..CorrectionConfig::default()
        }
    } else {
        defaults.to_correction_config()
    };

    corrections.monochrome = match &args.mono {
        Some(policy) => Some(parse_remap_policy(policy)?),
        None => defaults.monochrome,
    };
    corrections.monochrome_placement = match &args.mono_placement {
        Some(placement) => parse_mono_placement(placement)?,
        None => defaults.monochrome_placement,
    };

    Ok(ProcessingParams {
        kind,
        corrections,
        output: config.output.clone(),
    })
}

/// Load the config file named by `--config` (or found on the search path)
/// and merge the command-line flags over it.
pub fn load_processing_params(args: &CorrectionArgs) -> Result<ProcessingParams, String> {
    // An explicit --config must load; the search path is not consulted
    let handle = match &args.config {
        Some(path) => load_config_from(path).map_err(|e| e.to_string())?,
        None => load_config(None),
    };
    log_config_usage(&handle);

    let params = build_processing_params(args, &handle.config)?;
    if params.corrections.is_noop() {
        log::warn!("No corrections enabled; output will be a re-encoded copy of the input");
    }
    Ok(params)
}
