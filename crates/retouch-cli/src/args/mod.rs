//! Argument structs shared between CLI commands.

use std::path::PathBuf;

use clap::Args;

/// Correction selection shared by the enhance, batch and analyze commands.
///
/// Flags override the `defaults:` section of the config file. When none of
/// the correction toggles is given, the config file decides which run.
#[derive(Args, Clone, Debug, Default)]
pub struct CorrectionArgs {
    /// Photo kind: "color" or "mono" (mono disables saturation boosting)
    #[arg(long, value_name = "KIND")]
    pub kind: Option<String>,

    /// Equalize the channel means to remove color casts
    #[arg(long)]
    pub white_balance: bool,

    /// Scale toward a mean luminance of 128
    #[arg(long)]
    pub brightness: bool,

    /// Stretch contrast around the mean luminance
    #[arg(long)]
    pub contrast: bool,

    /// Boost muted colors (color photos only)
    #[arg(long)]
    pub saturation: bool,

    /// Enable white balance, brightness, contrast and saturation
    #[arg(long)]
    pub all: bool,

    /// Convert to monochrome: "natural", "forced" or "percentile"
    #[arg(long, value_name = "POLICY")]
    pub mono: Option<String>,

    /// When to convert to monochrome: "last" (default) or "after-wb"
    #[arg(long, value_name = "WHEN")]
    pub mono_placement: Option<String>,

    /// Config file (overrides the default search path)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl CorrectionArgs {
    /// True when any correction toggle was given on the command line.
    pub fn has_toggles(&self) -> bool {
        self.all || self.white_balance || self.brightness || self.contrast || self.saturation
    }
}
