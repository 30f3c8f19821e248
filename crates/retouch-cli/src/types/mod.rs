//! Type definitions for CLI.

use retouch_core::config::OutputSettings;
use retouch_core::models::{CorrectionConfig, PhotoKind};

/// Settings for processing images, resolved once from the config file and
/// the command line and shared by every file in a run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingParams {
    pub kind: PhotoKind,
    pub corrections: CorrectionConfig,
    pub output: OutputSettings,
}

impl Default for ProcessingParams {
    fn default() -> Self {
        Self {
            kind: PhotoKind::Color,
            corrections: CorrectionConfig::all(),
            output: OutputSettings::default(),
        }
    }
}
