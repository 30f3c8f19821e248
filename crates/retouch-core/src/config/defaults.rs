//! Default enhancement settings and their validation/sanitization.

use serde::{Deserialize, Serialize};

use crate::models::{CorrectionConfig, MonochromePlacement, PhotoKind, RemapPolicy};

/// Suffix appended to the file stem of every enhanced image
pub const DEFAULT_OUTPUT_SUFFIX: &str = " - edit";

/// JPEG quality used when the output extension is .jpg/.jpeg
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Defaults applied to every run unless overridden on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhanceDefaults {
    /// Classification assumed for every input
    pub photo_kind: PhotoKind,
    pub white_balance: bool,
    pub brightness: bool,
    pub contrast: bool,
    pub saturation: bool,
    /// Remap policy for monochrome conversion; absent means keep color
    pub monochrome: Option<RemapPolicy>,
    pub monochrome_placement: MonochromePlacement,
}

impl Default for EnhanceDefaults {
    fn default() -> Self {
        Self {
            photo_kind: PhotoKind::Color,
            white_balance: false,
            brightness: false,
            contrast: false,
            saturation: false,
            monochrome: None,
            monochrome_placement: MonochromePlacement::Last,
        }
    }
}

impl EnhanceDefaults {
    /// Correction toggles described by these defaults.
    pub fn to_correction_config(&self) -> CorrectionConfig {
        CorrectionConfig {
            white_balance: self.white_balance,
            brightness: self.brightness,
            contrast: self.contrast,
            saturation: self.saturation,
            monochrome: self.monochrome,
            monochrome_placement: self.monochrome_placement,
        }
    }
}

/// Output naming and encoding settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Appended to the input stem, e.g. `beach.jpg` -> `beach - edit.jpg`
    pub suffix: String,
    /// 1-100
    pub jpeg_quality: u8,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl OutputSettings {
    /// Replace unusable values with the built-in defaults, returning a warning
    /// for each replacement.
    pub fn sanitize(&mut self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.suffix.is_empty() {
            warnings.push(format!(
                "output.suffix is empty and would overwrite inputs; using {:?}",
                DEFAULT_OUTPUT_SUFFIX
            ));
            self.suffix = DEFAULT_OUTPUT_SUFFIX.to_string();
        } else if self.suffix.contains(['/', '\\']) {
            warnings.push(format!(
                "output.suffix {:?} contains a path separator; using {:?}",
                self.suffix, DEFAULT_OUTPUT_SUFFIX
            ));
            self.suffix = DEFAULT_OUTPUT_SUFFIX.to_string();
        }

        if !(1..=100).contains(&self.jpeg_quality) {
            let clamped = self.jpeg_quality.clamp(1, 100);
            warnings.push(format!(
                "output.jpeg_quality {} out of range 1-100; using {}",
                self.jpeg_quality, clamped
            ));
            self.jpeg_quality = clamped;
        }

        warnings
    }
}
