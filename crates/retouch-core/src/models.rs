//! Data models for retouch
//!
//! Caller-facing choices that drive a single enhancement run: what kind of
//! photo it is, which corrections are enabled, and how monochrome conversion
//! remaps luminance.

use serde::{Deserialize, Serialize};

/// Caller-supplied classification of the photo.
///
/// Independent of the buffer's channel count: a grayscale scan saved as RGB
/// can still be declared `Monochrome`, which disables saturation boosting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PhotoKind {
    #[default]
    Color,
    Monochrome,
}

/// Luminance range remapping used when converting to monochrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RemapPolicy {
    /// Stretch the observed [min, max] luminance to [0, 255].
    /// Soft, realistic result.
    #[default]
    Natural,

    /// Same stretch with the range denominator floored at 1.
    /// Pure black and white end points.
    Forced,

    /// Stretch the 10th-90th percentile window to [0, 255], clamping the tails.
    /// Ignores outlier pixels.
    Percentile,
}

/// Where monochrome conversion runs relative to the color corrections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MonochromePlacement {
    /// After every color correction
    #[default]
    Last,

    /// Immediately after white balance, before brightness and contrast
    AfterWhiteBalance,
}

/// Immutable set of correction toggles for one enhancement run.
///
/// Constructed once per batch and shared by reference with every image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CorrectionConfig {
    /// Equalize the per-channel means
    pub white_balance: bool,

    /// Scale toward a mean luminance of 128
    pub brightness: bool,

    /// Stretch contrast around the mean luminance
    pub contrast: bool,

    /// Boost HSV saturation toward a mean of 128 (color photos only)
    pub saturation: bool,

    /// Convert to monochrome with the given policy
    pub monochrome: Option<RemapPolicy>,

    /// Stage order for monochrome conversion
    pub monochrome_placement: MonochromePlacement,
}

impl CorrectionConfig {
    /// Every color correction enabled, no monochrome conversion.
    pub fn all() -> Self {
        Self {
            white_balance: true,
            brightness: true,
            contrast: true,
            saturation: true,
            monochrome: None,
            monochrome_placement: MonochromePlacement::Last,
        }
    }

    pub fn with_monochrome(mut self, policy: RemapPolicy) -> Self {
        self.monochrome = Some(policy);
        self
    }

    pub fn with_placement(mut self, placement: MonochromePlacement) -> Self {
        self.monochrome_placement = placement;
        self
    }

    /// True when no stage would touch the image.
    pub fn is_noop(&self) -> bool {
        !self.white_balance
            && !self.brightness
            && !self.contrast
            && !self.saturation
            && self.monochrome.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_noop() {
        let config = CorrectionConfig::default();
        assert!(config.is_noop());
        assert_eq!(config.monochrome_placement, MonochromePlacement::Last);
    }

    #[test]
    fn test_builders() {
        let config = CorrectionConfig::all()
            .with_monochrome(RemapPolicy::Percentile)
            .with_placement(MonochromePlacement::AfterWhiteBalance);
        assert!(!config.is_noop());
        assert_eq!(config.monochrome, Some(RemapPolicy::Percentile));
        assert_eq!(
            config.monochrome_placement,
            MonochromePlacement::AfterWhiteBalance
        );
    }

    #[test]
    fn test_config_deserializes_partial_yaml() {
        let yaml = "brightness: true\nmonochrome: forced\nmonochrome_placement: after_white_balance\n";
        let config: CorrectionConfig = serde_yaml::from_str(yaml).unwrap();

        assert!(config.brightness);
        assert!(!config.white_balance);
        assert_eq!(config.monochrome, Some(RemapPolicy::Forced));
        assert_eq!(
            config.monochrome_placement,
            MonochromePlacement::AfterWhiteBalance
        );
    }
}
