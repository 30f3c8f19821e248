//! Parsing functions for CLI arguments.

use retouch_core::models::{MonochromePlacement, PhotoKind, RemapPolicy};

/// Parse photo kind from string
///
/// Supported values:
/// - "color" / "colour"
/// - "mono" / "monochrome" / "bw" / "grayscale"
pub fn parse_photo_kind(kind_str: &str) -> Result<PhotoKind, String> {
    match kind_str.to_lowercase().as_str() {
        "color" | "colour" => Ok(PhotoKind::Color),
        "mono" | "monochrome" | "bw" | "b&w" | "grayscale" | "greyscale" => {
            Ok(PhotoKind::Monochrome)
        }
        _ => Err(format!(
            "Unknown photo kind: '{}'. Valid options: color, mono",
            kind_str
        )),
    }
}

/// Parse monochrome remap policy from string
///
/// Supported values:
/// - "natural" (default): stretch the observed range
/// - "forced": stretch with pure black and white end points
/// - "percentile": stretch the 10th-90th percentile window
pub fn parse_remap_policy(policy_str: &str) -> Result<RemapPolicy, String> {
    match policy_str.to_lowercase().as_str() {
        "natural" | "default" | "" => Ok(RemapPolicy::Natural),
        "forced" | "force" | "full" => Ok(RemapPolicy::Forced),
        "percentile" | "percent" | "p10-p90" => Ok(RemapPolicy::Percentile),
        _ => Err(format!(
            "Unknown monochrome policy: '{}'. Valid options: natural (default), forced, percentile",
            policy_str
        )),
    }
}

/// Parse where monochrome conversion runs
///
/// Supported values:
/// - "last" (default): after every color correction
/// - "after-wb": right after white balance
pub fn parse_mono_placement(placement_str: &str) -> Result<MonochromePlacement, String> {
    match placement_str.to_lowercase().as_str() {
        "last" | "end" | "" => Ok(MonochromePlacement::Last),
        "after-wb" | "after-white-balance" | "early" => Ok(MonochromePlacement::AfterWhiteBalance),
        _ => Err(format!(
            "Unknown monochrome placement: '{}'. Valid options: last (default), after-wb",
            placement_str
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_photo_kind() {
        assert_eq!(parse_photo_kind("color").unwrap(), PhotoKind::Color);
        assert_eq!(parse_photo_kind("MONO").unwrap(), PhotoKind::Monochrome);
        assert_eq!(parse_photo_kind("bw").unwrap(), PhotoKind::Monochrome);
        assert!(parse_photo_kind("sepia").is_err());
    }

    #[test]
    fn test_parse_remap_policy() {
        assert_eq!(parse_remap_policy("natural").unwrap(), RemapPolicy::Natural);
        assert_eq!(parse_remap_policy("Forced").unwrap(), RemapPolicy::Forced);
        assert_eq!(
            parse_remap_policy("percentile").unwrap(),
            RemapPolicy::Percentile
        );
        let err = parse_remap_policy("max").unwrap_err();
        assert!(err.contains("Valid options"));
    }

    #[test]
    fn test_parse_mono_placement() {
        assert_eq!(
            parse_mono_placement("last").unwrap(),
            MonochromePlacement::Last
        );
        assert_eq!(
            parse_mono_placement("after-wb").unwrap(),
            MonochromePlacement::AfterWhiteBalance
        );
        assert!(parse_mono_placement("first").is_err());
    }
}
