//! Color representations used by the correction stages
//!
//! Provides RGB <-> HSV conversion for saturation analysis and the Rec.601
//! luminance reduction used for monochrome conversion and contrast midpoints.

mod hsv;
mod luma;

#[cfg(test)]
mod tests;

pub use hsv::{hsv_to_rgb, rgb_to_hsv, Hsv};
pub use luma::{luma, rgb_to_luma};
