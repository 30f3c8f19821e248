//! Retouch Core Library
//!
//! Automatic photo enhancement: white balance, brightness, contrast and
//! saturation corrections, plus monochrome conversion with luminance
//! remapping.

pub mod auto_adjust;
pub mod color;
pub mod config;
pub mod decoders;
pub mod error;
pub mod exporters;
pub mod frame;
pub mod models;
pub mod monochrome;
pub mod pipeline;
pub mod stats;

mod parallel;

// Re-export commonly used types
pub use error::{EnhanceError, Result};
pub use frame::Frame;
pub use models::{CorrectionConfig, MonochromePlacement, PhotoKind, RemapPolicy};
pub use monochrome::RemapWindow;
pub use pipeline::{enhance, enhance_dynamic, preview, EnhanceReport, Enhanced};
