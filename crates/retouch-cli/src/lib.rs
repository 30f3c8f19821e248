//! Shared utilities for retouch-cli
//!
//! Argument parsing, option merging and per-file processing used by the
//! `retouch` binary's commands.

pub mod args;
pub mod builders;
pub mod parsers;
pub mod processing;
pub mod types;

// Re-export commonly used items at the crate root for convenience
pub use args::CorrectionArgs;
pub use builders::{build_processing_params, load_processing_params};
pub use parsers::{parse_mono_placement, parse_photo_kind, parse_remap_policy};
pub use processing::{
    batch_output_path, determine_output_path, expand_inputs, output_file_name,
    process_single_image,
};
pub use types::ProcessingParams;
