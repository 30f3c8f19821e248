//! Error type shared by every retouch-core operation.
//!
//! Degenerate statistics (flat images, fully desaturated sources) are not
//! errors; each stage resolves them locally. Only malformed buffers and I/O
//! failures surface here.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnhanceError {
    #[error("Image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("Buffer length mismatch: expected {expected} samples, got {actual}")]
    BufferMismatch { expected: usize, actual: usize },

    #[error("Unsupported channel count: {0} (expected 1 or 3)")]
    UnsupportedChannels(u8),

    #[error("Failed to decode {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },

    #[error("Failed to encode {}: {message}", path.display())]
    Encode { path: PathBuf, message: String },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EnhanceError>;
