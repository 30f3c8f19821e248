//! Command implementations for the retouch CLI.

mod analyze;
mod batch;
mod enhance;
mod init;

// Re-export all command functions
pub use analyze::cmd_analyze;
pub use batch::cmd_batch;
pub use enhance::cmd_enhance;
pub use init::cmd_init;
