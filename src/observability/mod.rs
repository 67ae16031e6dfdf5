//! File-based logging via `tracing`.
//!
//! The terminal front end owns stdout, so the `tracing` subscriber writes
//! formatted events to a rotating file in the data directory:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → RotatingLogFile → hnsearch.log
//! ```
//!
//! # Configuration
//!
//! The level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `log_level` config option / `--log-level` flag
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

pub mod file_writer;
mod init;

pub use file_writer::RotatingLogFile;
pub use init::init_tracing;
