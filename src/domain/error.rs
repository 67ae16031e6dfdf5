//! Error types for hnsearch.
//!
//! This module defines the centralized error type [`HnSearchError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Fetch failures are deliberately *not* represented here: they are recoverable
//! outcomes reported through [`crate::worker::FetchError`] and collapse into the
//! result store's error flag instead of propagating.

use thiserror::Error;

/// The main error type for hnsearch operations.
///
/// Covers conditions that abort an operation: storage that cannot be read or
/// written, invalid configuration, and malformed user commands.
///
/// # Examples
///
/// ```
/// use hnsearch::domain::HnSearchError;
///
/// fn validate_config() -> Result<(), HnSearchError> {
///     Err(HnSearchError::Config("api_base must not be empty".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum HnSearchError {
    /// Preference storage operation failed.
    ///
    /// Occurs when the preference file exists but cannot be parsed, or when a
    /// serialized write cannot be produced.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when a configuration file cannot be parsed or holds values that
    /// make no sense (empty API base, zero timeout).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Http(String),

    /// A terminal command could not be understood.
    #[error("Invalid command: {0}")]
    Command(String),
}

/// A specialized `Result` type for hnsearch operations.
pub type Result<T> = std::result::Result<T, HnSearchError>;
