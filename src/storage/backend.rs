//! Preference storage abstraction.
//!
//! This module defines the [`PreferenceStore`] trait that abstracts over
//! durable key/value backends. The application only ever persists one string
//! (the last search term), but the trait is keyed so the storage format does not
//! have to change if more preferences appear.

use crate::domain::error::Result;

/// Abstraction over durable preference backends.
///
/// Reads are synchronous and infallible: a missing or unreadable key yields an
/// empty string. Writes report failure, but callers treat them as
/// fire-and-forget and only log the error.
///
/// # Implementations
///
/// - [`JsonPreferenceStore`](crate::storage::JsonPreferenceStore): JSON file with atomic writes
///
/// # Examples
///
/// ```no_run
/// use hnsearch::storage::{JsonPreferenceStore, PreferenceStore};
/// use std::path::PathBuf;
///
/// let mut store = JsonPreferenceStore::new(PathBuf::from("/tmp/preferences.json"))?;
/// store.save("search", "react")?;
/// assert_eq!(store.load("search"), "react");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait PreferenceStore: Send {
    /// Returns the previously saved value for `key`, or an empty string.
    fn load(&self, key: &str) -> String;

    /// Durably stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized or written.
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}
