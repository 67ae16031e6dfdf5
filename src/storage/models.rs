//! On-disk record format for the preference store.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current version of the preference file format.
pub const FORMAT_VERSION: u32 = 1;

/// Top-level structure serialized to the preference file.
///
/// ```json
/// {
///   "version": 1,
///   "values": {
///     "search": "react"
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceData {
    /// Version of the storage format for future migrations.
    pub version: u32,

    /// Stored preference values keyed by name.
    #[serde(default)]
    pub values: BTreeMap<String, String>,
}

impl Default for PreferenceData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            values: BTreeMap::new(),
        }
    }
}
