//! JSON file-based preference backend.
//!
//! This module provides a small, human-readable preference store using JSON
//! serialization. It uses atomic file writes (write-to-temp + rename) so a crash
//! mid-write never leaves a truncated file behind.
//!
//! The entire file is loaded on open and rewritten on every save. That is fine
//! for a handful of short strings written once per keystroke.

use crate::domain::error::{HnSearchError, Result};
use crate::storage::backend::PreferenceStore;
use crate::storage::models::PreferenceData;
use std::path::{Path, PathBuf};

/// JSON file preference backend.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`. It is owned by the application loop,
/// which is the only writer.
#[derive(Debug)]
pub struct JsonPreferenceStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory copy of the file, loaded on creation.
    data: PreferenceData,
}

impl JsonPreferenceStore {
    /// Creates or opens a JSON preference file.
    ///
    /// If the file exists, loads existing values. Otherwise starts empty; the
    /// file is only created by the first [`save`](PreferenceStore::save).
    /// Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - The file exists but contains invalid JSON
    /// - File permissions prevent reading
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing preference storage");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no preference file yet, starting empty");
            PreferenceData::default()
        };

        tracing::debug!(value_count = data.values.len(), "preference storage initialized");

        Ok(Self { file_path, data })
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<PreferenceData> {
        let contents = std::fs::read_to_string(path)?;
        let data: PreferenceData = serde_json::from_str(&contents)
            .map_err(|e| HnSearchError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(version = data.version, values = data.values.len(), "loaded preference data");
        Ok(data)
    }

    /// Writes the in-memory data to disk using write-to-temp + rename.
    fn save_to_file(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| HnSearchError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!(path = ?self.file_path, "preferences saved");
        Ok(())
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn load(&self, key: &str) -> String {
        self.data.values.get(key).cloned().unwrap_or_default()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_save_preference", key = %key, value_len = value.len()).entered();

        self.data.values.insert(key.to_string(), value.to_string());
        self.save_to_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonPreferenceStore::new(dir.path().join("preferences.json")).unwrap();
        assert_eq!(store.load("search"), "");
    }

    #[test]
    fn value_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        {
            let mut store = JsonPreferenceStore::new(path.clone()).unwrap();
            store.save("search", "react").unwrap();
        }

        let reopened = JsonPreferenceStore::new(path).unwrap();
        assert_eq!(reopened.load("search"), "react");
    }

    #[test]
    fn opening_does_not_create_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let store = JsonPreferenceStore::new(path.clone()).unwrap();
        assert!(path.parent().unwrap().is_dir());
        assert!(!store.path().exists());
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = JsonPreferenceStore::new(path).unwrap_err();
        assert!(matches!(err, HnSearchError::Storage(_)));
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        let mut store = JsonPreferenceStore::new(path.clone()).unwrap();
        store.save("search", "rust").unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"version\": 1"));
    }
}
