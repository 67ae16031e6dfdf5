//! A string value mirrored into a [`PreferenceStore`].
//!
//! The value is seeded from the store on construction. Writes happen on later
//! changes only: reading back the initial value never triggers a save, so merely
//! starting the application does not touch the disk.

use crate::storage::backend::PreferenceStore;

/// A preference value that writes through to its store after the first read.
pub struct SemiPersistentValue {
    store: Box<dyn PreferenceStore>,
    key: String,
    value: String,
}

impl SemiPersistentValue {
    /// Loads `key` from `store` without writing anything back.
    #[must_use]
    pub fn new(store: Box<dyn PreferenceStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let value = store.load(&key);
        tracing::debug!(key = %key, value_len = value.len(), "preference loaded");
        Self { store, key, value }
    }

    #[must_use]
    pub fn get(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Updates the value and persists it if it changed.
    ///
    /// Returns `true` when a write was attempted. Write failures are logged and
    /// otherwise ignored.
    pub fn set(&mut self, value: &str) -> bool {
        if self.value == value {
            return false;
        }
        value.clone_into(&mut self.value);

        if let Err(e) = self.store.save(&self.key, &self.value) {
            tracing::error!(key = %self.key, error = %e, "failed to persist preference");
        }
        true
    }
}

impl std::fmt::Debug for SemiPersistentValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemiPersistentValue")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Result;
    use std::sync::{Arc, Mutex};

    /// Counts writes so tests can assert on them.
    #[derive(Default, Clone)]
    struct RecordingStore {
        saves: Arc<Mutex<Vec<(String, String)>>>,
        initial: String,
    }

    impl PreferenceStore for RecordingStore {
        fn load(&self, _key: &str) -> String {
            self.initial.clone()
        }

        fn save(&mut self, key: &str, value: &str) -> Result<()> {
            self.saves.lock().unwrap().push((key.to_string(), value.to_string()));
            Ok(())
        }
    }

    #[test]
    fn construction_reads_without_writing() {
        let store = RecordingStore { initial: "react".into(), ..Default::default() };
        let saves = Arc::clone(&store.saves);

        let value = SemiPersistentValue::new(Box::new(store), "search");

        assert_eq!(value.get(), "react");
        assert!(saves.lock().unwrap().is_empty());
    }

    #[test]
    fn unchanged_value_is_not_rewritten() {
        let store = RecordingStore { initial: "react".into(), ..Default::default() };
        let saves = Arc::clone(&store.saves);
        let mut value = SemiPersistentValue::new(Box::new(store), "search");

        assert!(!value.set("react"));
        assert!(saves.lock().unwrap().is_empty());
    }

    #[test]
    fn every_change_is_written_through() {
        let store = RecordingStore::default();
        let saves = Arc::clone(&store.saves);
        let mut value = SemiPersistentValue::new(Box::new(store), "search");

        assert!(value.set("r"));
        assert!(value.set("re"));
        assert!(value.set(""));

        let saves = saves.lock().unwrap();
        let written: Vec<&str> = saves.iter().map(|(_, v)| v.as_str()).collect();
        assert_eq!(written, vec!["r", "re", ""]);
        assert!(saves.iter().all(|(k, _)| k == "search"));
    }
}
