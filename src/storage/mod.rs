//! Storage layer for the persisted search preference.
//!
//! The only durable state is the last search term. It is kept in a small JSON
//! file in the data directory, read once at startup and rewritten whenever the
//! input text changes afterwards.
//!
//! # Modules
//!
//! - `backend`: [`PreferenceStore`] trait abstraction
//! - `json`: JSON file-based implementation with atomic writes
//! - `models`: On-disk record format
//! - `persistent`: [`SemiPersistentValue`], which skips the write on first read

pub mod backend;
pub mod json;
pub mod models;
pub mod persistent;

pub use backend::PreferenceStore;
pub use json::JsonPreferenceStore;
pub use models::PreferenceData;
pub use persistent::SemiPersistentValue;
