//! hnsearch: a terminal client for searching Hacker News stories.
//!
//! hnsearch queries the Hacker News Algolia search API and shows the hits as
//! a sortable table:
//! - The last search term persists across restarts in a small JSON file
//! - Fetches run asynchronously; only the latest submission's response is applied
//! - Stories can be re-sorted by title, author, comments, or points, and
//!   dismissed locally

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal loop (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Result reducer, sort projection, query control   │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - JSON I/O    │   │ - HTTP client │
//! │ - Commands    │   │ - Preferences │   │ - Fetch tasks │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Data directory paths (infrastructure/)           │
//! │  - Error types (domain/error)                       │
//! │  - Story model (domain/story)                       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber with rotating log file        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! Configuration is read from an optional TOML file:
//!
//! ```toml
//! api_base = "https://hn.algolia.com/api/v1/search?query="
//! data_dir = "~/.local/share/hnsearch"
//! log_level = "debug"
//! request_timeout_secs = 10
//! escape_query = false
//! ```
//!
//! # Example
//!
//! ```rust
//! use hnsearch::{handle_event, initialize, Action, Config, Event};
//!
//! let config = Config::default();
//! let mut state = initialize(&config, "react");
//!
//! let (_, actions) = handle_event(&mut state, &Event::Mounted);
//! assert!(matches!(actions.as_slice(), [Action::Fetch(_)]));
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, QueryController, SortKey, SortState};
pub use domain::{HnSearchError, Result, StoryItem};

use infrastructure::{default_data_dir, expand_tilde, LOG_FILE, PREFERENCES_FILE};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default search endpoint; the query text is appended to it.
pub const DEFAULT_API_BASE: &str = "https://hn.algolia.com/api/v1/search?query=";

const DEFAULT_PREFERENCE_KEY: &str = "search";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_DISPLAY_WIDTH: usize = 100;

/// Runtime configuration.
///
/// Every field has a default, so an empty TOML file or map is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Search endpoint prefix. The query text is appended directly.
    pub api_base: String,

    /// Directory for the preference and log files.
    ///
    /// A leading `~` is expanded. Default: the platform data directory.
    pub data_dir: Option<String>,

    /// Key the search term is stored under. Default: `"search"`
    pub preference_key: String,

    /// Log filter directive such as `info` or `hnsearch=debug`.
    ///
    /// Overridden by `RUST_LOG`. Default: `"info"`
    pub log_level: Option<String>,

    /// Per-request timeout in seconds. Default: 10
    pub request_timeout_secs: u64,

    /// Form-encode the query text before appending it. Default: `false`
    pub escape_query: bool,

    /// Width of the rendered table in columns. Default: 100
    pub display_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            data_dir: None,
            preference_key: DEFAULT_PREFERENCE_KEY.to_string(),
            log_level: None,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            escape_query: false,
            display_width: DEFAULT_DISPLAY_WIDTH,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`HnSearchError::Io`] if the file cannot be read and
    /// [`HnSearchError::Config`] if it does not parse or fails validation.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)
            .map_err(|e| HnSearchError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `key = value` overrides on top of the current values.
    ///
    /// Keys use the TOML field names. Applied in map order; the result is
    /// validated once all keys are set.
    ///
    /// # Errors
    ///
    /// Returns [`HnSearchError::Config`] for an unknown key, a value that does
    /// not parse as the field's type, or a result that fails [`validate`](Self::validate).
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use hnsearch::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("request_timeout_secs".to_string(), "5".to_string());
    /// map.insert("escape_query".to_string(), "true".to_string());
    ///
    /// let mut config = Config::default();
    /// config.apply_overrides(&map)?;
    /// assert_eq!(config.request_timeout_secs, 5);
    /// assert!(config.escape_query);
    /// # Ok::<(), hnsearch::HnSearchError>(())
    /// ```
    pub fn apply_overrides(&mut self, map: &BTreeMap<String, String>) -> Result<()> {
        for (key, value) in map {
            let value = value.trim();
            match key.as_str() {
                "api_base" => value.clone_into(&mut self.api_base),
                "data_dir" => self.data_dir = Some(value.to_string()).filter(|v| !v.is_empty()),
                "preference_key" => value.clone_into(&mut self.preference_key),
                "log_level" => self.log_level = Some(value.to_string()).filter(|v| !v.is_empty()),
                "request_timeout_secs" => self.request_timeout_secs = parse_override(key, value)?,
                "escape_query" => self.escape_query = parse_override(key, value)?,
                "display_width" => self.display_width = parse_override(key, value)?,
                other => return Err(HnSearchError::Config(format!("unknown config key: {other}"))),
            }
        }
        self.validate()
    }

    /// Checks values that would make the client unusable.
    ///
    /// # Errors
    ///
    /// Returns [`HnSearchError::Config`] for an empty `api_base` or
    /// `preference_key`, or a zero `request_timeout_secs`.
    pub fn validate(&self) -> Result<()> {
        if self.api_base.trim().is_empty() {
            return Err(HnSearchError::Config("api_base must not be empty".to_string()));
        }
        if self.preference_key.trim().is_empty() {
            return Err(HnSearchError::Config("preference_key must not be empty".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(HnSearchError::Config("request_timeout_secs must be positive".to_string()));
        }
        Ok(())
    }

    /// Resolved data directory.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .as_deref()
            .map_or_else(default_data_dir, expand_tilde)
    }

    #[must_use]
    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir().join(PREFERENCES_FILE)
    }

    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join(LOG_FILE)
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn parse_override<T: std::str::FromStr>(key: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| HnSearchError::Config(format!("invalid value for {key}: {value:?} ({e})")))
}

/// Creates the application state for a session.
///
/// `initial_term` is the persisted search term; it becomes both the pending
/// input and the first committed URL. No fetch is issued until
/// [`Event::Mounted`] is handled.
#[must_use]
pub fn initialize(config: &Config, initial_term: &str) -> AppState {
    tracing::debug!(api_base = %config.api_base, initial_term, "initializing hnsearch");
    AppState::new(QueryController::new(
        config.api_base.clone(),
        initial_term,
        config.escape_query,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn from_file_reads_partial_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "log_level = \"debug\"\nescape_query = true\n").unwrap();

        let config = Config::from_file(&path).unwrap();

        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert!(config.escape_query);
        assert_eq!(config.preference_key, "search");
    }

    #[test]
    fn from_file_rejects_unknown_keys_and_bad_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        std::fs::write(&path, "scan_depth = 4\n").unwrap();
        assert!(matches!(Config::from_file(&path), Err(HnSearchError::Config(_))));

        std::fs::write(&path, "request_timeout_secs = 0\n").unwrap();
        assert!(matches!(Config::from_file(&path), Err(HnSearchError::Config(_))));
    }

    #[test]
    fn from_file_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::from_file(&dir.path().join("absent.toml")),
            Err(HnSearchError::Io(_))
        ));
    }

    #[test]
    fn overrides_replace_only_given_keys() {
        let mut config = Config {
            log_level: Some("debug".to_string()),
            ..Default::default()
        };
        let mut map = BTreeMap::new();
        map.insert("display_width".to_string(), "72".to_string());
        map.insert("data_dir".to_string(), " /tmp/hn ".to_string());

        config.apply_overrides(&map).unwrap();

        assert_eq!(config.display_width, 72);
        assert_eq!(config.data_dir.as_deref(), Some("/tmp/hn"));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn overrides_reject_bad_keys_and_values() {
        let reject = |key: &str, value: &str| {
            let mut map = BTreeMap::new();
            map.insert(key.to_string(), value.to_string());
            matches!(Config::default().apply_overrides(&map), Err(HnSearchError::Config(_)))
        };

        assert!(reject("scan_depth", "4"));
        assert!(reject("request_timeout_secs", "soon"));
        assert!(reject("request_timeout_secs", "0"));
        assert!(reject("escape_query", "yes"));
        assert!(reject("api_base", "  "));
    }

    #[test]
    fn data_paths_use_configured_dir() {
        let config = Config {
            data_dir: Some("/tmp/hn".to_string()),
            ..Default::default()
        };

        assert_eq!(config.preferences_path(), PathBuf::from("/tmp/hn/preferences.json"));
        assert_eq!(config.log_path(), PathBuf::from("/tmp/hn/hnsearch.log"));
    }

    #[test]
    fn initialize_commits_initial_term() {
        let state = initialize(&Config::default(), "react");
        assert_eq!(state.query.committed_url(), format!("{DEFAULT_API_BASE}react"));
        assert_eq!(state.query.pending_text(), "react");
    }
}
