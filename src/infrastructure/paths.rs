//! Path utilities for locating hnsearch's data directory.
//!
//! The data directory holds the preference file and the rotating log file. It
//! defaults to the platform data directory (`~/.local/share/hnsearch` on Linux)
//! and can be overridden through configuration.

use std::path::PathBuf;

/// Directory name used under the platform data directory.
const APP_DIR_NAME: &str = "hnsearch";

/// File name of the JSON preference store inside the data directory.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// File name of the rotating log file inside the data directory.
pub const LOG_FILE: &str = "hnsearch.log";

/// Returns the default data directory for hnsearch.
///
/// Falls back to a relative `.hnsearch` directory when the platform exposes no
/// data directory (for example a stripped-down container without `$HOME`).
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".hnsearch"), |dir| dir.join(APP_DIR_NAME))
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, or a tilde when no home directory is known,
/// are returned unchanged.
///
/// # Examples
///
/// ```
/// use hnsearch::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let Some(home) = dirs::home_dir() else {
        return PathBuf::from(path);
    };

    if path == "~" {
        home
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}
