//! Tracing initialization and subscriber setup.

use super::file_writer::RotatingLogFile;
use crate::infrastructure::LOG_FILE;
use crate::Config;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive when neither `RUST_LOG` nor the config sets one.
const DEFAULT_LEVEL: &str = "info";

/// Initializes the tracing subscriber with a rotating file sink.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` environment variable, if set and valid
/// 2. `config.log_level`
/// 3. `"info"`
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently does nothing if the directory cannot be created (logging is optional)
/// - Idempotent: only the first call installs a subscriber
///
/// # Example
///
/// ```rust
/// use hnsearch::observability::init_tracing;
/// use hnsearch::Config;
///
/// let dir = tempfile::tempdir().unwrap();
/// let config = Config {
///     data_dir: Some(dir.path().to_string_lossy().into_owned()),
///     log_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .log_level
        .clone()
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let data_dir = config.data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let log_file = Arc::new(RotatingLogFile::new(data_dir.join(LOG_FILE)));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
