//! Rotating log file with size-based rotation and backup retention.
//!
//! The terminal owns stdout, so log output goes to a file in the data
//! directory instead. When the file grows past the size limit it is renamed with
//! a timestamp suffix and a fresh file is started; only the newest few backups
//! are kept.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating log file.
///
/// `&RotatingLogFile` implements [`Write`], so an `Arc<RotatingLogFile>` can be
/// handed straight to `tracing_subscriber::fmt::layer().with_writer(..)`.
///
/// # Rotation Strategy
///
/// 1. Check file size before each write
/// 2. If size exceeds the limit, rotate:
///    - Rename current file to `<name>.<unix_timestamp>`
///    - Open a new empty file lazily on the next write
///    - Remove the oldest backups beyond the retention limit
pub struct RotatingLogFile {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    /// Lazily-opened file handle.
    file: Mutex<Option<File>>,
}

impl RotatingLogFile {
    /// Creates a writer for `file_path` with the default limits.
    ///
    /// The file is not opened until the first write.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    #[must_use]
    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            file: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn write_locked(&self, buf: &[u8]) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut file)?;

        if file.is_none() {
            let opened = OpenOptions::new().create(true).append(true).open(&self.file_path)?;
            *file = Some(opened);
        }

        let handle = file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;
        handle.write_all(buf)?;
        handle.flush()
    }

    fn check_and_rotate(&self, file: &mut Option<File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_bytes {
                *file = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    fn rotate_files(&self) -> io::Result<()> {
        let timestamp = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
        let backup_path = self.backup_path(timestamp);

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()
    }

    fn backup_path(&self, timestamp: i64) -> PathBuf {
        let mut name = self.file_path.as_os_str().to_owned();
        name.push(format!(".{timestamp}"));
        PathBuf::from(name)
    }

    /// Removes backups beyond the retention limit, newest kept first.
    ///
    /// Individual deletion errors are ignored so cleanup continues.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent_dir = self
            .file_path
            .parent()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No parent directory"))?;

        let prefix = self
            .file_path
            .file_name()
            .and_then(|s| s.to_str())
            .map(|name| format!("{name}."))
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Invalid file name"))?;

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();

        // Timestamp suffixes have equal width for the foreseeable future, so
        // reverse lexical order is newest first.
        backups.sort_by(|a, b| b.cmp(a));

        for old_backup in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl Write for &RotatingLogFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_locked(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl std::fmt::Debug for RotatingLogFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingLogFile")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backups_in(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().starts_with("app.log."))
            .count()
    }

    #[test]
    fn appends_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let log = RotatingLogFile::new(dir.path().join("app.log"));

        (&log).write_all(b"first\n").unwrap();
        (&log).write_all(b"second\n").unwrap();

        assert_eq!(fs::read_to_string(log.path()).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn rotates_when_over_limit_and_keeps_bounded_backups() {
        let dir = tempfile::tempdir().unwrap();
        let log = RotatingLogFile::with_limits(dir.path().join("app.log"), 8, 2);

        for _ in 0..6 {
            (&log).write_all(b"0123456789\n").unwrap();
        }

        assert!(backups_in(dir.path()) <= 2);
        assert!(backups_in(dir.path()) >= 1);
        assert_eq!(fs::read_to_string(log.path()).unwrap(), "0123456789\n");
    }
}
