//! Rotating log file with size-based rotation and backup retention.
//!
//! [`RollingFile`] implements [`std::io::Write`], so wrapped in a `Mutex` it
//! is a `MakeWriter` for `tracing-subscriber`. The file is opened lazily and
//! rotated before a write once it exceeds [`MAX_FILE_SIZE_BYTES`].

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Maximum file size before rotation (10 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
pub const MAX_BACKUP_FILES: usize = 3;

/// Log file that rotates to `<name>.<timestamp>` when it grows too large.
///
/// ```
/// use std::io::Write;
/// use dexview::observability::RollingFile;
///
/// let dir = std::env::temp_dir().join("dexview-doc-rolling");
/// std::fs::create_dir_all(&dir)?;
/// let mut log = RollingFile::new(dir.join("dexview.log"));
/// writeln!(log, "started")?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct RollingFile {
    path: PathBuf,
    max_bytes: u64,
    file: Option<File>,
}

impl RollingFile {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limit(path, MAX_FILE_SIZE_BYTES)
    }

    /// Creates a writer that rotates past `max_bytes` instead of the default.
    #[must_use]
    pub const fn with_limit(path: PathBuf, max_bytes: u64) -> Self {
        Self {
            path,
            max_bytes,
            file: None,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn check_and_rotate(&mut self) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.path) {
            if metadata.len() > self.max_bytes {
                self.file = None;
                self.rotate()?;
            }
        }
        Ok(())
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = chrono::Utc::now().format("%Y%m%d%H%M%S%3f");
        let mut backup = self.path.clone().into_os_string();
        backup.push(format!(".{stamp}"));

        if self.path.exists() {
            fs::rename(&self.path, &backup)?;
        }
        self.cleanup_old_backups()
    }

    /// Removes backups beyond [`MAX_BACKUP_FILES`], oldest first.
    ///
    /// Individual deletion errors are ignored.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let Some(parent) = self.path.parent() else {
            return Ok(());
        };
        let Some(name) = self.path.file_name().and_then(|s| s.to_str()) else {
            return Ok(());
        };
        let prefix = format!("{name}.");

        let mut backups: Vec<PathBuf> = fs::read_dir(parent)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&prefix))
            })
            .collect();

        // Timestamps sort lexically; newest first.
        backups.sort_by(|a, b| b.cmp(a));

        for old in backups.iter().skip(MAX_BACKUP_FILES) {
            let _ = fs::remove_file(old);
        }
        Ok(())
    }

    fn file(&mut self) -> io::Result<&mut File> {
        self.check_and_rotate()?;
        if self.file.is_none() {
            let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
            self.file = Some(file);
        }
        self.file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "log file unavailable"))
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for RollingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RollingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backups(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_name().to_string_lossy().starts_with("dexview.log."))
            .count()
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dexview.log");
        let mut log = RollingFile::new(path.clone());
        writeln!(log, "one").unwrap();
        writeln!(log, "two").unwrap();
        log.flush().unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn rotates_when_over_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dexview.log");
        let mut log = RollingFile::with_limit(path.clone(), 8);
        writeln!(log, "0123456789").unwrap();
        writeln!(log, "after").unwrap();
        log.flush().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "after\n");
        assert_eq!(backups(dir.path()), 1);
    }

    #[test]
    fn keeps_a_bounded_number_of_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dexview.log");
        for i in 0..(MAX_BACKUP_FILES + 2) {
            fs::write(dir.path().join(format!("dexview.log.2024010100000{i}000")), "old").unwrap();
        }
        let mut log = RollingFile::with_limit(path.clone(), 1);
        fs::write(&path, "full").unwrap();
        writeln!(log, "fresh").unwrap();
        assert_eq!(backups(dir.path()), MAX_BACKUP_FILES);
    }
}
