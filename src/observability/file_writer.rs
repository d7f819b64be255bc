//! Rotating file writer with size-based rotation and backup retention.
//!
//! Log lines go to one file; once it would grow past the size limit it is
//! shifted to `<name>.1`, older backups move up one number, and anything
//! past the retention limit is dropped.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (1 MiB).
const MAX_FILE_SIZE_BYTES: u64 = 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// Implements [`MakeWriter`] so it can back a `tracing_subscriber::fmt`
/// layer directly. The file is opened lazily on first write.
///
/// # Rotation Strategy
///
/// 1. Before each write, check whether the write would exceed the limit
/// 2. If so, and the file is not empty:
///    - `<name>.2` → `<name>.3`, `<name>.1` → `<name>.2`
///    - `<name>` → `<name>.1`
///    - reopen `<name>` empty
pub struct FileWriter {
    /// Path to the primary log file.
    file_path: PathBuf,
    max_size: u64,
    writer: Mutex<Option<File>>,
}

impl FileWriter {
    /// Creates a writer rotating at 1 MiB.
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_max_size(file_path, MAX_FILE_SIZE_BYTES)
    }

    /// Creates a writer rotating once the file would exceed `max_size` bytes.
    pub const fn with_max_size(file_path: PathBuf, max_size: u64) -> Self {
        Self {
            file_path,
            max_size,
            writer: Mutex::new(None),
        }
    }

    /// Appends `buf` to the log file, rotating first if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if rotation, opening, or writing fails, or if the
    /// internal mutex is poisoned.
    pub fn append(&self, buf: &[u8]) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut writer, buf.len() as u64)?;

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        file.write_all(buf)?;
        file.flush()?;
        drop(writer);

        Ok(())
    }

    fn check_and_rotate(&self, writer: &mut Option<File>, incoming: u64) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            let size = metadata.len();
            if size > 0 && size + incoming > self.max_size {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    /// Shifts every backup up by one and moves the live file to `.1`.
    fn rotate_files(&self) -> io::Result<()> {
        let oldest = self.backup_path(MAX_BACKUP_FILES);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }

        for n in (1..MAX_BACKUP_FILES).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }

        if self.file_path.exists() {
            fs::rename(&self.file_path, self.backup_path(1))?;
        }

        Ok(())
    }

    /// `<file_path>.<n>`
    fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = OsString::from(self.file_path.as_os_str());
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }
}

impl Write for &FileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = &'a Self;

    fn make_writer(&'a self) -> Self::Writer {
        self
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_size", &self.max_size)
            .finish_non_exhaustive()
    }
}
