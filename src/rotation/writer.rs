//! Rotating file writer
//!
//! Owns the active log file: its bucket key, sequence index, open handle,
//! and accumulated byte count. Every append is followed by a size check;
//! reaching the configured maximum closes the file, advances the sequence,
//! and opens the successor before the call returns, so no managed file
//! exceeds the cap by more than one line. Bucket rollover resets the
//! sequence to zero. Callers serialize all of this through one lock.

use crate::core::config::LoggerConfig;
use crate::core::error::{LoggerError, Result};
use crate::rotation::bucket::Rollover;
use crate::rotation::parse_file_name;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct FileWriter {
    folder: PathBuf,
    rollover: Rollover,
    max_size: u64,
    /// Bucket key recorded when the active file was opened; compared against
    /// the current wall-clock key to detect rollover.
    bucket: String,
    sequence: u64,
    writer: Option<BufWriter<File>>,
    current_size: u64,
}

impl FileWriter {
    /// Create a writer for the configured folder.
    ///
    /// The folder is resolved to an absolute path and created with
    /// intermediate directories; if either step fails the writer keeps the
    /// configured path and operates best-effort from there. The starting
    /// sequence resumes one past the highest index already on disk for the
    /// current bucket, so an existing file is never overwritten.
    pub fn new(config: &LoggerConfig) -> Self {
        let folder = resolve_folder(&config.folder);
        if let Err(e) = fs::create_dir_all(&folder) {
            eprintln!(
                "[LOGGER WARNING] Failed to create log folder '{}': {}. \
                 Continuing best-effort at the configured path.",
                folder.display(),
                e
            );
        }

        let bucket = config.rollover.current_key();
        let sequence = max_sequence(&folder, &bucket).map_or(0, |max| max + 1);

        Self {
            folder,
            rollover: config.rollover,
            max_size: config.max_file_size,
            bucket,
            sequence,
            writer: None,
            current_size: 0,
        }
    }

    /// Append `line` plus a newline to the active file, rotating to the
    /// next sequence first if the previous write filled the file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be opened or written; the line
    /// is lost and the caller decides how to report it.
    pub fn write(&mut self, line: &str) -> Result<()> {
        self.ensure_open()?;

        let path = self.current_path();
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::file_write(path.display().to_string(), "no open handle"))?;

        writer
            .write_all(line.as_bytes())
            .and_then(|_| writer.write_all(b"\n"))
            .map_err(|e| {
                LoggerError::file_write(path.display().to_string(), format!("write failed: {}", e))
            })?;
        self.current_size += line.len() as u64 + 1;

        if self.current_size >= self.max_size {
            self.rotate_sequence()?;
        }

        Ok(())
    }

    /// Flush buffered lines to the OS.
    pub fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush().map_err(|e| {
                LoggerError::file_write(
                    self.current_path().display().to_string(),
                    format!("flush failed: {}", e),
                )
            })?;
        }
        Ok(())
    }

    /// Roll to a new bucket if the wall clock has left the one the active
    /// file was opened in. Returns true when a rollover happened.
    ///
    /// # Errors
    ///
    /// Returns an error if the new bucket's file cannot be opened; the
    /// bucket and sequence state are still advanced so the next write
    /// retries the open.
    pub fn roll_bucket_if_stale(&mut self) -> Result<bool> {
        let current = self.rollover.current_key();
        if current == self.bucket {
            return Ok(false);
        }

        self.close();
        self.bucket = current;
        self.sequence = 0;
        self.current_size = 0;
        self.open()?;
        Ok(true)
    }

    /// Path of the active file: `<folder>/<bucket>_<sequence>.log`.
    pub fn current_path(&self) -> PathBuf {
        self.folder
            .join(format!("{}_{}.log", self.bucket, self.sequence))
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    #[cfg(test)]
    pub(crate) fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Overwrite the stored bucket key so the next staleness check sees a
    /// rollover without waiting for the wall clock.
    #[cfg(test)]
    pub(crate) fn force_bucket(&mut self, bucket: &str) {
        self.bucket = bucket.to_string();
    }

    /// Close the full file, advance the sequence, and open the successor.
    fn rotate_sequence(&mut self) -> Result<()> {
        self.flush()?;
        self.close();
        self.sequence += 1;
        self.current_size = 0;
        self.open()
    }

    fn ensure_open(&mut self) -> Result<()> {
        if self.writer.is_none() {
            self.open()?;
        }
        Ok(())
    }

    /// Open the active file for append. The byte counter resumes from the
    /// on-disk length so the size cap holds across reopens.
    fn open(&mut self) -> Result<()> {
        let path = self.current_path();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::file_write(
                    path.display().to_string(),
                    format!("failed to open: {}", e),
                )
            })?;

        if let Ok(metadata) = file.metadata() {
            self.current_size = metadata.len();
        }
        self.writer = Some(BufWriter::new(file));
        Ok(())
    }

    fn close(&mut self) {
        // Dropping the writer releases the handle; a failed flush here
        // cannot be recovered, the handle is gone either way.
        if let Some(mut writer) = self.writer.take() {
            let _ = writer.flush();
        }
    }
}

impl Drop for FileWriter {
    fn drop(&mut self) {
        self.close();
    }
}

/// Resolve a relative folder against the current working directory.
/// Falls back to the path as configured when the cwd is unavailable.
fn resolve_folder(folder: &Path) -> PathBuf {
    if folder.is_absolute() {
        return folder.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(folder),
        Err(e) => {
            eprintln!(
                "[LOGGER WARNING] Cannot resolve working directory: {}. \
                 Using '{}' as given.",
                e,
                folder.display()
            );
            folder.to_path_buf()
        }
    }
}

/// Highest sequence index already on disk for `bucket`, or None when the
/// folder holds no file for it. Scan failures are reported and treated as
/// an empty bucket.
fn max_sequence(folder: &Path, bucket: &str) -> Option<u64> {
    let entries = match fs::read_dir(folder) {
        Ok(entries) => entries,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                eprintln!(
                    "[LOGGER WARNING] Failed to scan log folder '{}': {}",
                    folder.display(),
                    e
                );
            }
            return None;
        }
    };

    entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let name = entry.file_name();
            let (file_bucket, sequence) = parse_file_name(name.to_str()?)?;
            (file_bucket == bucket).then_some(sequence)
        })
        .max()
}
