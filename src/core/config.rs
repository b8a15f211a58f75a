//! Logger configuration

use crate::rotation::bucket::Rollover;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for a [`Logger`](crate::core::logger::Logger) instance.
///
/// All fields are fixed at construction; the minimum level is the only
/// setting that can be changed afterward, via
/// [`Logger::set_min_level`](crate::core::logger::Logger::set_min_level).
///
/// # Examples
///
/// ```
/// use rolling_logger::core::config::LoggerConfig;
/// use rolling_logger::core::log_level::LogLevel;
/// use rolling_logger::rotation::bucket::Rollover;
///
/// let config = LoggerConfig::new("logs")
///     .with_min_level(LogLevel::Debug)
///     .with_rollover(Rollover::Daily)
///     .with_async_mode(true);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Folder receiving the log files. A relative path is resolved against
    /// the current working directory at construction.
    pub folder: PathBuf,
    /// Minimum level a message must have to be written.
    pub min_level: crate::core::log_level::LogLevel,
    /// Time granularity partitioning log files (daily or hourly buckets).
    pub rollover: Rollover,
    /// When true, callers enqueue and a background worker performs file IO.
    pub async_mode: bool,
    /// Maximum interval between queue drains in async mode.
    pub flush_cycle: Duration,
    /// Age in whole days beyond which a log file is deleted.
    pub retention_days: u32,
    /// Byte count at which the active file rotates to the next sequence.
    pub max_file_size: u64,
}

impl LoggerConfig {
    /// Create a configuration for the given folder with default settings.
    #[must_use]
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
            ..Self::default()
        }
    }

    /// Set the minimum log level
    #[must_use]
    pub fn with_min_level(mut self, level: crate::core::log_level::LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set the bucket granularity
    #[must_use]
    pub fn with_rollover(mut self, rollover: Rollover) -> Self {
        self.rollover = rollover;
        self
    }

    /// Enable or disable asynchronous mode
    #[must_use]
    pub fn with_async_mode(mut self, enabled: bool) -> Self {
        self.async_mode = enabled;
        self
    }

    /// Set the flush cycle for async mode
    #[must_use]
    pub fn with_flush_cycle(mut self, cycle: Duration) -> Self {
        self.flush_cycle = cycle;
        self
    }

    /// Set the retention window in days
    #[must_use]
    pub fn with_retention_days(mut self, days: u32) -> Self {
        self.retention_days = days;
        self
    }

    /// Set the maximum size of a single log file in bytes
    #[must_use]
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            folder: PathBuf::from("logs"),
            min_level: crate::core::log_level::LogLevel::Info,
            rollover: Rollover::Hourly,
            async_mode: false,
            flush_cycle: Duration::from_secs(10),
            retention_days: 30,
            max_file_size: 50 * 1024 * 1024,
        }
    }
}
