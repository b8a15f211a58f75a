//! Log entry structure

use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A single leveled log message, timestamped at creation.
///
/// Entries are immutable once created and exist only transiently: on the
/// caller's stack in synchronous mode, or as a rendered line in the queue
/// in asynchronous mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: String) -> Self {
        Self {
            level,
            message,
            timestamp: Local::now(),
        }
    }

    /// Render this entry as a log line, without the trailing newline.
    ///
    /// Format: `[YYYY-MM-DD HH:MM:SS.mmm] [LEVEL] message`
    pub fn to_line(&self) -> String {
        format!(
            "[{}] [{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
            self.level,
            self.message
        )
    }
}
