//! Core logger types

pub mod config;
pub mod error;
pub mod format;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod queue;

pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use format::render;
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{Logger, DEFAULT_SHUTDOWN_TIMEOUT};
pub use metrics::LoggerMetrics;
pub use queue::{LogQueue, BACKPRESSURE_THRESHOLD};
