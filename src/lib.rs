//! # Rolling Logger
//!
//! An embeddable logging engine that persists leveled messages to rotating,
//! size- and time-bounded files, with optional asynchronous queueing and
//! automatic retention cleanup.
//!
//! ## Features
//!
//! - **Rotating files**: one file per time bucket (day or hour), split by a
//!   size cap into `<bucket>_<sequence>.log` pieces; sequence numbering
//!   resumes across restarts
//! - **Async mode**: callers enqueue, a background worker performs file IO
//! - **Retention**: expired files are deleted by a maintenance worker
//! - **Never throws**: a logging call never aborts the host application
//!
//! ## Example
//!
//! ```no_run
//! use rolling_logger::prelude::*;
//!
//! let logger = Logger::new(
//!     LoggerConfig::new("logs")
//!         .with_min_level(LogLevel::Debug)
//!         .with_rollover(Rollover::Daily)
//!         .with_async_mode(true),
//! )
//! .expect("logger workers failed to start");
//!
//! logger.info("application started");
//! rolling_logger::warn!(logger, "retry attempt {} of {}", 3, 5);
//! ```

pub mod core;
pub mod macros;
pub mod rotation;

pub mod prelude {
    pub use crate::core::{
        render, LogEntry, LogLevel, LogQueue, Logger, LoggerConfig, LoggerError, LoggerMetrics,
        Result, BACKPRESSURE_THRESHOLD, DEFAULT_SHUTDOWN_TIMEOUT,
    };
    pub use crate::rotation::{remove_expired, FileWriter, Rollover};
}

pub use crate::core::{
    render, LogEntry, LogLevel, LogQueue, Logger, LoggerConfig, LoggerError, LoggerMetrics,
    Result, BACKPRESSURE_THRESHOLD, DEFAULT_SHUTDOWN_TIMEOUT,
};
pub use crate::rotation::{remove_expired, FileWriter, Rollover};
