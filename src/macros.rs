//! Logging macros with positional template substitution.
//!
//! These macros are the variadic entry points of the logger: a template
//! with `{}` tokens plus any number of displayable arguments, rendered by
//! [`render`](crate::core::format::render) before dispatch.
//!
//! # Examples
//!
//! ```no_run
//! use rolling_logger::prelude::*;
//! use rolling_logger::{info, error};
//!
//! let logger = Logger::new(LoggerConfig::new("logs")).unwrap();
//!
//! info!(logger, "server listening on port {}", 8080);
//! error!(logger, "error code {} from {}", -13936, "peer");
//! ```

/// Log a templated message at an explicit level.
///
/// # Examples
///
/// ```no_run
/// # use rolling_logger::prelude::*;
/// # let logger = Logger::new(LoggerConfig::new("logs")).unwrap();
/// use rolling_logger::log;
/// log!(logger, LogLevel::Info, "simple message");
/// log!(logger, LogLevel::Error, "error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $template:expr) => {
        $logger.log($level, $template)
    };
    ($logger:expr, $level:expr, $template:expr, $($arg:expr),+ $(,)?) => {
        $logger.log(
            $level,
            $crate::core::format::render($template, &[$(&$arg as &dyn ::std::fmt::Display),+]),
        )
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}
