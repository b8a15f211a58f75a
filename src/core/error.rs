//! Error types for the logging engine

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failure writing to the active log file
    #[error("File write error for '{path}': {message}")]
    FileWriteError { path: String, message: String },

    /// Failure rotating to a new log file
    #[error("File rotation failed for '{path}': {message}")]
    RotationError { path: String, message: String },

    /// Failure enumerating the log folder
    #[error("Directory scan failed for '{path}': {message}")]
    DirectoryScanError { path: String, message: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// A background worker thread could not be started
    #[error("Failed to spawn {worker} thread: {message}")]
    WorkerSpawnError { worker: String, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a file write error
    pub fn file_write(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileWriteError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a rotation error
    pub fn rotation(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::RotationError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a directory scan error
    pub fn directory_scan(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::DirectoryScanError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a worker spawn error
    pub fn worker_spawn(worker: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::WorkerSpawnError {
            worker: worker.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
