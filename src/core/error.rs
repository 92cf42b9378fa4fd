//! Error types for the logger
//!
//! These errors never cross the public API: every logging method and the
//! retention sweep discard them. The type exists so the internal fallible
//! paths compose with `?`.

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

    /// Failure appending to the log file
    #[error("Append failed for '{path}': {message}")]
    AppendError { path: String, message: String },

    /// Failure during the retention sweep
    #[error("Retention sweep failed in '{directory}': {message}")]
    SweepError { directory: String, message: String },
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

    /// Create an append error
    pub fn append(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::AppendError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a retention sweep error
    pub fn sweep(directory: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::SweepError {
            directory: directory.into(),
            message: message.into(),
        }
    }
}
