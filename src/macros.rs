//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`.
//!
//! # Examples
//!
//! ```no_run
//! use datelog::prelude::*;
//! use datelog::info;
//!
//! let logger = FileLogger::new("/var/log/myapp", "App_yyyyMMdd", 0, true, LogLevel::All);
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log an info-level message.
///
/// # Examples
///
/// ```no_run
/// # use datelog::prelude::*;
/// # let logger = FileLogger::new("/tmp", "App_yyyyMMdd", 0, true, LogLevel::All);
/// use datelog::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(format!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```no_run
/// # use datelog::prelude::*;
/// # let logger = FileLogger::new("/tmp", "App_yyyyMMdd", 0, true, LogLevel::All);
/// use datelog::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(format!($($arg)+))
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```no_run
/// # use datelog::prelude::*;
/// # let logger = FileLogger::new("/tmp", "App_yyyyMMdd", 0, true, LogLevel::All);
/// use datelog::warn;
/// warn!(logger, "Low disk space");
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(format!($($arg)+))
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```no_run
/// # use datelog::prelude::*;
/// # let logger = FileLogger::new("/tmp", "App_yyyyMMdd", 0, true, LogLevel::All);
/// use datelog::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(format!($($arg)+))
    };
}

/// Log a fatal-level message.
///
/// # Examples
///
/// ```no_run
/// # use datelog::prelude::*;
/// # let logger = FileLogger::new("/tmp", "App_yyyyMMdd", 0, true, LogLevel::All);
/// use datelog::fatal;
/// fatal!(logger, "Critical system failure");
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(format!($($arg)+))
    };
}
