//! Logging macros for ergonomic log calls.
//!
//! These macros build the interpolation argument list for a log call, so
//! mixed value types can be passed without manual conversion.
//!
//! # Examples
//!
//! ```
//! use duolog::prelude::*;
//! use duolog::{info, warn};
//!
//! let logger = Logger::new();
//!
//! info!(logger, "Server started");
//! let port = 8080;
//! info!(logger, "Server listening on port %d", port);
//! warn!(logger, "Disk usage at %d%%", 93);
//! ```

/// Build a `&[LogValue]` argument list from mixed expressions.
///
/// ```
/// # use duolog::values;
/// let args = values!["count=%d", 7];
/// assert_eq!(args.len(), 2);
/// ```
#[macro_export]
macro_rules! values {
    ($($arg:expr),* $(,)?) => {
        &[$($crate::LogValue::from($arg)),*][..]
    };
}

/// Log at a level given by name.
///
/// ```
/// # use duolog::prelude::*;
/// # let logger = Logger::new();
/// use duolog::log;
/// log!(logger, "info", "Simple message");
/// log!(logger, "error", "Error code: %d", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:expr),+ $(,)?) => {
        $logger.log($level, $crate::values!($($arg),+))
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.trace($crate::values!($($arg),+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.debug($crate::values!($($arg),+))
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.info($crate::values!($($arg),+))
    };
}

/// Log a warn-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.warn($crate::values!($($arg),+))
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.error($crate::values!($($arg),+))
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.critical($crate::values!($($arg),+))
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Logger, SharedConfig, Sink};
    use crate::sinks::MemorySink;
    use std::sync::Arc;

    fn capture() -> (Arc<MemorySink>, Logger) {
        let shared = Arc::new(SharedConfig::new());
        shared.set_level("trace");
        let out = Arc::new(MemorySink::new());
        let logger = Logger::builder()
            .shared(shared)
            .shared_output(Arc::clone(&out) as Arc<dyn Sink>)
            .error_output(MemorySink::new())
            .build()
            .unwrap();
        (out, logger)
    }

    #[test]
    fn test_values_macro_mixes_types() {
        let args = values!["msg %s %d", "text", 42, true];
        assert_eq!(args.len(), 4);
    }

    #[test]
    fn test_log_macro() {
        let (out, logger) = capture();
        log!(logger, "info", "Formatted: %d", 42);
        assert!(out.lines()[0].ends_with("INFO: Formatted: 42"));
    }

    #[test]
    fn test_level_macros() {
        let (out, logger) = capture();
        trace!(logger, "Trace message");
        debug!(logger, "Count: %d", 5);
        info!(logger, "Items: %d", 100);
        warn!(logger, "Retry %d of %d", 1, 3);
        assert_eq!(out.lines().len(), 4);
        assert!(out.lines()[3].ends_with("WARN: Retry 1 of 3"));
    }

    #[test]
    fn test_error_macros_route_to_error_sink() {
        let shared = Arc::new(SharedConfig::new());
        shared.set_level("trace");
        let err = Arc::new(MemorySink::new());
        let logger = Logger::builder()
            .shared(shared)
            .output(MemorySink::new())
            .shared_error_output(Arc::clone(&err) as Arc<dyn Sink>)
            .build()
            .unwrap();

        error!(logger, "Code: %d", 500);
        critical!(logger, "Failure: %s", "disk full");
        assert_eq!(err.lines().len(), 2);
    }
}
