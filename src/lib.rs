//! # Duolog
//!
//! A small leveled logging library: callers emit named-level messages with
//! printf-style interpolation, a globally shared minimum severity gates them,
//! a pluggable formatter renders them, and the rendered line is routed to one
//! of two sinks by severity (warn and below to the output sink, error and
//! above to the error sink).
//!
//! ## Features
//!
//! - **Shared severity and format**: one process-wide level and default
//!   format, visible to every logger instance
//! - **Pluggable formats**: built-in `json` and `pretty`, or a custom
//!   rendering function
//! - **Event channels**: subscribe to per-level or generic log notifications
//! - **Dual-sink routing**: console, file, async, and in-memory sinks

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Channel, ErrorDetails, FormatFn, FormatSpec, ListenerHandle, ListenerRegistry, LogEvent,
        LogFormat, LogLevel, LogRecord, LogValue, Logger, LoggerBuilder, LoggerError, Result,
        SharedConfig, Sink,
    };
    pub use crate::sinks::{AsyncSink, FileSink, MemorySink, StderrSink, StdoutSink};
}

pub use crate::core::{
    Channel, ErrorDetails, FormatFn, FormatSpec, ListenerHandle, ListenerRegistry, LogEvent,
    LogFormat, LogLevel, LogRecord, LogValue, Logger, LoggerBuilder, LoggerError, Result,
    SharedConfig, Sink, FORMAT_ENV_VAR, LEVEL_ENV_VAR,
};
pub use crate::sinks::{AsyncSink, FileSink, MemorySink, StderrSink, StdoutSink};
