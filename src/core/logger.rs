//! Main logger implementation
//!
//! The engine owns the per-call decision: severity gate against the shared
//! level, notification gate against the generic channel, record construction,
//! format dispatch, and dual-sink routing (warn and below to the output sink,
//! error and above to the error sink).

use super::{
    config::SharedConfig,
    error::{LoggerError, Result},
    events::{Channel, ListenerHandle, ListenerRegistry, LogEvent},
    format::{FormatSpec, LogFormat},
    level::LogLevel,
    record::LogRecord,
    sink::Sink,
    value::LogValue,
};
use crate::sinks::{StderrSink, StdoutSink};
use parking_lot::RwLock;
use std::sync::Arc;

pub struct Logger {
    shared: Arc<SharedConfig>,
    output: Arc<dyn Sink>,
    error_output: Arc<dyn Sink>,
    local_format: RwLock<Option<LogFormat>>,
    prefix: String,
    listeners: ListenerRegistry,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Logger over stdout/stderr with the global shared configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            shared: SharedConfig::global(),
            output: Arc::new(StdoutSink::new()),
            error_output: Arc::new(StderrSink::new()),
            local_format: RwLock::new(None),
            prefix: String::new(),
            listeners: ListenerRegistry::new(),
        }
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// The shared configuration this logger reads from.
    pub fn shared(&self) -> &Arc<SharedConfig> {
        &self.shared
    }

    /// Effective level. Always the shared level; there is no per-instance
    /// override.
    pub fn level(&self) -> Option<LogLevel> {
        self.shared.level()
    }

    /// Always fails: the level is shared across all loggers.
    pub fn set_level(&self, _level: &str) -> Result<()> {
        Err(LoggerError::config(
            "level",
            "the level is shared by all loggers; set it on the shared configuration",
        ))
    }

    /// Effective format: the local override if set, else the shared format.
    /// Re-resolved on every call, so shared changes apply retroactively to
    /// loggers without an override.
    pub fn format(&self) -> LogFormat {
        self.local_format
            .read()
            .clone()
            .unwrap_or_else(|| self.shared.format())
    }

    /// Set or clear the local format override. `None` reverts to the shared
    /// format; a spec that fails to parse leaves the override untouched.
    pub fn set_format(&self, spec: Option<FormatSpec>) -> Result<()> {
        let resolved = match spec {
            Some(spec) => Some(LogFormat::parse(spec)?),
            None => None,
        };
        *self.local_format.write() = resolved;
        Ok(())
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Always fails: the prefix is fixed at construction.
    pub fn set_prefix(&self, _prefix: &str) -> Result<()> {
        Err(LoggerError::config(
            "prefix",
            "the prefix is fixed at construction; create a new logger instead",
        ))
    }

    /// Register a listener on a notification channel.
    pub fn subscribe(
        &self,
        channel: Channel,
        callback: impl Fn(&LogEvent) + Send + Sync + 'static,
    ) -> ListenerHandle {
        self.listeners.subscribe(channel, callback)
    }

    /// Log at a level given by name. Unrecognized names and an unset shared
    /// level are silent no-ops for the write path; the generic notification
    /// channel still fires when it has listeners.
    pub fn log(&self, level: &str, args: &[LogValue]) {
        self.dispatch(level, None, args);
    }

    fn dispatch(&self, level_name: &str, forced: Option<LogFormat>, args: &[LogValue]) {
        let level = LogLevel::lookup(level_name);

        let should_write = match (level, self.shared.level()) {
            (Some(level), Some(min)) => level.rank() >= min.rank(),
            _ => false,
        };
        let should_notify = self.listeners.has_any_listeners();

        // No sink and no listener: skip building the record entirely
        if !should_write && !should_notify {
            return;
        }

        let mut record = LogRecord::build(level_name, args);
        if !self.prefix.is_empty() {
            record.message.insert_str(0, &self.prefix);
        }

        let format = forced.unwrap_or_else(|| self.format());
        let rendered = format.render(&record);

        if should_write {
            if let Some(level) = level {
                let sink = if level >= LogLevel::Error {
                    &self.error_output
                } else {
                    &self.output
                };
                sink.write_line(&rendered);

                self.listeners.emit(
                    Channel::Level(level),
                    &LogEvent {
                        level: level.name().to_string(),
                        rendered: rendered.clone(),
                        record: record.clone(),
                    },
                );
            }
        }

        if should_notify {
            self.listeners.emit(
                Channel::Any,
                &LogEvent {
                    level: level_name.to_string(),
                    rendered,
                    record,
                },
            );
        }
    }

    #[inline]
    pub fn trace(&self, args: &[LogValue]) {
        self.dispatch(LogLevel::Trace.name(), None, args);
    }

    #[inline]
    pub fn debug(&self, args: &[LogValue]) {
        self.dispatch(LogLevel::Debug.name(), None, args);
    }

    #[inline]
    pub fn info(&self, args: &[LogValue]) {
        self.dispatch(LogLevel::Info.name(), None, args);
    }

    #[inline]
    pub fn warn(&self, args: &[LogValue]) {
        self.dispatch(LogLevel::Warn.name(), None, args);
    }

    #[inline]
    pub fn error(&self, args: &[LogValue]) {
        self.dispatch(LogLevel::Error.name(), None, args);
    }

    #[inline]
    pub fn critical(&self, args: &[LogValue]) {
        self.dispatch(LogLevel::Critical.name(), None, args);
    }

    /// Like [`trace`](Self::trace) but always rendered with the `json`
    /// format, for structured-sink compatibility.
    #[inline]
    pub fn trace_json(&self, args: &[LogValue]) {
        self.dispatch(LogLevel::Trace.name(), Some(LogFormat::Json), args);
    }

    #[inline]
    pub fn debug_json(&self, args: &[LogValue]) {
        self.dispatch(LogLevel::Debug.name(), Some(LogFormat::Json), args);
    }

    #[inline]
    pub fn info_json(&self, args: &[LogValue]) {
        self.dispatch(LogLevel::Info.name(), Some(LogFormat::Json), args);
    }

    #[inline]
    pub fn warn_json(&self, args: &[LogValue]) {
        self.dispatch(LogLevel::Warn.name(), Some(LogFormat::Json), args);
    }

    #[inline]
    pub fn error_json(&self, args: &[LogValue]) {
        self.dispatch(LogLevel::Error.name(), Some(LogFormat::Json), args);
    }

    #[inline]
    pub fn critical_json(&self, args: &[LogValue]) {
        self.dispatch(LogLevel::Critical.name(), Some(LogFormat::Json), args);
    }

    /// Flush both sinks.
    pub fn flush(&self) {
        self.output.flush();
        self.error_output.flush();
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a [`Logger`] with a fluent API
///
/// # Example
/// ```
/// use duolog::prelude::*;
/// use std::sync::Arc;
///
/// let shared = Arc::new(SharedConfig::new());
/// shared.set_level("info");
///
/// let logger = Logger::builder()
///     .shared(shared)
///     .format("json")
///     .prefix("worker.")
///     .build()
///     .unwrap();
/// logger.info(&["started".into()]);
/// ```
pub struct LoggerBuilder {
    output: Option<Arc<dyn Sink>>,
    error_output: Option<Arc<dyn Sink>>,
    format: Option<FormatSpec>,
    prefix: String,
    shared: Option<Arc<SharedConfig>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            output: None,
            error_output: None,
            format: None,
            prefix: String::new(),
            shared: None,
        }
    }

    /// Sink for trace/debug/info/warn output. Defaults to stdout.
    #[must_use = "builder methods return a new value"]
    pub fn output<S: Sink + 'static>(self, sink: S) -> Self {
        self.shared_output(Arc::new(sink))
    }

    /// Shared handle variant of [`output`](Self::output).
    #[must_use = "builder methods return a new value"]
    pub fn shared_output(mut self, sink: Arc<dyn Sink>) -> Self {
        self.output = Some(sink);
        self
    }

    /// Sink for error/critical output. Defaults to stderr.
    #[must_use = "builder methods return a new value"]
    pub fn error_output<S: Sink + 'static>(self, sink: S) -> Self {
        self.shared_error_output(Arc::new(sink))
    }

    /// Shared handle variant of [`error_output`](Self::error_output).
    #[must_use = "builder methods return a new value"]
    pub fn shared_error_output(mut self, sink: Arc<dyn Sink>) -> Self {
        self.error_output = Some(sink);
        self
    }

    /// Local format override, by name or custom function.
    #[must_use = "builder methods return a new value"]
    pub fn format(mut self, spec: impl Into<FormatSpec>) -> Self {
        self.format = Some(spec.into());
        self
    }

    /// Message prefix, fixed for the lifetime of the logger.
    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Shared configuration to read the level and default format from.
    /// Defaults to the process-global instance.
    #[must_use = "builder methods return a new value"]
    pub fn shared(mut self, shared: Arc<SharedConfig>) -> Self {
        self.shared = Some(shared);
        self
    }

    /// Build the logger. Fails with [`LoggerError::InvalidFormat`] when the
    /// format spec does not resolve.
    pub fn build(self) -> Result<Logger> {
        let local_format = match self.format {
            Some(spec) => Some(LogFormat::parse(spec)?),
            None => None,
        };

        Ok(Logger {
            shared: self.shared.unwrap_or_else(SharedConfig::global),
            output: self
                .output
                .unwrap_or_else(|| Arc::new(StdoutSink::new())),
            error_output: self
                .error_output
                .unwrap_or_else(|| Arc::new(StderrSink::new())),
            local_format: RwLock::new(local_format),
            prefix: self.prefix,
            listeners: ListenerRegistry::new(),
        })
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;

    fn isolated() -> (Arc<SharedConfig>, Arc<MemorySink>, Arc<MemorySink>, Logger) {
        let shared = Arc::new(SharedConfig::new());
        let out = Arc::new(MemorySink::new());
        let err = Arc::new(MemorySink::new());
        let logger = Logger::builder()
            .shared(Arc::clone(&shared))
            .shared_output(Arc::clone(&out) as Arc<dyn Sink>)
            .shared_error_output(Arc::clone(&err) as Arc<dyn Sink>)
            .build()
            .unwrap();
        (shared, out, err, logger)
    }

    #[test]
    fn test_builder_defaults() {
        let logger = Logger::builder().build().unwrap();
        assert_eq!(logger.prefix(), "");
    }

    #[test]
    fn test_builder_rejects_invalid_format() {
        let err = Logger::builder().format("fancy").build().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidFormat { .. }));
    }

    #[test]
    fn test_unset_level_writes_nothing() {
        let (_shared, out, err, logger) = isolated();
        logger.info(&["message".into()]);
        logger.critical(&["message".into()]);
        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn test_level_is_delegated_and_not_settable() {
        let (shared, _out, _err, logger) = isolated();
        assert_eq!(logger.level(), None);
        shared.set_level("warn");
        assert_eq!(logger.level(), Some(LogLevel::Warn));

        let err = logger.set_level("info").unwrap_err();
        assert!(matches!(err, LoggerError::Configuration { .. }));
        assert_eq!(logger.level(), Some(LogLevel::Warn));
    }

    #[test]
    fn test_prefix_is_not_settable() {
        let logger = Logger::builder().prefix("p.").build().unwrap();
        assert_eq!(logger.prefix(), "p.");
        assert!(matches!(
            logger.set_prefix("q."),
            Err(LoggerError::Configuration { .. })
        ));
        assert_eq!(logger.prefix(), "p.");
    }

    #[test]
    fn test_local_format_override_and_revert() {
        let (shared, out, _err, logger) = isolated();
        shared.set_level("trace");
        shared.set_format("json").unwrap();

        logger.set_format(Some("pretty".into())).unwrap();
        logger.info(&["one".into()]);
        assert!(out.lines()[0].starts_with('['));

        logger.set_format(None).unwrap();
        logger.info(&["two".into()]);
        assert!(out.lines()[1].starts_with('{'));
    }

    #[test]
    fn test_unrecognized_level_is_silent() {
        let (shared, out, err, logger) = isolated();
        shared.set_level("trace");
        logger.log("verbose", &["message".into()]);
        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn test_json_variants_force_json_format() {
        let (shared, out, _err, logger) = isolated();
        shared.set_level("trace");
        // shared format stays pretty
        logger.info_json(&["structured".into()]);
        let line = &out.lines()[0];
        let parsed: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(parsed["level"], "INFO");
        assert_eq!(parsed["message"], "structured");
    }
}
