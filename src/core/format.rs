//! Output formats for log records
//!
//! A format is a pure mapping from a [`LogRecord`] to a string. The two
//! built-ins are `json` (compact JSON object, level uppercased) and `pretty`
//! (`[<timestamp>] <LEVEL>: <message>` plus stack and extra-field lines).
//! Callers may supply a custom rendering function; the format is resolved
//! once at configuration time, not per call.

use super::error::{LoggerError, Result};
use super::record::LogRecord;
use std::fmt;
use std::sync::Arc;

/// A custom rendering function: deterministic record-to-string.
pub type FormatFn = Arc<dyn Fn(&LogRecord) -> String + Send + Sync>;

/// Resolved output format.
#[derive(Clone)]
pub enum LogFormat {
    Json,
    Pretty,
    Custom(FormatFn),
}

/// Unresolved format configuration: a registered name or a custom function.
#[derive(Clone)]
pub enum FormatSpec {
    Name(String),
    Custom(FormatFn),
}

impl LogFormat {
    /// Resolve a format spec. Registered names resolve to the built-in
    /// variants, custom functions pass through unchanged, and anything else
    /// fails with [`LoggerError::InvalidFormat`].
    pub fn parse(spec: FormatSpec) -> Result<LogFormat> {
        match spec {
            FormatSpec::Name(name) => match name.as_str() {
                "json" => Ok(LogFormat::Json),
                "pretty" => Ok(LogFormat::Pretty),
                _ => Err(LoggerError::invalid_format(name)),
            },
            FormatSpec::Custom(f) => Ok(LogFormat::Custom(f)),
        }
    }

    /// Render a record to its final string form.
    pub fn render(&self, record: &LogRecord) -> String {
        match self {
            LogFormat::Json => render_json(record),
            LogFormat::Pretty => render_pretty(record),
            LogFormat::Custom(f) => f(record),
        }
    }
}

/// Compact JSON rendering with the level uppercased in the output.
///
/// The input record is not mutated. Absent optional fields are omitted
/// entirely rather than flattened to null.
fn render_json(record: &LogRecord) -> String {
    let mut value = serde_json::to_value(record).unwrap_or_default();
    if let Some(level) = value.get_mut("level") {
        if let serde_json::Value::String(s) = level {
            *s = s.to_uppercase();
        }
    }
    value.to_string()
}

/// Human-readable rendering: header line, optional stack block, then one
/// `key: <json-value>` line per extra field in insertion order.
fn render_pretty(record: &LogRecord) -> String {
    let mut out = format!(
        "[{}] {}: {}",
        record.timestamp,
        record.level.to_uppercase(),
        record.message
    );

    if let Some(ref stack) = record.stack {
        out.push('\n');
        out.push_str(stack);
    }

    for (key, value) in &record.extra {
        out.push('\n');
        out.push_str(key);
        out.push_str(": ");
        out.push_str(&value.to_string());
    }

    out
}

impl fmt::Debug for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Json => write!(f, "Json"),
            LogFormat::Pretty => write!(f, "Pretty"),
            LogFormat::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

impl Default for LogFormat {
    fn default() -> Self {
        LogFormat::Pretty
    }
}

impl From<&str> for FormatSpec {
    fn from(name: &str) -> Self {
        FormatSpec::Name(name.to_string())
    }
}

impl From<String> for FormatSpec {
    fn from(name: String) -> Self {
        FormatSpec::Name(name)
    }
}

impl From<FormatFn> for FormatSpec {
    fn from(f: FormatFn) -> Self {
        FormatSpec::Custom(f)
    }
}

impl fmt::Debug for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatSpec::Name(n) => write!(f, "Name({:?})", n),
            FormatSpec::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}
