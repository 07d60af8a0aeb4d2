//! Log record construction
//!
//! A [`LogRecord`] is the structured representation of one log event prior to
//! rendering: level name, ISO-8601 timestamp, and a message built from a
//! printf-style template. Records are built fresh per call and never mutated
//! after formatting begins, except for prefix-prepending to `message`.

use super::value::LogValue;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub level: String,
    pub timestamp: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl LogRecord {
    pub fn new(
        level: impl Into<String>,
        timestamp: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level: level.into(),
            timestamp: timestamp.into(),
            message: message.into(),
            stack: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Build a record for `level` from interpolation arguments.
    ///
    /// The first argument is the message template; the rest are interpolated
    /// into it. An empty argument list yields an empty message. The level
    /// name is stored verbatim.
    pub fn build(level: &str, args: &[LogValue]) -> Self {
        Self::new(level, iso_timestamp(), render_message(args))
    }

    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// Current time as ISO-8601 with millisecond precision and a `Z` suffix.
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Render an argument list into a message string.
///
/// When the first argument is a string it is used as a template with `%s`,
/// `%d`/`%i`, `%f`, `%j`, and `%%` verbs; surplus arguments are appended
/// space-separated. Otherwise every argument renders through its display
/// form, space-joined.
pub fn render_message(args: &[LogValue]) -> String {
    let Some((first, rest)) = args.split_first() else {
        return String::new();
    };

    match first {
        LogValue::Str(template) => interpolate(template, rest),
        other => {
            let mut out = other.to_string();
            for arg in rest {
                out.push(' ');
                out.push_str(&arg.to_string());
            }
            out
        }
    }
}

fn interpolate(template: &str, args: &[LogValue]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut remaining = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(verb @ ('s' | 'd' | 'i' | 'f' | 'j')) => {
                // A verb with no argument left stays literal
                match remaining.next() {
                    Some(arg) => {
                        chars.next();
                        out.push_str(&apply_verb(verb, arg));
                    }
                    None => out.push('%'),
                }
            }
            _ => out.push('%'),
        }
    }

    // Surplus arguments are appended space-separated
    for arg in remaining {
        out.push(' ');
        out.push_str(&arg.to_string());
    }

    out
}

fn apply_verb(verb: char, arg: &LogValue) -> String {
    match verb {
        's' => arg.to_string(),
        'd' | 'i' | 'f' => match arg {
            LogValue::Int(i) => i.to_string(),
            LogValue::Float(f) => f.to_string(),
            _ => "NaN".to_string(),
        },
        'j' => arg.to_json_value().to_string(),
        _ => unreachable!("verb filtered by caller"),
    }
}
