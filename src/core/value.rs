//! Interpolation argument values for log calls
//!
//! A `LogValue` is one argument to a log call: the message template, a value
//! interpolated into it, or a captured error. Errors render with their stack
//! text and any extra properties they carry, so a logged error never loses
//! its context.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value type for log call arguments
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LogValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
    Json(serde_json::Value),
    Error(ErrorDetails),
}

/// A captured error: name, message, stack trace text, and any extra
/// properties attached to it (subclassed error variants included).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub name: String,
    pub message: String,
    pub stack: String,
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub properties: serde_json::Map<String, serde_json::Value>,
}

impl ErrorDetails {
    /// Create error details with a synthesized single-line stack.
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        let name = name.into();
        let message = message.into();
        let stack = format!("{}: {}", name, message);
        Self {
            name,
            message,
            stack,
            properties: serde_json::Map::new(),
        }
    }

    /// Capture a standard error, synthesizing a stack from its source chain.
    pub fn from_std(err: &(dyn std::error::Error + 'static)) -> Self {
        let message = err.to_string();
        let mut stack = format!("Error: {}", message);
        let mut source = err.source();
        while let Some(cause) = source {
            stack.push_str("\n    caused by: ");
            stack.push_str(&cause.to_string());
            source = cause.source();
        }
        Self {
            name: "Error".to_string(),
            message,
            stack,
            properties: serde_json::Map::new(),
        }
    }

    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = stack.into();
        self
    }

    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }
}

impl fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.stack)?;
        if !self.properties.is_empty() {
            let props = serde_json::Value::Object(self.properties.clone());
            write!(f, " {}", props)?;
        }
        Ok(())
    }
}

impl fmt::Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogValue::Str(s) => write!(f, "{}", s),
            LogValue::Int(i) => write!(f, "{}", i),
            LogValue::Float(fl) => write!(f, "{}", fl),
            LogValue::Bool(b) => write!(f, "{}", b),
            LogValue::Null => write!(f, "null"),
            LogValue::Json(v) => write!(f, "{}", v),
            LogValue::Error(e) => write!(f, "{}", e),
        }
    }
}

impl LogValue {
    /// Convert to a serde_json::Value for `%j` interpolation and JSON output
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            LogValue::Str(s) => serde_json::Value::String(s.clone()),
            LogValue::Int(i) => serde_json::Value::Number((*i).into()),
            LogValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            LogValue::Bool(b) => serde_json::Value::Bool(*b),
            LogValue::Null => serde_json::Value::Null,
            LogValue::Json(v) => v.clone(),
            LogValue::Error(e) => serde_json::to_value(e).unwrap_or(serde_json::Value::Null),
        }
    }
}

impl From<String> for LogValue {
    fn from(s: String) -> Self {
        LogValue::Str(s)
    }
}

impl From<&str> for LogValue {
    fn from(s: &str) -> Self {
        LogValue::Str(s.to_string())
    }
}

impl From<i64> for LogValue {
    fn from(i: i64) -> Self {
        LogValue::Int(i)
    }
}

impl From<i32> for LogValue {
    fn from(i: i32) -> Self {
        LogValue::Int(i as i64)
    }
}

impl From<u32> for LogValue {
    fn from(i: u32) -> Self {
        LogValue::Int(i as i64)
    }
}

impl From<f64> for LogValue {
    fn from(f: f64) -> Self {
        LogValue::Float(f)
    }
}

impl From<bool> for LogValue {
    fn from(b: bool) -> Self {
        LogValue::Bool(b)
    }
}

impl From<serde_json::Value> for LogValue {
    fn from(v: serde_json::Value) -> Self {
        LogValue::Json(v)
    }
}

impl From<ErrorDetails> for LogValue {
    fn from(e: ErrorDetails) -> Self {
        LogValue::Error(e)
    }
}
