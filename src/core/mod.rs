//! Core logger types and traits

pub mod config;
pub mod error;
pub mod events;
pub mod format;
pub mod level;
pub mod logger;
pub mod record;
pub mod sink;
pub mod value;

pub use config::{SharedConfig, FORMAT_ENV_VAR, LEVEL_ENV_VAR};
pub use error::{LoggerError, Result};
pub use events::{Channel, ListenerHandle, ListenerRegistry, LogEvent};
pub use format::{FormatFn, FormatSpec, LogFormat};
pub use level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use record::LogRecord;
pub use sink::Sink;
pub use value::{ErrorDetails, LogValue};
