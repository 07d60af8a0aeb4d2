//! Shared logger configuration
//!
//! The minimum severity and default format are process-wide settings shared
//! by every logger instance. They live in an explicit [`SharedConfig`] object
//! injected at construction rather than ambient global state, so tests can
//! run against an isolated configuration and reset it between cases.

use super::error::Result;
use super::format::{FormatSpec, LogFormat};
use super::level::LogLevel;
use parking_lot::RwLock;
use std::sync::{Arc, OnceLock};

/// Environment variable feeding the shared level at bootstrap.
pub const LEVEL_ENV_VAR: &str = "DUOLOG_LEVEL";
/// Environment variable feeding the shared format at bootstrap.
pub const FORMAT_ENV_VAR: &str = "DUOLOG_FORMAT";

#[derive(Default)]
struct SharedState {
    level: Option<LogLevel>,
    format: Option<LogFormat>,
}

/// Process-wide logger settings: minimum severity and default format.
///
/// The level defaults to unset, which disables all writing until a level is
/// explicitly configured. The format defaults to `pretty`. Last write wins
/// and is visible to every logger holding this config.
#[derive(Default)]
pub struct SharedConfig {
    state: RwLock<SharedState>,
}

impl SharedConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-global instance, used by loggers built without an
    /// explicit config.
    pub fn global() -> Arc<SharedConfig> {
        static GLOBAL: OnceLock<Arc<SharedConfig>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(SharedConfig::new())))
    }

    /// Parse free-form text and store the resulting level.
    pub fn set_level(&self, text: &str) {
        self.state.write().level = Some(LogLevel::parse(text));
    }

    /// The shared minimum level, or `None` if never set.
    pub fn level(&self) -> Option<LogLevel> {
        self.state.read().level
    }

    /// Parse and store the shared format.
    pub fn set_format(&self, spec: impl Into<FormatSpec>) -> Result<()> {
        let format = LogFormat::parse(spec.into())?;
        self.state.write().format = Some(format);
        Ok(())
    }

    /// The shared format, defaulting to `pretty` if never set.
    pub fn format(&self) -> LogFormat {
        self.state.read().format.clone().unwrap_or_default()
    }

    /// Clear both settings. Teardown hook for test harnesses.
    pub fn reset(&self) {
        let mut state = self.state.write();
        state.level = None;
        state.format = None;
    }

    /// Apply bootstrap settings from the environment, once at process start.
    ///
    /// An unrecognized format name is ignored rather than fatal; logging
    /// configuration must never abort startup.
    pub fn apply_env(&self) {
        if let Ok(text) = std::env::var(LEVEL_ENV_VAR) {
            self.set_level(&text);
        }
        if let Ok(name) = std::env::var(FORMAT_ENV_VAR) {
            let _ = self.set_format(name);
        }
    }
}
