//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Format spec was neither a registered name nor a custom function
    #[error("invalid format '{value}': must be a registered format name or a custom function")]
    InvalidFormat { value: String },

    /// Invalid configuration with details
    #[error("configuration error for {component}: {message}")]
    Configuration { component: String, message: String },
}

impl LoggerError {
    /// Create an invalid format error
    pub fn invalid_format(value: impl Into<String>) -> Self {
        LoggerError::InvalidFormat {
            value: value.into(),
        }
    }

    /// Create a configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Configuration {
            component: component.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::invalid_format("true");
        assert!(matches!(err, LoggerError::InvalidFormat { .. }));

        let err = LoggerError::config("level", "use the shared level");
        assert!(matches!(err, LoggerError::Configuration { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::invalid_format("json-pretty");
        assert_eq!(
            err.to_string(),
            "invalid format 'json-pretty': must be a registered format name or a custom function"
        );

        let err = LoggerError::config("prefix", "the prefix is fixed at construction");
        assert_eq!(
            err.to_string(),
            "configuration error for prefix: the prefix is fixed at construction"
        );
    }
}
