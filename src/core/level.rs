//! Log level definitions and free-text level parsing

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity level with a fixed total order.
///
/// `Off` is a sentinel that ranks above every real level; a shared level of
/// `Off` disables all output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Critical,
    Off,
}

impl LogLevel {
    /// All levels in rank order.
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Critical,
        LogLevel::Off,
    ];

    /// Integer rank. `Off` maps to the maximum sentinel value.
    pub const fn rank(self) -> u8 {
        match self {
            LogLevel::Trace => 0,
            LogLevel::Debug => 1,
            LogLevel::Info => 2,
            LogLevel::Warn => 3,
            LogLevel::Error => 4,
            LogLevel::Critical => 5,
            LogLevel::Off => u8::MAX,
        }
    }

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Critical => "critical",
            LogLevel::Off => "off",
        }
    }

    /// Exact lookup of a canonical name. Unknown names return `None`; callers
    /// treat that as a silent no-op, not an error.
    pub fn lookup(name: &str) -> Option<LogLevel> {
        LogLevel::ALL.iter().copied().find(|l| l.name() == name)
    }

    /// Parse free-form text into the most permissive level it mentions.
    ///
    /// Scans for whole-word, case-insensitive occurrences of any level name
    /// and returns the lowest-ranked match. Text that mentions no level at
    /// all parses to `Off`. Never fails.
    ///
    /// ```
    /// use duolog::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("bad warn,critical----"), LogLevel::Warn);
    /// assert_eq!(LogLevel::parse("off, trace, debug"), LogLevel::Trace);
    /// assert_eq!(LogLevel::parse("nothing here"), LogLevel::Off);
    /// ```
    pub fn parse(text: &str) -> LogLevel {
        text.split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|token| !token.is_empty())
            .filter_map(|token| {
                LogLevel::ALL
                    .iter()
                    .copied()
                    .find(|l| token.eq_ignore_ascii_case(l.name()))
            })
            .min()
            .unwrap_or(LogLevel::Off)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for LogLevel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LogLevel::parse(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_order_strictly_increasing() {
        for pair in LogLevel::ALL.windows(2) {
            assert!(pair[0].rank() < pair[1].rank(), "{} < {}", pair[0], pair[1]);
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_off_ranks_above_all() {
        for level in LogLevel::ALL {
            assert!(LogLevel::Off.rank() >= level.rank());
        }
    }

    #[test]
    fn test_lookup_canonical_names() {
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::lookup(level.name()), Some(level));
        }
        assert_eq!(LogLevel::lookup("verbose"), None);
        assert_eq!(LogLevel::lookup("INFO"), None);
    }

    #[test]
    fn test_parse_exact_names() {
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::parse(level.name()), level);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(LogLevel::parse("WARN"), LogLevel::Warn);
        assert_eq!(LogLevel::parse("Critical"), LogLevel::Critical);
    }

    #[test]
    fn test_parse_returns_lowest_match() {
        assert_eq!(LogLevel::parse("off, trace, debug"), LogLevel::Trace);
        assert_eq!(
            LogLevel::parse("critical,info,debug,number,random"),
            LogLevel::Debug
        );
        assert_eq!(
            LogLevel::parse("%^&,.p-fail,-&debug.critical,raom"),
            LogLevel::Debug
        );
    }

    #[test]
    fn test_parse_requires_whole_words() {
        // "warning" contains "warn" but not as a whole word
        assert_eq!(LogLevel::parse("warning"), LogLevel::Off);
        assert_eq!(LogLevel::parse("debugger"), LogLevel::Off);
        assert_eq!(LogLevel::parse("bad warn,critical----"), LogLevel::Warn);
    }

    #[test]
    fn test_parse_defaults_to_off() {
        assert_eq!(LogLevel::parse(""), LogLevel::Off);
        assert_eq!(LogLevel::parse("nothing to see"), LogLevel::Off);
    }
}
