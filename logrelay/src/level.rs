//! Log levels and threshold comparison.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity of a log message.
///
/// Variants are declared from most to least severe, so the derived ordering
/// is `Fault < Error < Debug < Info < Default`. A message passes a threshold
/// when its level compares less than or equal to the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    /// Unrecoverable conditions; always passes the threshold
    Fault,
    /// Recoverable errors
    Error,
    /// Debugging information
    Debug,
    /// General information
    Info,
    /// Everything else; passes only when the threshold is `Default`
    #[default]
    Default,
}

impl LogLevel {
    /// All levels, most severe first.
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Fault,
        LogLevel::Error,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Default,
    ];

    /// Returns true if a message at this level passes `threshold`.
    #[inline]
    pub fn passes(self, threshold: LogLevel) -> bool {
        self <= threshold
    }

    /// Returns the lowercase level name used in config files and output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fault => "fault",
            Self::Error => "error",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Default => "default",
        }
    }

    /// Marker prefixed to console output.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Default => "🟢",
            Self::Info => "ℹ️",
            Self::Debug => "🐞",
            Self::Error => "🔴",
            Self::Fault => "🛑",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a log level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level '{0}' (expected one of: fault, error, debug, info, default)")]
pub struct ParseLevelError(pub String);

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fault" => Ok(Self::Fault),
            "error" => Ok(Self::Error),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "default" => Ok(Self::Default),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
