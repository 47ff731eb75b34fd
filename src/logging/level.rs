// SPDX-License-Identifier: Apache-2.0 OR MIT
// Logging levels (higher value is more severe)

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Logging level
///
/// Values are spaced so that a backend can compare them numerically. `None`
/// is only meaningful as a filter threshold: nothing is ever logged at it.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum LogLevel {
    /// Very verbose tracing of internal state
    Trace = 1,
    /// Diagnostics useful while developing
    Debug = 10,
    /// Normal operation
    Info = 30,
    /// Something unexpected that the caller recovered from
    Warn = 40,
    /// An operation failed
    Error = 50,
    /// Unrecoverable condition
    Panic = 60,
    /// Disables logging when used as a threshold
    None = 70,
}

impl LogLevel {
    /// Lowest level; a threshold of `ALL` lets every message through.
    pub const ALL: LogLevel = LogLevel::Trace;

    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Level name as static string
    pub const fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Panic => "PANIC",
            LogLevel::None => "NONE",
        }
    }

    /// Create from the numeric level (returns None for unassigned values)
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(LogLevel::Trace),
            10 => Some(LogLevel::Debug),
            30 => Some(LogLevel::Info),
            40 => Some(LogLevel::Warn),
            50 => Some(LogLevel::Error),
            60 => Some(LogLevel::Panic),
            70 => Some(LogLevel::None),
            _ => None,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error returned when a level name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level '{0}'")]
pub struct ParseLevelError(pub String);

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" | "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "panic" => Ok(LogLevel::Panic),
            "none" => Ok(LogLevel::None),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

// Configuration files accept the same names as the command line.
impl TryFrom<String> for LogLevel {
    type Error = ParseLevelError;

    fn try_from(s: String) -> Result<Self, <LogLevel as TryFrom<String>>::Error> {
        s.parse()
    }
}
