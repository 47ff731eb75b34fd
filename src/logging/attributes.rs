// SPDX-License-Identifier: Apache-2.0 OR MIT
// Optional attributes attached to a log message

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Bit set describing which attributes are present
pub mod flags {
    pub const FILE: u32 = 0x01;
    pub const LINE: u32 = 0x02;
    pub const FUNCTION: u32 = 0x04;
    pub const TIME: u32 = 0x08;
    pub const CODE: u32 = 0x10;
    pub const DETAILS: u32 = 0x20;
}

/// Message attributes passed alongside the formatted text
///
/// Every field is optional. The empty set is what `Logger` passes for plain
/// leveled calls; the logging macros fill in the source location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl LogAttributes {
    /// Empty attribute set (no flags)
    pub const fn new() -> Self {
        Self {
            file: None,
            line: None,
            function: None,
            time: None,
            code: None,
            details: None,
        }
    }

    /// Source location, as captured by the logging macros
    pub const fn here(file: &'static str, line: u32, function: &'static str) -> Self {
        Self {
            file: Some(file),
            line: Some(line),
            function: Some(function),
            time: None,
            code: None,
            details: None,
        }
    }

    pub fn with_file(mut self, file: &'static str) -> Self {
        self.file = Some(file);
        self
    }

    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_function(mut self, function: &'static str) -> Self {
        self.function = Some(function);
        self
    }

    pub fn with_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_code(mut self, code: i32) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Which attributes are set, as a combination of [`flags`] bits
    pub fn flags(&self) -> u32 {
        let mut bits = 0;
        if self.file.is_some() {
            bits |= flags::FILE;
        }
        if self.line.is_some() {
            bits |= flags::LINE;
        }
        if self.function.is_some() {
            bits |= flags::FUNCTION;
        }
        if self.time.is_some() {
            bits |= flags::TIME;
        }
        if self.code.is_some() {
            bits |= flags::CODE;
        }
        if self.details.is_some() {
            bits |= flags::DETAILS;
        }
        bits
    }

    pub fn is_empty(&self) -> bool {
        self.flags() == 0
    }
}
