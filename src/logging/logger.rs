// SPDX-License-Identifier: Apache-2.0 OR MIT
// Category-scoped logging handle

use super::backend::{log_dump, log_enabled, log_message, log_printf, log_write};
use super::{LogAttributes, LogLevel};
use std::fmt;

/// Category name used by [`Logger::default`]
pub const DEFAULT_CATEGORY: &str = "app";

/// Logging handle bound to one category
///
/// The handle only borrows its category name and forwards every call to the
/// installed [`LogBackend`](super::LogBackend) through the `log_*` dispatch
/// functions. It holds no other state, so creating one per module or per
/// call site costs nothing.
///
/// Formatted calls take [`fmt::Arguments`]; the `log_*!` macros build those
/// and add the source location.
///
/// ```
/// use catlog::logging::{LogLevel, Logger};
///
/// let log = Logger::new("app.net");
/// log.info(format_args!("listening on port {}", 8080));
/// if log.is_trace_enabled() {
///     log.dump_at(LogLevel::Trace, &[0xde, 0xad]);
/// }
/// ```
#[derive(Debug)]
pub struct Logger<'a> {
    name: &'a str,
}

impl<'a> Logger<'a> {
    /// Level used by the methods that do not take one
    pub const DEFAULT_LEVEL: LogLevel = LogLevel::Info;

    pub const fn new(name: &'a str) -> Self {
        Self { name }
    }

    /// Category name of this logger
    #[inline]
    pub fn name(&self) -> &'a str {
        self.name
    }

    #[inline]
    pub fn trace(&self, args: fmt::Arguments<'_>) {
        self.message(LogLevel::Trace, args);
    }

    #[inline]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.message(LogLevel::Debug, args);
    }

    #[inline]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.message(LogLevel::Info, args);
    }

    #[inline]
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.message(LogLevel::Warn, args);
    }

    #[inline]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.message(LogLevel::Error, args);
    }

    /// Log a message at [`Self::DEFAULT_LEVEL`]
    #[inline]
    pub fn log(&self, args: fmt::Arguments<'_>) {
        self.message(Self::DEFAULT_LEVEL, args);
    }

    #[inline]
    pub fn log_at(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.message(level, args);
    }

    /// Log a message carrying explicit attributes
    #[inline]
    pub fn log_with(&self, level: LogLevel, attributes: &LogAttributes, args: fmt::Arguments<'_>) {
        log_message(level, self.name, attributes, args);
    }

    /// Write formatted text at [`Self::DEFAULT_LEVEL`] without message framing
    #[inline]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.printf_at(Self::DEFAULT_LEVEL, args);
    }

    #[inline]
    pub fn printf_at(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        log_printf(level, self.name, args);
    }

    /// Write a string at [`Self::DEFAULT_LEVEL`]
    #[inline]
    pub fn print(&self, text: &str) {
        self.print_at(Self::DEFAULT_LEVEL, text);
    }

    #[inline]
    pub fn print_at(&self, level: LogLevel, text: &str) {
        self.write_at(level, text.as_bytes());
    }

    /// Write a buffer at [`Self::DEFAULT_LEVEL`]
    #[inline]
    pub fn write(&self, data: &[u8]) {
        self.write_at(Self::DEFAULT_LEVEL, data);
    }

    #[inline]
    pub fn write_at(&self, level: LogLevel, data: &[u8]) {
        log_write(level, self.name, data);
    }

    /// Hex-encode a buffer and write it at [`Self::DEFAULT_LEVEL`]
    #[inline]
    pub fn dump(&self, data: &[u8]) {
        self.dump_at(Self::DEFAULT_LEVEL, data);
    }

    #[inline]
    pub fn dump_at(&self, level: LogLevel, data: &[u8]) {
        log_dump(level, self.name, data, 0);
    }

    #[inline]
    pub fn is_trace_enabled(&self) -> bool {
        self.is_level_enabled(LogLevel::Trace)
    }

    #[inline]
    pub fn is_debug_enabled(&self) -> bool {
        self.is_level_enabled(LogLevel::Debug)
    }

    #[inline]
    pub fn is_info_enabled(&self) -> bool {
        self.is_level_enabled(LogLevel::Info)
    }

    #[inline]
    pub fn is_warn_enabled(&self) -> bool {
        self.is_level_enabled(LogLevel::Warn)
    }

    #[inline]
    pub fn is_error_enabled(&self) -> bool {
        self.is_level_enabled(LogLevel::Error)
    }

    #[inline]
    pub fn is_level_enabled(&self, level: LogLevel) -> bool {
        log_enabled(level, self.name)
    }

    // All leveled calls end up here, with no attributes set.
    #[inline]
    fn message(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        log_message(level, self.name, &LogAttributes::new(), args);
    }
}

impl Default for Logger<'static> {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORY)
    }
}
