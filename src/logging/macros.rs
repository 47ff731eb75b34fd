// SPDX-License-Identifier: Apache-2.0 OR MIT
// Logging macros that capture the call site

/// Log a formatted message at an explicit level
///
/// The source file, line and module path are attached as attributes. The
/// message is only formatted when the level is enabled for the logger's
/// category.
///
/// # Examples
/// ```
/// use catlog::log_at;
/// use catlog::logging::{LogLevel, Logger};
///
/// let log = Logger::new("app.net");
/// log_at!(log, LogLevel::Warn, "retrying in {}ms", 250);
/// ```
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        let level: $crate::logging::LogLevel = $level;
        if logger.is_level_enabled(level) {
            logger.log_with(
                level,
                &$crate::logging::LogAttributes::here(file!(), line!(), module_path!()),
                format_args!($($arg)+),
            );
        }
    }};
}

/// Log a message with trace level
///
/// # Examples
/// ```ignore
/// log_trace!(logger, "state={:?}", state);
/// ```
#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::logging::LogLevel::Trace, $($arg)+)
    };
}

/// Log a message with debug level
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::logging::LogLevel::Debug, $($arg)+)
    };
}

/// Log a message with info level
///
/// # Examples
/// ```ignore
/// log_info!(logger, "listening on {}", addr);
/// ```
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::logging::LogLevel::Info, $($arg)+)
    };
}

/// Log a message with warning level
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::logging::LogLevel::Warn, $($arg)+)
    };
}

/// Log a message with error level
///
/// # Examples
/// ```ignore
/// log_error!(logger, "failed to open {}: {}", path.display(), err);
/// ```
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::logging::LogLevel::Error, $($arg)+)
    };
}
