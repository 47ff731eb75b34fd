// SPDX-License-Identifier: Apache-2.0 OR MIT
// Backend seam and process-wide dispatch entry points

use super::{LogAttributes, LogLevel};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// Receiver of everything a [`Logger`](super::Logger) forwards
///
/// Implementations own filtering, routing and output. `message` and `write`
/// are required; `dump` and `printf` have defaults that reduce to `write`.
pub trait LogBackend: Send + Sync {
    /// A complete log message with its attributes
    fn message(
        &self,
        level: LogLevel,
        category: &str,
        attributes: &LogAttributes,
        args: fmt::Arguments<'_>,
    );

    /// Raw bytes, written without any message framing
    fn write(&self, level: LogLevel, category: &str, data: &[u8]);

    /// Hex-encoded bytes
    fn dump(&self, level: LogLevel, category: &str, data: &[u8], _flags: u32) {
        self.write(level, category, encode_hex(data).as_bytes());
    }

    /// Formatted text, written without message framing
    fn printf(&self, level: LogLevel, category: &str, args: fmt::Arguments<'_>) {
        match args.as_str() {
            Some(text) => self.write(level, category, text.as_bytes()),
            None => self.write(level, category, fmt::format(args).as_bytes()),
        }
    }

    /// Whether `level` would be emitted for `category`
    fn enabled(&self, level: LogLevel, category: &str) -> bool;
}

static BACKEND: RwLock<Option<Arc<dyn LogBackend>>> = RwLock::new(None);

/// Install the process-wide backend, returning the one it replaces
pub fn set_backend(backend: Arc<dyn LogBackend>) -> Option<Arc<dyn LogBackend>> {
    BACKEND
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .replace(backend)
}

/// Remove the process-wide backend; subsequent calls become no-ops
pub fn take_backend() -> Option<Arc<dyn LogBackend>> {
    BACKEND.write().unwrap_or_else(PoisonError::into_inner).take()
}

// The lock is released before calling into the backend so a backend may
// itself log or swap the installed backend.
#[inline]
fn current() -> Option<Arc<dyn LogBackend>> {
    BACKEND
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .map(Arc::clone)
}

pub fn log_message(
    level: LogLevel,
    category: &str,
    attributes: &LogAttributes,
    args: fmt::Arguments<'_>,
) {
    if level == LogLevel::None {
        return;
    }
    if let Some(backend) = current() {
        backend.message(level, category, attributes, args);
    }
}

pub fn log_write(level: LogLevel, category: &str, data: &[u8]) {
    if level == LogLevel::None {
        return;
    }
    if let Some(backend) = current() {
        backend.write(level, category, data);
    }
}

pub fn log_dump(level: LogLevel, category: &str, data: &[u8], flags: u32) {
    if level == LogLevel::None {
        return;
    }
    if let Some(backend) = current() {
        backend.dump(level, category, data, flags);
    }
}

pub fn log_printf(level: LogLevel, category: &str, args: fmt::Arguments<'_>) {
    if level == LogLevel::None {
        return;
    }
    if let Some(backend) = current() {
        backend.printf(level, category, args);
    }
}

/// Returns `false` when no backend is installed
pub fn log_enabled(level: LogLevel, category: &str) -> bool {
    if level == LogLevel::None {
        return false;
    }
    current().is_some_and(|backend| backend.enabled(level, category))
}

/// Lower-case hex, two digits per byte, no separators
pub fn encode_hex(data: &[u8]) -> String {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";

    let mut out = String::with_capacity(data.len() * 2);
    for &byte in data {
        out.push(DIGITS[(byte >> 4) as usize] as char);
        out.push(DIGITS[(byte & 0x0f) as usize] as char);
    }
    out
}
