// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Category-scoped logging handle with a pluggable backend.
//!
//! [`logging::Logger`] binds a category name to the `log_*` dispatch
//! functions; [`logging::StreamBackend`] is a ready-made backend, and
//! [`config::LoggingConfig`] builds one from a JSON5 file.

pub mod config;
pub mod logging;

pub use config::{ConfigError, LoggingConfig};
pub use logging::{LogLevel, Logger};
