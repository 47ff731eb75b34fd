// SPDX-License-Identifier: Apache-2.0 OR MIT
// Category-scoped logging
//
// A `Logger` is a borrowed category name plus a set of forwarding methods.
// Everything it does goes through the `log_*` dispatch functions in
// `backend`, which hand the call to whichever `LogBackend` is installed.
// `StreamBackend` is the bundled backend: a hierarchical category filter in
// front of a single output sink.

mod attributes;
mod backend;
mod filter;
mod level;
mod logger;
#[macro_use]
mod macros;
mod record;
mod sink;
mod stream;

// Public exports
pub use attributes::{flags, LogAttributes};
pub use backend::{
    encode_hex, log_dump, log_enabled, log_message, log_printf, log_write, set_backend,
    take_backend, LogBackend,
};
pub use filter::CategoryFilter;
pub use level::{LogLevel, ParseLevelError};
pub use logger::{Logger, DEFAULT_CATEGORY};
pub use record::{Record, RecordBody};
pub use sink::{render, LogSink, OutputFormat, StderrSink, StdoutSink, WriterSink};
pub use stream::StreamBackend;
