// SPDX-License-Identifier: Apache-2.0 OR MIT
// Filtering backend that writes to a single sink

use super::record::Record;
use super::{CategoryFilter, LogAttributes, LogBackend, LogLevel, LogSink};
use std::fmt;
use std::sync::{Mutex, PoisonError};

/// Backend combining a [`CategoryFilter`] with one [`LogSink`]
///
/// Calls below the category threshold return before anything is formatted.
/// Records are written and flushed under the sink lock, so lines from
/// concurrent loggers never interleave.
pub struct StreamBackend {
    filter: CategoryFilter,
    sink: Mutex<Box<dyn LogSink>>,
}

impl StreamBackend {
    pub fn new(filter: CategoryFilter, sink: Box<dyn LogSink>) -> Self {
        Self {
            filter,
            sink: Mutex::new(sink),
        }
    }

    /// Filter used by this backend (thresholds can be changed at runtime)
    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    fn emit(&self, record: &Record) {
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        sink.write_record(record);
        sink.flush();
    }
}

impl LogBackend for StreamBackend {
    fn message(
        &self,
        level: LogLevel,
        category: &str,
        attributes: &LogAttributes,
        args: fmt::Arguments<'_>,
    ) {
        if !self.filter.enabled(level, category) {
            return;
        }
        let text = match args.as_str() {
            Some(text) => text.to_string(),
            None => fmt::format(args),
        };
        self.emit(&Record::message(level, category, attributes, text));
    }

    fn write(&self, level: LogLevel, category: &str, data: &[u8]) {
        if !self.filter.enabled(level, category) {
            return;
        }
        self.emit(&Record::raw(level, category, data));
    }

    fn enabled(&self, level: LogLevel, category: &str) -> bool {
        self.filter.enabled(level, category)
    }
}

impl fmt::Debug for StreamBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamBackend")
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{OutputFormat, WriterSink};
    use std::io::Write;
    use std::sync::Arc;

    // Writer whose contents stay readable after the sink is boxed
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn backend(filter: CategoryFilter) -> (StreamBackend, SharedBuf) {
        let buf = SharedBuf::default();
        let sink = WriterSink::new(buf.clone(), OutputFormat::Text);
        (StreamBackend::new(filter, Box::new(sink)), buf)
    }

    #[test]
    fn test_messages_are_filtered() {
        let (backend, buf) = backend(CategoryFilter::new(LogLevel::Info));

        backend.message(LogLevel::Debug, "app", &LogAttributes::new(), format_args!("hidden"));
        backend.message(LogLevel::Info, "app", &LogAttributes::new(), format_args!("n={}", 1));

        assert_eq!(buf.contents(), "[INFO] [app] n=1\n");
    }

    #[test]
    fn test_raw_writes_are_filtered() {
        let (backend, buf) = backend(CategoryFilter::with_categories(
            LogLevel::Error,
            [("app.io", LogLevel::Trace)],
        ));

        backend.write(LogLevel::Trace, "app.io", b"abc");
        backend.write(LogLevel::Trace, "app", b"dropped");
        backend.dump(LogLevel::Trace, "app.io", &[0x10, 0x20], 0);
        backend.printf(LogLevel::Info, "app.io", format_args!("|{}|", 7));

        assert_eq!(buf.contents(), "abc1020|7|");
    }

    #[test]
    fn test_enabled_follows_filter() {
        let (backend, _) = backend(CategoryFilter::new(LogLevel::Warn));
        assert!(backend.enabled(LogLevel::Warn, "x"));
        assert!(!backend.enabled(LogLevel::Info, "x"));

        backend.filter().set_category_level("x", LogLevel::Trace);
        assert!(backend.enabled(LogLevel::Trace, "x.y"));
    }
}
