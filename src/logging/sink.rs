// SPDX-License-Identifier: Apache-2.0 OR MIT
// Output sinks and record rendering

use super::record::{Record, RecordBody};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// How message records are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `[LEVEL] [category] text (file:line)`
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Output sink for log records
pub trait LogSink: Send {
    /// Write a record to the sink
    fn write_record(&mut self, record: &Record);

    /// Flush any buffered output
    fn flush(&mut self);
}

/// Render a record into `out`
///
/// Raw bodies are written verbatim in text format so that consecutive raw
/// writes can build up a line; in JSON format they become their own object.
pub fn render(record: &Record, format: OutputFormat, out: &mut dyn Write) -> io::Result<()> {
    match (format, &record.body) {
        (OutputFormat::Text, RecordBody::Message { text, attributes }) => {
            write!(out, "[{}] [{}] {}", record.level, record.category, text)?;
            match (attributes.file, attributes.line) {
                (Some(file), Some(line)) => write!(out, " ({}:{})", file, line)?,
                (Some(file), None) => write!(out, " ({})", file)?,
                _ => {}
            }
            if let Some(code) = attributes.code {
                write!(out, " code={}", code)?;
            }
            if let Some(details) = &attributes.details {
                write!(out, " details={}", details)?;
            }
            writeln!(out)
        }
        (OutputFormat::Text, RecordBody::Raw(data)) => out.write_all(data),
        (OutputFormat::Json, RecordBody::Message { text, attributes }) => {
            let mut object = serde_json::json!({
                "timestamp": record.timestamp.to_rfc3339(),
                "level": record.level.as_str(),
                "category": record.category,
                "message": text,
            });
            if !attributes.is_empty() {
                object["attributes"] = serde_json::to_value(attributes)?;
            }
            writeln!(out, "{}", object)
        }
        (OutputFormat::Json, RecordBody::Raw(data)) => {
            let object = serde_json::json!({
                "timestamp": record.timestamp.to_rfc3339(),
                "level": record.level.as_str(),
                "category": record.category,
                "raw": String::from_utf8_lossy(data),
            });
            writeln!(out, "{}", object)
        }
    }
}

/// Sink over any `Write` implementation
pub struct WriterSink<W: Write + Send> {
    writer: W,
    format: OutputFormat,
}

/// Standard output sink
pub type StdoutSink = WriterSink<io::Stdout>;

/// Standard error sink
pub type StderrSink = WriterSink<io::Stderr>;

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<io::Stdout> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(io::stdout(), format)
    }
}

impl WriterSink<io::Stderr> {
    pub fn stderr(format: OutputFormat) -> Self {
        Self::new(io::stderr(), format)
    }
}

impl<W: Write + Send> LogSink for WriterSink<W> {
    fn write_record(&mut self, record: &Record) {
        // Output errors are dropped; there is nowhere left to report them.
        let _ = render(record, self.format, &mut self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
