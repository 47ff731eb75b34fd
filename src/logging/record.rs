// SPDX-License-Identifier: Apache-2.0 OR MIT
// Owned log record handed from a backend to its sink

use super::{LogAttributes, LogLevel};
use chrono::{DateTime, Utc};

/// What a record carries
#[derive(Debug, Clone, PartialEq)]
pub enum RecordBody {
    /// A formatted message with its attributes
    Message {
        text: String,
        attributes: LogAttributes,
    },
    /// Bytes written verbatim (raw writes, printf output, hex dumps)
    Raw(Vec<u8>),
}

/// Single log record
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub category: String,
    pub body: RecordBody,
}

impl Record {
    /// Message record; the timestamp comes from the attributes when present
    pub fn message(
        level: LogLevel,
        category: &str,
        attributes: &LogAttributes,
        text: String,
    ) -> Self {
        Self {
            timestamp: attributes.time.unwrap_or_else(Utc::now),
            level,
            category: category.to_string(),
            body: RecordBody::Message {
                text,
                attributes: attributes.clone(),
            },
        }
    }

    pub fn raw(level: LogLevel, category: &str, data: &[u8]) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            category: category.to_string(),
            body: RecordBody::Raw(data.to_vec()),
        }
    }

    /// Message text, or `None` for raw records
    pub fn text(&self) -> Option<&str> {
        match &self.body {
            RecordBody::Message { text, .. } => Some(text),
            RecordBody::Raw(_) => None,
        }
    }
}
