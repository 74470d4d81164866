// SPDX-License-Identifier: MIT OR Apache-2.0

//! The finished line handed to a sink.
//!
//! A [`LogRecord`] carries the severity and the text of one line.  The text is stored as a
//! list of parts that are only joined on output, so a sink that writes to a stream can write
//! the parts one after another instead of allocating the whole line first.
//!
//! Records are built by [`Logger::log`](crate::Logger::log), handed to
//! [`Sink::finish_log_record`](crate::Sink::finish_log_record) by value, and never
//! retained by the logger.
//!
//! # Example
//!
//! ```rust
//! use tagwise::{LogRecord, Severity};
//!
//! let mut record = LogRecord::new(Severity::Warn);
//! record.log("disk at ");
//! record.log_owned(format!("{}%", 93));
//! assert_eq!(record.to_string(), "disk at 93%");
//! assert_eq!(record.severity(), Severity::Warn);
//! ```

use crate::Severity;
use std::fmt::Display;

/**
One finished log line.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogRecord {
    pub(crate) parts: Vec<String>,
    severity: Severity,
}

impl LogRecord {
    pub fn new(severity: Severity) -> Self {
        Self {
            parts: Vec::new(),
            severity,
        }
    }

    /**
    Append the message to the record.

    This is called in the case that a message is not already owned.
    */
    pub fn log(&mut self, message: &str) {
        self.parts.push(message.to_string());
    }

    /**
    Append the message to the record, taking ownership of the message.
    */
    pub fn log_owned(&mut self, message: String) {
        self.parts.push(message);
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The parts in the order they were appended.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }
}

impl Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for part in &self.parts {
            f.write_str(part)?;
        }
        Ok(())
    }
}
/*
Boilerplate notes for LogRecord:

IMPLEMENTED:
- Debug, Clone, PartialEq/Eq, Hash: derived
- Display: the joined parts, which is the line a sink writes

NOT IMPLEMENTED:
- Default: a record without a severity makes no sense
- Copy: owns heap data
- Ord/PartialOrd: no meaningful ordering
*/
