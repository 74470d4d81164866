// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Sink
//!
//! A sink that keeps every record in memory instead of writing it anywhere, which makes it
//! the sink of choice for tests:
//!
//! - asserting on exactly what a logger produced
//! - checking which severities reached the sink
//! - simulating a sink that only supports some severities ([InMemorySink::supporting])

use crate::Severity;
use crate::error::SinkError;
use crate::log_record::LogRecord;
use crate::sink::Sink;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A sink that stores records in a `Vec`.
///
/// # Example
///
/// ```rust
/// use tagwise::{Config, InMemorySink, Logger, PlainColorizer, Severity};
/// use std::sync::Arc;
///
/// let sink = Arc::new(InMemorySink::new());
/// let logger = Logger::with_config(
///     Config::new()
///         .with_name_width(8)
///         .with_colorizer(Arc::new(PlainColorizer))
///         .with_sink(sink.clone()),
/// );
///
/// logger.log(Severity::Info, "db", "ready", vec![]).unwrap();
/// assert_eq!(sink.drain_logs(), "[db      ] ready");
///
/// // Buffer is now empty
/// assert_eq!(sink.drain_logs(), "");
/// ```
#[derive(Debug)]
pub struct InMemorySink {
    records: Mutex<Vec<LogRecord>>,
    supported: Option<Vec<Severity>>,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug: derived, required by Sink
// - Default: empty buffer, every severity supported
// - Clone: NOT implemented; two sinks sharing nothing would surprise whoever cloned
//   one expecting to see the other's records.  Share through Arc.
// - PartialEq/Eq/Hash: NOT implemented, mutex state comparison is problematic

impl Default for InMemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySink {
    /// An empty sink that supports every severity.
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            supported: None,
        }
    }

    /// An empty sink that only supports the given severities.
    pub fn supporting(severities: &[Severity]) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            supported: Some(severities.to_vec()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogRecord>> {
        // records are plain data, a panic elsewhere can't leave them half-written
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Drains all lines into a single string, joined by newlines, clearing the buffer.
    pub fn drain_logs(&self) -> String {
        let mut records = self.lock();
        let result = records
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        records.clear();
        result
    }

    /// Drains the records themselves, clearing the buffer.
    pub fn drain_records(&self) -> Vec<LogRecord> {
        std::mem::take(&mut *self.lock())
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Sink for InMemorySink {
    fn supports(&self, severity: Severity) -> bool {
        self.supported
            .as_ref()
            .is_none_or(|supported| supported.contains(&severity))
    }

    fn finish_log_record(&self, record: LogRecord) -> Result<(), SinkError> {
        self.lock().push(record);
        Ok(())
    }
}
