// SPDX-License-Identifier: MIT OR Apache-2.0

//! Forwarding finished lines to the [`log`] facade.
//!
//! This lets decorated lines flow into whatever `log` implementation the application already
//! installed (env_logger, a file appender, several at once).  The mapping is lossy in one
//! direction, since `log` has fewer levels:
//!
//! | Severity          | `log::Level` |
//! |-------------------|--------------|
//! | trace             | Trace        |
//! | debug             | Debug        |
//! | info, log         | Info         |
//! | warn              | Warn         |
//! | error, fatal      | Error        |

use crate::Severity;
use crate::error::SinkError;
use crate::log_record::LogRecord;
use crate::sink::Sink;

/// The `log` level a severity is forwarded at.
pub fn log_level(severity: Severity) -> log::Level {
    match severity {
        Severity::Trace => log::Level::Trace,
        Severity::Debug => log::Level::Debug,
        Severity::Info | Severity::Log => log::Level::Info,
        Severity::Warn => log::Level::Warn,
        Severity::Error | Severity::Fatal => log::Level::Error,
    }
}

/// A sink that hands every record to the global `log` logger.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogCrateSink {
    target: String,
}

impl Default for LogCrateSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogCrateSink {
    /// Forwards under the target `tagwise`.
    pub fn new() -> Self {
        Self::with_target(env!("CARGO_PKG_NAME"))
    }

    pub fn with_target(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Sink for LogCrateSink {
    fn finish_log_record(&self, record: LogRecord) -> Result<(), SinkError> {
        log::log!(target: self.target.as_str(), log_level(record.severity()), "{record}");
        Ok(())
    }

    fn prepare_to_die(&self) {
        log::logger().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_mapping() {
        assert_eq!(log_level(Severity::Trace), log::Level::Trace);
        assert_eq!(log_level(Severity::Debug), log::Level::Debug);
        assert_eq!(log_level(Severity::Info), log::Level::Info);
        assert_eq!(log_level(Severity::Log), log::Level::Info);
        assert_eq!(log_level(Severity::Warn), log::Level::Warn);
        assert_eq!(log_level(Severity::Error), log::Level::Error);
        assert_eq!(log_level(Severity::Fatal), log::Level::Error);
    }

    #[test]
    fn default_target_is_the_crate() {
        assert_eq!(LogCrateSink::new().target(), "tagwise");
        assert_eq!(LogCrateSink::with_target("app").target(), "app");
    }
}
