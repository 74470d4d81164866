// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types.
//!
//! Logging is fire-and-forget in the sense that there are no retries, but it is not silent:
//! a translator or sink that fails hands its error back to whoever called
//! [Logger::log](crate::Logger::log).  The only conditions that are *not* errors are the
//! ones a caller cannot be expected to prevent: a severity name nobody recognizes
//! (see [Logger::log_named](crate::Logger::log_named)) and a sink that does not support
//! a severity.

use thiserror::Error;

/// A severity name that is not one of the known severities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity `{0}`")]
pub struct UnknownSeverity(pub String);

/// Failure to resolve a template into display text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// A positional placeholder had no argument left to consume.
    #[error("no argument for positional placeholder #{position}")]
    MissingArgument { position: usize },
    /// A named placeholder matched none of the named fields.
    #[error("no value for named placeholder `{{{key}}}`")]
    UnknownKey { key: String },
}

/// Failure to write a finished line.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("sink write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("sink rejected the line: {0}")]
    Rejected(String),
}

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid name width `{value}`; expected a non-negative integer or `off`")]
    InvalidWidth { value: String },
}

/// Any error a log call can return.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Translate(#[from] TranslateError),
    #[error(transparent)]
    Sink(#[from] SinkError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_culprit() {
        let missing = TranslateError::MissingArgument { position: 2 };
        assert_eq!(missing.to_string(), "no argument for positional placeholder #2");
        let unknown = TranslateError::UnknownKey {
            key: "user".to_string(),
        };
        assert_eq!(unknown.to_string(), "no value for named placeholder `{user}`");
        let width = ConfigError::InvalidWidth {
            value: "-3".to_string(),
        };
        assert!(width.to_string().contains("`-3`"));
    }

    #[test]
    fn wrapped_errors_stay_transparent() {
        let err: Error = TranslateError::UnknownKey {
            key: "k".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "no value for named placeholder `{k}`");
        assert!(matches!(err, Error::Translate(_)));

        let err: Error = SinkError::Rejected("full".to_string()).into();
        assert_eq!(err.to_string(), "sink rejected the line: full");
    }
}
