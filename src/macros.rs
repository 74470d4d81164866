// SPDX-License-Identifier: MIT OR Apache-2.0

//! Variadic sugar over [`Logger::log`](crate::Logger::log).
//!
//! [`Logger::log`](crate::Logger::log) takes its arguments as an explicit `Vec<Arg>`.  These
//! macros accept them as a plain list instead and convert each one with `Arg::from`:
//!
//! ```rust
//! use tagwise::{Config, InMemorySink, Logger, PlainColorizer};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(InMemorySink::new());
//! let logger = Logger::with_config(
//!     Config::new()
//!         .with_name_width(4)
//!         .with_colorizer(Arc::new(PlainColorizer))
//!         .with_sink(sink.clone()),
//! );
//!
//! tagwise::info!(logger, "http", "%s answered in %dms", "/health", 12).unwrap();
//! tagwise::warn!(logger, false, "no tag on this one").unwrap();
//!
//! assert_eq!(sink.drain_logs(), "[http] /health answered in 12ms\nno tag on this one");
//! ```
//!
//! The emitter may be anything that converts into an [`Emitter`](crate::Emitter), or the
//! literal `false`, which stands for [`Emitter::Suppressed`](crate::Emitter::Suppressed).
//! Every macro evaluates to the `Result` of the call.

/// Logs at a severity given as an expression.
///
/// ```rust
/// # use tagwise::{Config, InMemorySink, Logger, PlainColorizer, Severity};
/// # use std::sync::Arc;
/// # let sink = Arc::new(InMemorySink::new());
/// # let logger = Logger::with_config(Config::new().with_name_width(2).with_colorizer(Arc::new(PlainColorizer)).with_sink(sink.clone()));
/// let severity = Severity::Error;
/// tagwise::emit!(logger, severity, "db", "lost %d rows", 3).unwrap();
/// assert_eq!(sink.drain_logs(), "[db] lost 3 rows");
/// ```
#[macro_export]
macro_rules! emit {
    ($logger:expr, $severity:expr, false, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.log(
            $severity,
            $crate::Emitter::Suppressed,
            $template,
            ::std::vec![$($crate::Arg::from($arg)),*],
        )
    };
    ($logger:expr, $severity:expr, $emitter:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.log(
            $severity,
            $emitter,
            $template,
            ::std::vec![$($crate::Arg::from($arg)),*],
        )
    };
}

#[macro_export]
macro_rules! trace {
    ($logger:expr, $($rest:tt)+) => {
        $crate::emit!($logger, $crate::Severity::Trace, $($rest)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($rest:tt)+) => {
        $crate::emit!($logger, $crate::Severity::Debug, $($rest)+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($rest:tt)+) => {
        $crate::emit!($logger, $crate::Severity::Info, $($rest)+)
    };
}

/// The `log` severity, not the `log` crate.
#[macro_export]
macro_rules! log {
    ($logger:expr, $($rest:tt)+) => {
        $crate::emit!($logger, $crate::Severity::Log, $($rest)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($rest:tt)+) => {
        $crate::emit!($logger, $crate::Severity::Warn, $($rest)+)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($rest:tt)+) => {
        $crate::emit!($logger, $crate::Severity::Error, $($rest)+)
    };
}

#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($rest:tt)+) => {
        $crate::emit!($logger, $crate::Severity::Fatal, $($rest)+)
    };
}
