// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::error::UnknownSeverity;
use std::fmt::Display;
use std::str::FromStr;

/// The severity of a log line.
///
/// The set is fixed.  Sinks may choose to support only some of them, in which case
/// lines at the other severities are dropped silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Step-by-step detail, usually off
    Trace,
    /// Detail for whoever is debugging the emitter
    Debug,
    /// Normal operation
    Info,
    /// Plain output that is neither informational nor a problem
    Log,
    /// Suspicious condition
    Warn,
    /// Runtime error
    Error,
    /// The process is unlikely to continue
    Fatal,
}

impl Severity {
    /// Every severity, least severe first.
    pub const ALL: [Severity; 7] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Log,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
    ];

    /// The lowercase name, as accepted by [FromStr].
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Trace => "trace",
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Log => "log",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSeverity(s.to_string()))
    }
}

/*
Boilerplate notes.

Copy: it's a fieldless enum.
Ord: ordered by how bad things are, which is occasionally useful for filtering.
Default: there is no obvious default severity, so none is provided.
Display: the lowercase name, matching FromStr.
*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_name() {
        for severity in Severity::ALL {
            assert_eq!(severity.as_str().parse::<Severity>(), Ok(severity));
        }
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!("WARN".parse::<Severity>(), Ok(Severity::Warn));
        assert_eq!("Fatal".parse::<Severity>(), Ok(Severity::Fatal));
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "verbose".parse::<Severity>().unwrap_err();
        assert_eq!(err, UnknownSeverity("verbose".to_string()));
    }

    #[test]
    fn ordered_by_badness() {
        assert!(Severity::Trace < Severity::Info);
        assert!(Severity::Error < Severity::Fatal);
    }
}
