//SPDX-License-Identifier: MIT OR Apache-2.0
use crate::Severity;
use crate::error::SinkError;
use crate::log_record::LogRecord;
use std::fmt::Debug;

pub trait Sink: Debug + Send + Sync {
    /**
    Whether this sink writes lines of the given severity at all.

    Lines at unsupported severities are dropped by the logger before any formatting happens.
    */
    fn supports(&self, severity: Severity) -> bool {
        let _ = severity;
        true
    }

    /**
        Submits the record for writing.
    */
    fn finish_log_record(&self, record: LogRecord) -> Result<(), SinkError>;

    /**
    The application may imminently exit.  Ensure all buffers are flushed and up to date.
    */
    fn prepare_to_die(&self) {}
}

/*
Boilerplate notes.

# Sink

Clone on a Sink doesn't make sense; share them through Arc instead.
PartialEq/Eq, it's unclear if we'd mean data equality or provenance, so no.
Default is not sensible since who knows how the sink is constructed.
Send/Sync is required: a Logger holding a sink is shared across threads.
*/
