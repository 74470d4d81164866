// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::error::SinkError;
use crate::log_record::LogRecord;
use crate::sink::Sink;

/**
A reference sink that writes one line per record to stderr.

On wasm32 the line goes to the browser console method matching the severity instead.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StdErrorSink {}

impl StdErrorSink {
    pub const fn new() -> Self {
        Self {}
    }
}

impl Sink for StdErrorSink {
    fn finish_log_record(&self, record: LogRecord) -> Result<(), SinkError> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::io::Write;
            let mut lock = std::io::stderr().lock();
            for part in &record.parts {
                lock.write_all(part.as_bytes())?;
            }
            lock.write_all(b"\n")?;
        }
        #[cfg(target_arch = "wasm32")]
        {
            use crate::Severity;
            let msg = record.parts.join("");
            match record.severity() {
                Severity::Trace => web_sys::console::trace_1(&msg.into()),
                Severity::Debug => web_sys::console::debug_1(&msg.into()),
                Severity::Info => web_sys::console::info_1(&msg.into()),
                Severity::Log => web_sys::console::log_1(&msg.into()),
                Severity::Warn => web_sys::console::warn_1(&msg.into()),
                Severity::Error | Severity::Fatal => web_sys::console::error_1(&msg.into()),
            }
        }
        Ok(())
    }

    fn prepare_to_die(&self) {
        //nothing to do since we are unbuffered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Severity;

    #[test]
    fn writes_without_error() {
        let mut record = LogRecord::new(Severity::Log);
        record.log("stderr sink smoke test");
        assert!(StdErrorSink::new().finish_log_record(record).is_ok());
    }

    #[test]
    fn supports_everything() {
        let sink = StdErrorSink::new();
        assert!(Severity::ALL.into_iter().all(|s| sink.supports(s)));
    }
}
