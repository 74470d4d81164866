// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end checks of the decorated line, with the styling stripped off.

use std::sync::Arc;
use tagwise::{Arg, Config, Emitter, InMemorySink, Logger, Severity};

fn strip(line: &str) -> String {
    String::from_utf8(strip_ansi_escapes::strip(line)).expect("stripped line is utf-8")
}

fn logger_with(width: usize) -> (Logger, Arc<InMemorySink>) {
    let sink = Arc::new(InMemorySink::new());
    let logger = Logger::with_config(
        Config::new()
            .with_name_width(width)
            .with_sink(sink.clone()),
    );
    (logger, sink)
}

/// What the name field should contain for `name` at `width`.
fn expected_field(name: &str, width: usize) -> String {
    let len = name.chars().count();
    if len > width {
        let tail: String = name.chars().skip(len - width + 1).collect();
        format!("*{tail}")
    } else {
        format!("{name:<width$}")
    }
}

#[test]
fn every_severity_reaches_its_own_sink_slot() {
    let (logger, sink) = logger_with(15);
    for severity in Severity::ALL {
        logger
            .log(severity, Emitter::Suppressed, severity.as_str(), vec![])
            .unwrap();
    }
    let records = sink.drain_records();
    assert_eq!(records.len(), Severity::ALL.len());
    for (record, severity) in records.iter().zip(Severity::ALL) {
        assert_eq!(record.severity(), severity);
        assert_eq!(strip(&record.to_string()), severity.as_str());
    }
}

#[test]
fn tagged_messages_at_several_widths() {
    let names: Vec<&str> = ["", "x"]
        .into_iter()
        .chain(Severity::ALL.iter().map(|s| s.as_str()))
        .collect();

    for width in [5, 10, 20] {
        let (logger, sink) = logger_with(width);
        for name in &names {
            for (index, severity) in Severity::ALL.into_iter().enumerate() {
                logger
                    .log(
                        severity,
                        *name,
                        "Test %d {name}",
                        vec![Arg::from(index), Arg::fields([("name", *name)])],
                    )
                    .unwrap();

                let records = sink.drain_records();
                assert_eq!(records.len(), 1);
                assert_eq!(records[0].severity(), severity);

                let line = strip(&records[0].to_string());
                let effective = if name.is_empty() { "Logger" } else { name };
                let field = expected_field(effective, width);
                assert_eq!(field.chars().count(), width);
                assert_eq!(line, format!("[{field}] Test {index} {name}"));
            }
        }
    }
}

#[test]
fn suppressed_name_starts_with_the_message() {
    let (logger, sink) = logger_with(12);
    logger
        .log(Severity::Info, Emitter::Suppressed, "%s ok", vec![Arg::from("disk")])
        .unwrap();
    assert_eq!(strip(&sink.drain_logs()), "disk ok");
}

#[test]
fn typed_arguments_are_styled() {
    let (logger, sink) = logger_with(4);
    logger
        .log(
            Severity::Info,
            "net",
            "%s %s %s %s %s",
            vec![
                Arg::from(3),
                Arg::from(3.14),
                Arg::from("http://x"),
                Arg::from("/etc/passwd"),
                Arg::from(true),
            ],
        )
        .unwrap();
    let line = sink.drain_logs();
    assert_eq!(strip(&line), "[net ] 3 3.14 http://x /etc/passwd true");
    // tag plus five arguments, each styled separately
    assert!(line.matches('\x1b').count() >= 12, "{line:?}");
}

#[test]
fn multibyte_names_are_counted_in_characters() {
    let (logger, sink) = logger_with(6);
    logger.log(Severity::Debug, "Überprüfung", "x", vec![]).unwrap();
    assert_eq!(strip(&sink.drain_logs()), "[*üfung] x");
}
