//! Unit Tests for Line Reassembly and Timestamping
//!
//! Exercises the buffer and annotator through the display session, the
//! way a host sees them.

use std::sync::Arc;

use chrono::{Local, TimeZone};
use regex::Regex;
use serialview::monitor::timestamp::FixedClock;
use serialview::monitor::StreamLineBuffer;
use serialview::{LoopbackTransport, MonitorConfig, MonitorSession};

fn session_with(config: MonitorConfig) -> MonitorSession {
    let transport = Arc::new(LoopbackTransport::new(16));
    MonitorSession::attach(transport, config)
}

fn timestamp_pattern() -> Regex {
    Regex::new(r"^\d{1,2}:\d{1,2}:\d{2}\.\d{3} -> ").unwrap()
}

#[test]
fn test_crlf_line_without_timestamps() {
    let mut session = session_with(MonitorConfig::default());
    session.on_fragment("AT+RST\r\n");

    let lines = session.display_lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text, "AT+RST\r\n");
    assert_eq!(lines[0].timestamp_prefix, None);
    assert_eq!(lines[0].rendered(), "AT+RST\r\n");
}

#[test]
fn test_ok_err_sequence() {
    let mut session = session_with(MonitorConfig::default());

    let update = session.on_fragment("OK\nERR");
    assert_eq!(update.lines_appended, 1);
    assert_eq!(session.display_lines()[0].text, "OK\n");
    assert_eq!(session.pending(), "ERR");

    let update = session.on_fragment("");
    assert_eq!(update.lines_appended, 0);
    assert_eq!(session.pending(), "ERR");
    assert_eq!(session.display_lines().len(), 1);
}

#[test]
fn test_second_record_waits_for_next_append() {
    let mut session = session_with(MonitorConfig::default());

    session.on_fragment("one\ntwo\n");
    assert_eq!(session.display_lines().len(), 1);
    assert_eq!(session.pending(), "two\n");

    session.on_fragment("");
    let texts: Vec<String> = session.display_lines().into_iter().map(|l| l.text).collect();
    assert_eq!(texts, vec!["one\n", "two\n"]);
    assert_eq!(session.pending(), "");
}

#[test]
fn test_line_split_across_many_fragments() {
    let mut buffer = StreamLineBuffer::new();
    let mut emitted = Vec::new();
    for fragment in ["te", "mp=2", "1.5", "C", "\n"] {
        emitted.extend(buffer.append(fragment));
    }
    assert_eq!(emitted, vec!["temp=21.5C\n".to_string()]);
}

#[test]
fn test_timestamps_enabled_prefix_every_line() {
    let mut session = session_with(MonitorConfig {
        timestamps: true,
        ..MonitorConfig::default()
    });
    let pattern = timestamp_pattern();

    for fragment in ["a\n", "b\n", "c\n"] {
        session.on_fragment(fragment);
    }

    for line in session.display_lines() {
        let rendered = line.rendered();
        assert!(pattern.is_match(&rendered), "bad prefix in {:?}", rendered);
        assert!(rendered.ends_with(&line.text));
    }
}

#[test]
fn test_timestamp_fixed_at_capture() {
    let captured = Local
        .with_ymd_and_hms(2024, 11, 2, 7, 30, 12)
        .single()
        .unwrap()
        + chrono::Duration::milliseconds(5);
    let transport = Arc::new(LoopbackTransport::new(16));
    let mut session = MonitorSession::attach_with_clock(
        transport,
        MonitorConfig {
            timestamps: true,
            ..MonitorConfig::default()
        },
        Arc::new(FixedClock(captured)),
    );

    session.on_fragment("ready\n");
    let first = session.display_lines();
    let second = session.display_lines();

    assert_eq!(first, second);
    assert_eq!(first[0].rendered(), "07:30:12.005 -> ready\n");
    assert_eq!(session.lines()[0].captured_at(), captured);
}

#[test]
fn test_toggling_timestamps_affects_only_new_lines() {
    let mut session = session_with(MonitorConfig::default());
    session.on_fragment("plain\n");
    session.set_timestamps(true);
    session.on_fragment("stamped\n");

    let lines = session.display_lines();
    assert_eq!(lines[0].rendered(), "plain\n");
    assert!(timestamp_pattern().is_match(&lines[1].rendered()));
}

#[test]
fn test_pending_text_is_never_displayed() {
    let mut session = session_with(MonitorConfig::default());
    session.on_fragment("no newline yet");
    assert!(session.display_lines().is_empty());
    assert_eq!(session.pending(), "no newline yet");
}
