//! Contract Tests for Outbound Text and Link Configuration
//!
//! Covers user sends, line-ending selection and the disconnect that
//! precedes every baud-rate change.

use std::sync::Arc;

use serialview::error::Error;
use serialview::{BaudRate, FramedTransport, LineEnding, LoopbackTransport, MonitorConfig, MonitorSession};

#[test]
fn test_user_send_is_verbatim() {
    let transport = Arc::new(LoopbackTransport::new(16));
    let session = MonitorSession::attach(
        transport.clone(),
        MonitorConfig {
            line_ending: LineEnding::Both,
            ..MonitorConfig::default()
        },
    );

    session.on_user_send("AT+CWMODE?");
    assert_eq!(transport.sent(), vec!["AT+CWMODE?".to_string()]);
}

#[test]
fn test_framed_transport_terminates_with_selected_ending() {
    let framed = Arc::new(FramedTransport::new(
        LoopbackTransport::new(16),
        LineEnding::None,
    ));
    let mut session = MonitorSession::attach(
        framed.clone(),
        MonitorConfig {
            line_ending: LineEnding::CarriageReturn,
            ..MonitorConfig::default()
        },
    );

    // Attach syncs the framing edge with the session's selection
    session.on_user_send("ATI");
    session.on_line_ending_selected(LineEnding::Both);
    session.on_user_send("ATZ");

    assert_eq!(
        framed.inner().sent(),
        vec!["ATI\r".to_string(), "ATZ\r\n".to_string()]
    );
}

#[test]
fn test_line_ending_change_keeps_history_and_link() {
    let transport = Arc::new(LoopbackTransport::new(16));
    let mut session = MonitorSession::attach(transport.clone(), MonitorConfig::default());
    transport.set_connected(true);
    transport.push_fragment("boot\n");
    session.poll_events();

    session.on_line_ending_selected(LineEnding::None);
    let update = session.poll_events();

    assert!(!update.changed());
    assert_eq!(session.display_lines().len(), 1);
    assert_eq!(transport.disconnect_calls(), 0);
    assert_eq!(session.config().line_ending, LineEnding::None);
}

#[tokio::test]
async fn test_baud_change_disconnects_then_applies() {
    let transport = Arc::new(LoopbackTransport::new(16));
    let mut session = MonitorSession::attach(transport.clone(), MonitorConfig::default());
    transport.set_connected(true);
    transport.push_fragment("at 9600\n");
    session.poll_events();

    session
        .on_baud_rate_selected(BaudRate::B115200)
        .await
        .expect("disconnect succeeds");

    assert_eq!(transport.disconnect_calls(), 1);
    assert_eq!(session.config().baud_rate, BaudRate::B115200);

    // The transport reports the drop like any other disconnect
    let update = session.poll_events();
    assert!(update.cleared);
    assert!(session.display_lines().is_empty());
}

#[tokio::test]
async fn test_baud_change_failure_propagates_and_keeps_rate() {
    let transport = Arc::new(LoopbackTransport::new(16));
    let mut session = MonitorSession::attach(transport.clone(), MonitorConfig::default());
    transport.fail_next_disconnect("resource busy");

    let err = session
        .on_baud_rate_selected(BaudRate::B57600)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::TransportDisconnectFailed { ref reason } if reason == "resource busy"));
    assert_eq!(session.config().baud_rate, BaudRate::B9600);
}

#[test]
fn test_baud_change_runs_on_tokio_test_runtime() {
    let transport = Arc::new(LoopbackTransport::new(16));
    let mut session = MonitorSession::attach(transport.clone(), MonitorConfig::default());

    tokio_test::block_on(session.on_baud_rate_selected(BaudRate::B300)).unwrap();
    assert_eq!(session.config().baud_rate, BaudRate::B300);
}
