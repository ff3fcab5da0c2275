//! Outbound Sender
//!
//! Forwards user-entered text to the transport and applies outbound
//! configuration changes. Text goes out exactly as typed; terminating it
//! with the selected line ending is the transport edge's job (see
//! [`crate::transport::FramedTransport`]).

use crate::error::Result;
use crate::models::{BaudRate, LineEnding};
use crate::transport::SharedTransport;

/// User-intent gateway to the transport
#[derive(Clone)]
pub struct OutboundSender {
    transport: SharedTransport,
}

impl OutboundSender {
    pub fn new(transport: SharedTransport) -> Self {
        Self { transport }
    }

    /// Forward `text` verbatim
    pub fn send(&self, text: &str) {
        debug!("Sending {} bytes", text.len());
        self.transport.send(text);
    }

    /// Line-ending changes apply immediately and leave the link alone
    pub fn select_line_ending(&self, line_ending: LineEnding) {
        self.transport.set_line_ending(line_ending);
    }

    /// Disconnect the active link ahead of a baud-rate change.
    ///
    /// The caller applies `baud_rate` only if this succeeds; a failed
    /// disconnect is returned untouched.
    pub async fn prepare_baud_rate(&self, baud_rate: BaudRate) -> Result<()> {
        info!("Disconnecting before switching to {}", baud_rate);
        self.transport.disconnect().await.inspect_err(|err| {
            warn!("Disconnect before switching to {} failed: {}", baud_rate, err);
        })
    }
}

impl std::fmt::Debug for OutboundSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutboundSender").finish_non_exhaustive()
    }
}
