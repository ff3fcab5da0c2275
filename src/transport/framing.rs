//! Outbound framing at the transport edge
//!
//! The monitor engine forwards user text verbatim. Hosts whose device
//! expects a terminator wrap their transport in [`FramedTransport`],
//! which appends the currently selected [`LineEnding`] to every send.

use std::sync::RwLock;

use super::events::TransportSubscription;
use super::Transport;
use crate::error::Result;
use crate::models::LineEnding;

/// Transport decorator that terminates outbound text
#[derive(Debug)]
pub struct FramedTransport<T> {
    inner: T,
    line_ending: RwLock<LineEnding>,
}

impl<T: Transport> FramedTransport<T> {
    /// Wrap `inner`, starting with `line_ending`
    pub fn new(inner: T, line_ending: LineEnding) -> Self {
        Self {
            inner,
            line_ending: RwLock::new(line_ending),
        }
    }

    /// Line ending applied to the next send
    pub fn line_ending(&self) -> LineEnding {
        *self
            .line_ending
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// The wrapped transport
    pub fn inner(&self) -> &T {
        &self.inner
    }
}

#[async_trait::async_trait]
impl<T: Transport> Transport for FramedTransport<T> {
    fn subscribe(&self) -> TransportSubscription {
        self.inner.subscribe()
    }

    fn send(&self, text: &str) {
        let framed = format!("{}{}", text, self.line_ending().delimiter());
        self.inner.send(&framed);
    }

    async fn disconnect(&self) -> Result<()> {
        self.inner.disconnect().await
    }

    fn set_auto_connect(&self, enabled: bool) {
        self.inner.set_auto_connect(enabled);
    }

    fn set_line_ending(&self, line_ending: LineEnding) {
        debug!("Outbound framing set to {:?}", line_ending);
        *self
            .line_ending
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = line_ending;
    }
}
