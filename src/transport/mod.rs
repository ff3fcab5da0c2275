//! Transport collaborator interface
//!
//! The monitor engine never opens a device link itself. It talks to a
//! [`Transport`] that delivers stream fragments and connection-state
//! changes over a [`TransportEventBus`], accepts outbound text, and can
//! be asked to disconnect.

pub mod events;
pub mod framing;
pub mod loopback;

pub use events::{Received, TransportEvent, TransportEventBus, TransportSubscription};
pub use framing::FramedTransport;
pub use loopback::LoopbackTransport;

use std::sync::Arc;

use crate::error::Result;
use crate::models::LineEnding;

/// A device link as seen by a display session
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Subscribe to fragments and connection-state changes
    fn subscribe(&self) -> TransportSubscription;

    /// Write text to the device, fire-and-forget
    fn send(&self, text: &str);

    /// Close the active link
    async fn disconnect(&self) -> Result<()>;

    /// Whether the transport should try to connect while a session is attached
    fn set_auto_connect(&self, enabled: bool);

    /// Outbound line-ending selection changed.
    ///
    /// Plain transports ignore this; [`FramedTransport`] uses it to frame
    /// outbound text.
    fn set_line_ending(&self, _line_ending: LineEnding) {}
}

/// Shared transport handle held by a session
pub type SharedTransport = Arc<dyn Transport>;
