//! In-memory transport
//!
//! Publishes whatever the host feeds it and records everything a session
//! asks of it. Backs the replay binary and the test suites.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use super::events::{TransportEvent, TransportEventBus, TransportSubscription};
use super::Transport;
use crate::error::{Error, Result};
use crate::models::ConnectionState;

/// Loopback transport with observable side effects
#[derive(Debug, Default)]
pub struct LoopbackTransport {
    bus: TransportEventBus,
    connected: AtomicBool,
    auto_connect: AtomicBool,
    disconnect_calls: AtomicUsize,
    /// Reason the next `disconnect` call should fail with
    disconnect_failure: Mutex<Option<String>>,
    /// Outbound text in send order
    sent: Mutex<Vec<String>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl LoopbackTransport {
    /// Create a loopback transport with the given event capacity
    pub fn new(event_capacity: usize) -> Self {
        Self {
            bus: TransportEventBus::new(event_capacity),
            ..Self::default()
        }
    }

    /// The bus this transport publishes on
    pub fn event_bus(&self) -> &TransportEventBus {
        &self.bus
    }

    /// Deliver a raw fragment to subscribers
    pub fn push_fragment(&self, fragment: &str) -> usize {
        self.bus
            .publish(TransportEvent::Fragment(fragment.to_string()))
    }

    /// Report a connection-state change to subscribers
    pub fn set_connected(&self, connected: bool) -> usize {
        self.connected.store(connected, Ordering::SeqCst);
        self.bus
            .publish(TransportEvent::ConnectionStateChanged(connected))
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.connected.load(Ordering::SeqCst).into()
    }

    /// Current auto-connect intent
    pub fn auto_connect(&self) -> bool {
        self.auto_connect.load(Ordering::SeqCst)
    }

    /// Number of `disconnect` calls so far
    pub fn disconnect_calls(&self) -> usize {
        self.disconnect_calls.load(Ordering::SeqCst)
    }

    /// Make the next `disconnect` call fail with `reason`
    pub fn fail_next_disconnect(&self, reason: impl Into<String>) {
        *lock(&self.disconnect_failure) = Some(reason.into());
    }

    /// Outbound text received so far
    pub fn sent(&self) -> Vec<String> {
        lock(&self.sent).clone()
    }
}

#[async_trait::async_trait]
impl Transport for LoopbackTransport {
    fn subscribe(&self) -> TransportSubscription {
        self.bus.subscribe()
    }

    fn send(&self, text: &str) {
        lock(&self.sent).push(text.to_string());
    }

    async fn disconnect(&self) -> Result<()> {
        self.disconnect_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(reason) = lock(&self.disconnect_failure).take() {
            return Err(Error::TransportDisconnectFailed { reason });
        }

        if self.connected.swap(false, Ordering::SeqCst) {
            self.bus
                .publish(TransportEvent::ConnectionStateChanged(false));
        }
        Ok(())
    }

    fn set_auto_connect(&self, enabled: bool) {
        self.auto_connect.store(enabled, Ordering::SeqCst);
    }
}
