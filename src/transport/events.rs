//! Transport Event System
//!
//! Fragments and connection-state changes are published on a broadcast
//! bus; a display session holds one subscription for its lifetime.
//! Dropping the subscription unsubscribes, so anything published after a
//! session is torn down never reaches it.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::broadcast;

/// Default capacity of the event bus
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// Events emitted by a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// Raw stream text, with no alignment to line boundaries
    Fragment(String),
    /// The device link opened (`true`) or closed (`false`)
    ConnectionStateChanged(bool),
}

/// Event bus shared between a transport and its subscribers
#[derive(Debug, Clone)]
pub struct TransportEventBus {
    sender: broadcast::Sender<TransportEvent>,
    /// Live subscriptions (for monitoring and teardown checks)
    active_subscribers: Arc<AtomicUsize>,
}

impl TransportEventBus {
    /// Create a new event bus with the specified capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            sender,
            active_subscribers: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Subscribe to events published from now on
    pub fn subscribe(&self) -> TransportSubscription {
        let receiver = self.sender.subscribe();
        self.active_subscribers.fetch_add(1, Ordering::SeqCst);
        TransportSubscription {
            receiver,
            active_subscribers: Arc::clone(&self.active_subscribers),
        }
    }

    /// Publish an event; returns how many subscribers will see it
    pub fn publish(&self, event: TransportEvent) -> usize {
        // An error only means nobody is listening
        self.sender.send(event).unwrap_or(0)
    }

    /// Get the number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.active_subscribers.load(Ordering::SeqCst)
    }
}

impl Default for TransportEventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

/// Subscription handle; dropping it unsubscribes
#[derive(Debug)]
pub struct TransportSubscription {
    receiver: broadcast::Receiver<TransportEvent>,
    active_subscribers: Arc<AtomicUsize>,
}

/// What a subscription yields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Received {
    /// The next event in publication order
    Event(TransportEvent),
    /// The bus overwrote this many events before they were read.
    ///
    /// The lost events may include a connection-state change.
    Lagged(u64),
}

impl TransportSubscription {
    /// Receive the next event, waiting if necessary.
    ///
    /// Returns `None` once the bus is gone.
    pub async fn recv(&mut self) -> Option<Received> {
        match self.receiver.recv().await {
            Ok(event) => Some(Received::Event(event)),
            Err(broadcast::error::RecvError::Closed) => None,
            Err(broadcast::error::RecvError::Lagged(count)) => {
                warn!("Transport subscriber lagged by {} events", count);
                Some(Received::Lagged(count))
            }
        }
    }

    /// Try to receive an event without blocking
    pub fn try_recv(&mut self) -> Option<Received> {
        match self.receiver.try_recv() {
            Ok(event) => Some(Received::Event(event)),
            Err(broadcast::error::TryRecvError::Empty) => None,
            Err(broadcast::error::TryRecvError::Closed) => None,
            Err(broadcast::error::TryRecvError::Lagged(count)) => {
                warn!("Transport subscriber lagged by {} events", count);
                Some(Received::Lagged(count))
            }
        }
    }
}

impl Drop for TransportSubscription {
    fn drop(&mut self) {
        self.active_subscribers.fetch_sub(1, Ordering::SeqCst);
    }
}
