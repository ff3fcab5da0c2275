//! Connection Lifecycle Controller
//!
//! Ties buffered display state to connection-state transitions. Any
//! report of a disconnect, repeated ones included, empties both the
//! pending buffer and the line store; attaching a session does the same
//! regardless of what the transport reports. Attach and detach also flip
//! the transport's auto-connect intent.

use super::buffer::StreamLineBuffer;
use super::store::OutputLineStore;
use crate::models::ConnectionState;
use crate::transport::Transport;

/// Two-state connection tracker owning the reset rules
#[derive(Debug, Clone, Default)]
pub struct ConnectionLifecycleController {
    state: ConnectionState,
}

impl ConnectionLifecycleController {
    /// Start in `Disconnected`
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Session attach: clear everything and request auto-connect
    pub fn on_attach(
        &mut self,
        transport: &dyn Transport,
        buffer: &mut StreamLineBuffer,
        store: &mut OutputLineStore,
    ) {
        reset(buffer, store);
        transport.set_auto_connect(true);
    }

    /// Session detach: withdraw the auto-connect request
    pub fn on_detach(&mut self, transport: &dyn Transport) {
        transport.set_auto_connect(false);
    }

    /// Apply a reported transition; returns `true` if buffers were cleared
    pub fn on_connection_state_changed(
        &mut self,
        connected: bool,
        buffer: &mut StreamLineBuffer,
        store: &mut OutputLineStore,
    ) -> bool {
        let previous = self.state;
        self.state = ConnectionState::from(connected);

        match self.state {
            ConnectionState::Connected => {
                if !previous.is_connected() {
                    info!("Transport connected");
                }
                false
            }
            ConnectionState::Disconnected => {
                if previous.is_connected() {
                    info!("Transport disconnected, clearing output");
                } else {
                    debug!("Repeated disconnect report, clearing output");
                }
                reset(buffer, store);
                true
            }
        }
    }

    /// Events were lost before they could be read; assume one was a disconnect
    pub fn on_events_missed(
        &mut self,
        buffer: &mut StreamLineBuffer,
        store: &mut OutputLineStore,
    ) {
        self.state = ConnectionState::Disconnected;
        reset(buffer, store);
    }
}

fn reset(buffer: &mut StreamLineBuffer, store: &mut OutputLineStore) {
    buffer.clear();
    store.clear();
}
