//! Connection state reported by the transport

use serde::{Deserialize, Serialize};

/// Link state as last reported by the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConnectionState {
    /// Device link is open
    Connected,
    /// No device link; the initial state of every session
    #[default]
    Disconnected,
}

impl ConnectionState {
    /// Check if the link is open
    pub fn is_connected(self) -> bool {
        matches!(self, ConnectionState::Connected)
    }
}

impl From<bool> for ConnectionState {
    fn from(connected: bool) -> Self {
        if connected {
            ConnectionState::Connected
        } else {
            ConnectionState::Disconnected
        }
    }
}
