//! Configuration management for serialview
//!
//! The monitor engine reads these settings but never persists them.
//! Every section defaults independently, so a partial file is valid.

pub mod loader;

use serde::{Deserialize, Serialize};

use crate::models::{BaudRate, LineEnding};
use crate::transport::events::DEFAULT_EVENT_CAPACITY;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display and outbound settings
    pub monitor: MonitorConfig,

    /// Event delivery settings
    pub transport: TransportConfig,
}

/// Settings the display session reads on every event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Prefix completed lines with their capture time
    pub timestamps: bool,

    /// Bring the newest line into view after each update
    pub auto_scroll: bool,

    /// Terminator for outbound text (applied at the transport edge)
    pub line_ending: LineEnding,

    /// Link speed
    pub baud_rate: BaudRate,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            timestamps: false,
            auto_scroll: true,
            line_ending: LineEnding::Newline,
            baud_rate: BaudRate::B9600,
        }
    }
}

/// Transport event bus settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Events buffered per subscriber before it starts lagging
    pub event_capacity: usize,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid event capacity: {0} (must be at least 1)")]
    InvalidEventCapacity(usize),
}

impl ConfigError {
    /// Config field the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            ConfigError::InvalidEventCapacity(_) => "transport.event_capacity",
        }
    }
}

impl From<ConfigError> for crate::error::Error {
    fn from(err: ConfigError) -> Self {
        crate::error::Error::ConfigValidationFailed {
            field: err.field().to_string(),
            reason: err.to_string(),
        }
    }
}

impl Config {
    /// Check values serde cannot reject on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.transport.event_capacity == 0 {
            return Err(ConfigError::InvalidEventCapacity(
                self.transport.event_capacity,
            ));
        }
        Ok(())
    }
}
