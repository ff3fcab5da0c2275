//! serialview - line reassembly and display state for serial monitors
//!
//! This library is the engine behind a serial-monitor view: it turns an
//! arbitrarily chunked device text stream into ordered, optionally
//! timestamped display lines, and keeps that state in step with the
//! connection lifecycle.
//!
//! ## Module Organization
//!
//! - [`monitor`] - Line buffer, timestamping, line store, auto-scroll,
//!   connection lifecycle, outbound sender and the display session
//! - [`transport`] - The transport collaborator interface, its event bus,
//!   outbound framing and an in-memory loopback transport
//! - [`models`] - Value types (Line, LineEnding, BaudRate, ConnectionState)
//! - [`config`] - Monitor configuration and file loading
//! - [`logging`] - `tracing` subscriber setup
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use serialview::{LoopbackTransport, MonitorConfig, MonitorSession};
//!
//! let transport = Arc::new(LoopbackTransport::new(64));
//! let mut session = MonitorSession::attach(transport.clone(), MonitorConfig::default());
//!
//! transport.set_connected(true);
//! transport.push_fragment("boot ok\nready");
//! session.poll_events();
//!
//! assert_eq!(session.display_lines()[0].text, "boot ok\n");
//! assert_eq!(session.pending(), "ready");
//! ```
//!
//! ## Execution Model
//!
//! A session is driven by one task at a time. Each handler (fragment,
//! connection change, user send, configuration change) runs to
//! completion before the next event is looked at, so a disconnect
//! queued between two fragments always empties the view before the
//! second fragment is applied.

#[macro_use]
extern crate tracing;

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod monitor;
pub mod transport;

// Re-exports for core functionality
pub use config::loader::ConfigLoader;
pub use config::{Config, MonitorConfig};
pub use error::{Error, Result};
pub use models::{BaudRate, ConnectionState, DisplayLine, Line, LineEnding};
pub use monitor::{MonitorSession, SessionUpdate};
pub use transport::{FramedTransport, LoopbackTransport, Transport, TransportEvent};

/// The current version of serialview from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The package name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");
