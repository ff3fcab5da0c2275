//! Core data models for serialview
//!
//! Value types shared by the monitor engine, the transport edge and the
//! configuration layer.

pub mod baud_rate;
pub mod connection;
pub mod line;
pub mod line_ending;

// Re-exports for convenience
pub use baud_rate::BaudRate;
pub use connection::ConnectionState;
pub use line::{DisplayLine, Line};
pub use line_ending::LineEnding;
