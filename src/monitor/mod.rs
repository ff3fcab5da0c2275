//! Monitor engine
//!
//! Turns the transport's fragment stream into ordered display lines and
//! keeps that state in step with connection changes.
//!
//! Data flows one way: fragment → [`StreamLineBuffer`] →
//! [`TimestampAnnotator`] → [`OutputLineStore`] → renderer, with
//! [`AutoScrollPolicy`] consulted once per render pass. Connection events
//! reach [`ConnectionLifecycleController`], which can empty the buffer and
//! the store at any point between two fragments.

pub mod buffer;
pub mod lifecycle;
pub mod scroll;
pub mod sender;
pub mod session;
pub mod store;
pub mod timestamp;

pub use buffer::StreamLineBuffer;
pub use lifecycle::ConnectionLifecycleController;
pub use scroll::AutoScrollPolicy;
pub use sender::OutboundSender;
pub use session::{MonitorSession, SessionUpdate};
pub use store::OutputLineStore;
pub use timestamp::{Clock, FixedClock, SystemClock, TimestampAnnotator};
