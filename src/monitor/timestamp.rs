//! Timestamp Annotation
//!
//! Renders the capture-time marker placed in front of a completed line
//! when timestamps are enabled. The marker is produced once, at the
//! moment the line is finalized, so repeated renders of the same line
//! always show the same time.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Local};

/// Format of the capture-time marker: hour:minute:second.millisecond
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";

/// Separator between the marker and the captured text
pub const TIMESTAMP_SEPARATOR: &str = " -> ";

/// Source of capture times.
///
/// Production code reads the local wall clock; tests can pin time to get
/// deterministic prefixes.
pub trait Clock: Send + Sync + fmt::Debug {
    /// Current local time
    fn now(&self) -> DateTime<Local>;
}

/// Shared clock handle
pub type SharedClock = Arc<dyn Clock>;

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Output of annotating one completed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// When the line was finalized
    pub captured_at: DateTime<Local>,
    /// Rendered marker, present only when timestamps are enabled
    pub prefix: Option<String>,
}

/// Stamps completed lines with their capture time
#[derive(Debug, Clone)]
pub struct TimestampAnnotator {
    clock: SharedClock,
}

impl TimestampAnnotator {
    /// Create an annotator reading the system clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an annotator with a custom clock
    pub fn with_clock(clock: SharedClock) -> Self {
        Self { clock }
    }

    /// Capture the current time and render a prefix if `enabled`
    pub fn annotate(&self, enabled: bool) -> Annotation {
        let captured_at = self.clock.now();
        Annotation {
            captured_at,
            prefix: enabled.then(|| format_prefix(&captured_at)),
        }
    }
}

impl Default for TimestampAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the marker for `time`, separator included
pub fn format_prefix(time: &DateTime<Local>) -> String {
    format!("{}{}", time.format(TIMESTAMP_FORMAT), TIMESTAMP_SEPARATOR)
}
