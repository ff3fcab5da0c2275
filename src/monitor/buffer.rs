//! Stream Line Buffer
//!
//! Reassembles arbitrarily chunked device output into `\n`-terminated
//! lines. Each append resolves at most one line: if a fragment carries
//! several records, the rest stay pending until the next append, even
//! an empty one.

/// Display-side delimiter, independent of the outbound line ending
pub const DELIMITER: char = '\n';

/// Pending stream text that has not yet resolved into a line
#[derive(Debug, Default, Clone)]
pub struct StreamLineBuffer {
    /// Received text not yet emitted as a line
    pending: String,
}

impl StreamLineBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment and emit the first completed line, if any.
    ///
    /// The returned text includes its trailing `\n`. Anything after the
    /// first delimiter is retained for later calls.
    pub fn append(&mut self, fragment: &str) -> Option<String> {
        self.pending.push_str(fragment);

        let split_at = self.pending.find(DELIMITER)? + DELIMITER.len_utf8();
        let remainder = self.pending.split_off(split_at);
        let line = std::mem::replace(&mut self.pending, remainder);

        debug!(
            "Resolved line of {} bytes, {} bytes pending",
            line.len(),
            self.pending.len()
        );
        Some(line)
    }

    /// Text received but not yet part of a line
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Check if a later append would emit a line without new data
    pub fn has_complete_line(&self) -> bool {
        self.pending.contains(DELIMITER)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop all pending text
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
