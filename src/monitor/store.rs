//! Output Line Store
//!
//! Append-only, insertion-ordered history of completed lines. Entries are
//! never reordered or individually removed; the only way out is a full
//! clear.

use crate::models::{DisplayLine, Line};

/// Ordered sequence of committed lines
#[derive(Debug, Default, Clone)]
pub struct OutputLineStore {
    lines: Vec<Line>,
}

impl OutputLineStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a committed line
    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Drop every line
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Committed lines in arrival order
    pub fn snapshot(&self) -> &[Line] {
        &self.lines
    }

    /// Renderer view of every committed line
    pub fn display_lines(&self) -> Vec<DisplayLine> {
        self.lines.iter().map(Line::to_display).collect()
    }

    /// Most recently appended line
    pub fn last(&self) -> Option<&Line> {
        self.lines.last()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
