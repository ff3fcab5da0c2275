//! Display Line Model
//!
//! A single completed line of device output. The raw text keeps its
//! trailing delimiter exactly as captured; the timestamp prefix, when
//! present, is rendered once at capture time and never recomputed.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A completed, immutable line of captured output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Captured text including its trailing `\n`
    raw: String,

    /// Rendered capture-time marker, e.g. `14:03:22.117 -> `
    timestamp_prefix: Option<String>,

    /// Position in the session's output
    line_number: usize,

    /// When the line was finalized
    captured_at: DateTime<Local>,
}

impl Line {
    /// Create a new line
    pub fn new(
        raw: String,
        timestamp_prefix: Option<String>,
        line_number: usize,
        captured_at: DateTime<Local>,
    ) -> Self {
        Self {
            raw,
            timestamp_prefix,
            line_number,
            captured_at,
        }
    }

    /// Raw captured text, delimiter included
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn timestamp_prefix(&self) -> Option<&str> {
        self.timestamp_prefix.as_deref()
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn captured_at(&self) -> DateTime<Local> {
        self.captured_at
    }

    /// Text as painted: prefix followed by the raw text
    pub fn display_text(&self) -> String {
        render(self.timestamp_prefix.as_deref(), &self.raw)
    }

    /// Renderer-facing view of this line
    pub fn to_display(&self) -> DisplayLine {
        DisplayLine {
            text: self.raw.clone(),
            timestamp_prefix: self.timestamp_prefix.clone(),
        }
    }
}

/// What the renderer paints for one line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayLine {
    /// Raw captured text
    pub text: String,
    /// Capture-time marker, if timestamps were on when the line completed
    pub timestamp_prefix: Option<String>,
}

impl DisplayLine {
    /// Full painted text
    pub fn rendered(&self) -> String {
        render(self.timestamp_prefix.as_deref(), &self.text)
    }
}

fn render(prefix: Option<&str>, text: &str) -> String {
    match prefix {
        Some(prefix) => format!("{}{}", prefix, text),
        None => text.to_string(),
    }
}
