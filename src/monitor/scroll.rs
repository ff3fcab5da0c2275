//! Auto-Scroll Policy
//!
//! Decides, once per render pass, whether the view should jump to the
//! newest line. The instruction is one-shot: after the renderer consumes
//! it, nothing pins the view, so manual scrolling by the user is never
//! fought.

/// Per-render-pass scroll decision
#[derive(Debug, Clone, Default)]
pub struct AutoScrollPolicy {
    /// Whether the user wants the view to follow new output
    enabled: bool,
    /// A line was appended since the last render pass
    pending: bool,
}

impl AutoScrollPolicy {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            pending: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Toggle following. Disabling also drops an unconsumed instruction.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.pending = false;
        }
    }

    /// Record that the store gained a line
    pub fn on_line_pushed(&mut self) {
        if self.enabled {
            self.pending = true;
        }
    }

    /// Record that the store was emptied; there is nothing left to follow
    pub fn on_cleared(&mut self) {
        self.pending = false;
    }

    /// Consume the instruction for this render pass
    pub fn should_auto_scroll(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    /// Peek at the instruction without consuming it
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
