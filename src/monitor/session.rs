//! Display Session
//!
//! One [`MonitorSession`] exists per attached view. It owns the pending
//! buffer, the line store and the transport subscription, and it is the
//! only place those are mutated. Every entry point runs to completion
//! and reports what changed through [`SessionUpdate`]; the host decides
//! when to repaint.
//!
//! Dropping a session detaches it, so the subscription is released and
//! auto-connect is withdrawn on every exit path.

use std::sync::Arc;

use uuid::Uuid;

use super::buffer::StreamLineBuffer;
use super::lifecycle::ConnectionLifecycleController;
use super::scroll::AutoScrollPolicy;
use super::sender::OutboundSender;
use super::store::OutputLineStore;
use super::timestamp::{SharedClock, SystemClock, TimestampAnnotator};
use crate::config::MonitorConfig;
use crate::error::Result;
use crate::models::{BaudRate, ConnectionState, DisplayLine, Line, LineEnding};
use crate::transport::{Received, SharedTransport, TransportEvent, TransportSubscription};

/// What a state-mutating call changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionUpdate {
    /// Lines committed to the store
    pub lines_appended: usize,
    /// The store and buffer were emptied
    pub cleared: bool,
}

impl SessionUpdate {
    fn appended(count: usize) -> Self {
        Self {
            lines_appended: count,
            cleared: false,
        }
    }

    fn cleared() -> Self {
        Self {
            lines_appended: 0,
            cleared: true,
        }
    }

    /// Whether the renderer has anything new to paint
    pub fn changed(&self) -> bool {
        self.cleared || self.lines_appended > 0
    }

    /// Fold a later update into this one
    pub fn merge(&mut self, later: SessionUpdate) {
        if later.cleared {
            self.cleared = true;
            self.lines_appended = later.lines_appended;
        } else {
            self.lines_appended += later.lines_appended;
        }
    }
}

/// Per-view display state and its transport subscription
pub struct MonitorSession {
    id: Uuid,
    transport: SharedTransport,
    subscription: Option<TransportSubscription>,
    config: MonitorConfig,
    buffer: StreamLineBuffer,
    store: OutputLineStore,
    annotator: TimestampAnnotator,
    lifecycle: ConnectionLifecycleController,
    scroll: AutoScrollPolicy,
    sender: OutboundSender,
    line_counter: usize,
}

impl MonitorSession {
    /// Attach a new session to `transport`
    pub fn attach(transport: SharedTransport, config: MonitorConfig) -> Self {
        Self::attach_with_clock(transport, config, Arc::new(SystemClock))
    }

    /// Attach a new session whose timestamps come from `clock`
    pub fn attach_with_clock(
        transport: SharedTransport,
        config: MonitorConfig,
        clock: SharedClock,
    ) -> Self {
        let mut session = Self {
            id: Uuid::new_v4(),
            sender: OutboundSender::new(Arc::clone(&transport)),
            transport,
            subscription: None,
            config,
            buffer: StreamLineBuffer::new(),
            store: OutputLineStore::new(),
            annotator: TimestampAnnotator::with_clock(clock),
            lifecycle: ConnectionLifecycleController::new(),
            scroll: AutoScrollPolicy::new(config.auto_scroll),
            line_counter: 0,
        };
        session.subscribe_and_reset();
        session
    }

    fn subscribe_and_reset(&mut self) {
        self.subscription = Some(self.transport.subscribe());
        self.lifecycle = ConnectionLifecycleController::new();
        self.lifecycle
            .on_attach(self.transport.as_ref(), &mut self.buffer, &mut self.store);
        self.reset_counters();
        self.sender.select_line_ending(self.config.line_ending);
        info!(session = %self.id, "Display session attached");
    }

    fn teardown(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            drop(subscription);
            self.lifecycle.on_detach(self.transport.as_ref());
            info!(session = %self.id, "Display session detached");
        }
    }

    /// End the session, releasing the subscription
    pub fn detach(mut self) {
        self.teardown();
    }

    /// Detach and attach again, starting from a clean view
    pub fn reattach(&mut self) -> SessionUpdate {
        self.teardown();
        self.subscribe_and_reset();
        SessionUpdate::cleared()
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Session id recorded on log lines
    pub fn id(&self) -> Uuid {
        self.id
    }

    // === Transport events ===

    /// Apply one transport event
    pub fn handle_event(&mut self, event: TransportEvent) -> SessionUpdate {
        match event {
            TransportEvent::Fragment(fragment) => self.on_fragment(&fragment),
            TransportEvent::ConnectionStateChanged(connected) => {
                self.on_connection_state_changed(connected)
            }
        }
    }

    fn handle_received(&mut self, received: Received) -> SessionUpdate {
        match received {
            Received::Event(event) => self.handle_event(event),
            Received::Lagged(missed) => self.on_events_missed(missed),
        }
    }

    /// Apply every queued event in arrival order without waiting
    pub fn poll_events(&mut self) -> SessionUpdate {
        let mut update = SessionUpdate::default();
        loop {
            let Some(received) = self.subscription.as_mut().and_then(|sub| sub.try_recv()) else {
                return update;
            };
            update.merge(self.handle_received(received));
        }
    }

    /// Wait for the next event and apply it.
    ///
    /// Returns `None` once detached or when the transport's bus is gone.
    pub async fn next_event(&mut self) -> Option<SessionUpdate> {
        let received = self.subscription.as_mut()?.recv().await?;
        Some(self.handle_received(received))
    }

    /// The subscription fell behind and `missed` events were overwritten.
    ///
    /// A disconnect may be among them, so the view is cleared as if one
    /// had arrived.
    pub fn on_events_missed(&mut self, missed: u64) -> SessionUpdate {
        warn!(session = %self.id, "Missed {} transport events, clearing output", missed);
        self.lifecycle.on_events_missed(&mut self.buffer, &mut self.store);
        self.reset_counters();
        SessionUpdate::cleared()
    }

    /// Feed a raw fragment; commits at most one line
    pub fn on_fragment(&mut self, fragment: &str) -> SessionUpdate {
        match self.buffer.append(fragment) {
            Some(raw) => {
                self.commit(raw);
                SessionUpdate::appended(1)
            }
            None => SessionUpdate::default(),
        }
    }

    fn commit(&mut self, raw: String) {
        let annotation = self.annotator.annotate(self.config.timestamps);
        let line = Line::new(
            raw,
            annotation.prefix,
            self.line_counter,
            annotation.captured_at,
        );
        self.line_counter += 1;
        self.store.push(line);
        self.scroll.on_line_pushed();
    }

    /// Apply a reported connection-state change
    pub fn on_connection_state_changed(&mut self, connected: bool) -> SessionUpdate {
        if self
            .lifecycle
            .on_connection_state_changed(connected, &mut self.buffer, &mut self.store)
        {
            self.reset_counters();
            SessionUpdate::cleared()
        } else {
            SessionUpdate::default()
        }
    }

    /// Empty the view and the pending buffer
    pub fn clear(&mut self) -> SessionUpdate {
        self.buffer.clear();
        self.store.clear();
        self.reset_counters();
        SessionUpdate::cleared()
    }

    fn reset_counters(&mut self) {
        self.line_counter = 0;
        self.scroll.on_cleared();
    }

    // === Renderer surface ===

    /// Committed lines as the renderer paints them
    pub fn display_lines(&self) -> Vec<DisplayLine> {
        self.store.display_lines()
    }

    /// Committed lines
    pub fn lines(&self) -> &[Line] {
        self.store.snapshot()
    }

    /// Text received but not yet part of a line. Never rendered.
    pub fn pending(&self) -> &str {
        self.buffer.pending()
    }

    /// Consume this render pass's scroll-to-newest instruction
    pub fn should_auto_scroll(&mut self) -> bool {
        self.scroll.should_auto_scroll()
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.lifecycle.state()
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    // === User intent ===

    /// Send user text to the device as typed
    pub fn on_user_send(&self, text: &str) {
        self.sender.send(text);
    }

    /// Change the outbound line ending; history and link are untouched
    pub fn on_line_ending_selected(&mut self, line_ending: LineEnding) {
        self.config.line_ending = line_ending;
        self.sender.select_line_ending(line_ending);
    }

    /// Change the baud rate, disconnecting first.
    ///
    /// On failure the previous rate stays selected and the error is
    /// returned to the caller.
    pub async fn on_baud_rate_selected(&mut self, baud_rate: BaudRate) -> Result<()> {
        self.sender.prepare_baud_rate(baud_rate).await?;
        self.config.baud_rate = baud_rate;
        info!(session = %self.id, "Baud rate set to {}", baud_rate);
        Ok(())
    }

    /// Toggle timestamps for lines completed from now on
    pub fn set_timestamps(&mut self, enabled: bool) {
        self.config.timestamps = enabled;
    }

    /// Toggle following new output
    pub fn set_auto_scroll(&mut self, enabled: bool) {
        self.config.auto_scroll = enabled;
        self.scroll.set_enabled(enabled);
    }
}

impl Drop for MonitorSession {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl std::fmt::Debug for MonitorSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonitorSession")
            .field("id", &self.id)
            .field("attached", &self.is_attached())
            .field("config", &self.config)
            .field("lines", &self.store.len())
            .field("pending", &self.buffer.pending().len())
            .finish_non_exhaustive()
    }
}
