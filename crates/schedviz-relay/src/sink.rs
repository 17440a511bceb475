//! Event sink seam between the relay pipeline and the delivery layer.
//!
//! The pipeline never talks to a global broadcaster; it emits into an
//! injected [`EventSink`]. The observer passes its broadcast sender,
//! tests pass an in-memory collector, and the classifier and launcher
//! stay testable independently of the live connection layer.

use schedviz_types::ServerEvent;
use tokio::sync::broadcast;

/// Destination for events produced by a simulation run.
///
/// Delivery is best-effort: implementations must not fail or block the
/// pipeline when nobody is listening.
pub trait EventSink {
    /// Emit one event. Events from a single run arrive in order.
    fn emit(&self, event: ServerEvent);
}

impl EventSink for broadcast::Sender<ServerEvent> {
    fn emit(&self, event: ServerEvent) {
        // send returns Err only when there are zero receivers, which is
        // normal when no WebSocket clients are connected.
        let _ = self.send(event);
    }
}
