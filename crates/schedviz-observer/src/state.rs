//! Shared application state for the observer server.
//!
//! [`AppState`] holds the broadcast channel all simulation runs emit
//! into, plus the relay configuration used to launch new runs. The
//! channel is the only shared resource: runs write to it concurrently
//! without locking since no shared state is read-modify-written.

use schedviz_relay::RelayConfig;
use schedviz_types::ServerEvent;
use tokio::sync::broadcast;

/// Capacity of the event broadcast channel.
///
/// If a subscriber falls behind by more than this many messages it will
/// receive a [`broadcast::error::RecvError::Lagged`] and skip to the
/// newest event.
const BROADCAST_CAPACITY: usize = 256;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor. The broadcast sender doubles as the
/// [`EventSink`](schedviz_relay::EventSink) handed to each run.
#[derive(Clone)]
pub struct AppState {
    /// Broadcast sender for server events.
    pub tx: broadcast::Sender<ServerEvent>,
    /// Relay configuration applied to every run started from this server.
    pub relay: RelayConfig,
}

impl AppState {
    /// Create application state with the given relay configuration.
    pub fn new(relay: RelayConfig) -> Self {
        let (tx, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self { tx, relay }
    }

    /// Subscribe to the event broadcast channel.
    ///
    /// Returns a receiver that will yield every [`ServerEvent`] emitted
    /// by runs started after the subscription.
    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.tx.subscribe()
    }

    /// Publish an event to all connected clients.
    ///
    /// Returns the number of receivers that received the message.
    /// Returns 0 if no clients are connected (this is not an error).
    pub fn broadcast(&self, event: &ServerEvent) -> usize {
        // send returns Err only when there are zero receivers,
        // which is normal when no WebSocket clients are connected.
        self.tx.send(event.clone()).unwrap_or(0)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RelayConfig::default())
    }
}
