//! `WebSocket` handler for the live event stream and session trigger.
//!
//! Clients connect to `GET /ws` and receive every [`ServerEvent`] as a
//! JSON text frame. The handler uses a [`broadcast::Receiver`] so all
//! connected clients see the same stream; if a client falls behind,
//! lagged events are silently skipped and the client resumes from the
//! most recent one.
//!
//! The same socket carries the client-to-server `start_simulation`
//! command, which fires one relay run on a background task.
//!
//! [`broadcast::Receiver`]: tokio::sync::broadcast::Receiver

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use schedviz_relay::run_simulation;
use schedviz_types::ClientCommand;
use tracing::{debug, info, warn};

use crate::state::AppState;

/// Upgrade an HTTP request to a `WebSocket` connection and begin
/// streaming events.
///
/// # Route
///
/// `GET /ws`
pub async fn ws_events(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_ws(socket, state))
}

/// Handle the `WebSocket` lifecycle: subscribe to the broadcast channel,
/// forward each event as a text frame, and react to client commands.
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
    debug!("WebSocket client connected");

    let mut rx = state.subscribe();

    loop {
        tokio::select! {
            // Receive an event from a running relay pipeline.
            result = rx.recv() => {
                match result {
                    Ok(event) => {
                        let json = match serde_json::to_string(&event) {
                            Ok(j) => j,
                            Err(e) => {
                                warn!("Failed to serialize server event: {e}");
                                continue;
                            }
                        };
                        let msg: Message = Message::Text(json.into());
                        if socket.send(msg).await.is_err() {
                            debug!("WebSocket client disconnected (send failed)");
                            return;
                        }
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(n)) => {
                        debug!(skipped = n, "WebSocket client lagged, skipping ahead");
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => {
                        debug!("Broadcast channel closed, shutting down WebSocket");
                        return;
                    }
                }
            }
            // Client commands, pings, and disconnects.
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        handle_client_frame(text.as_str(), &state);
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        debug!("WebSocket client disconnected");
                        return;
                    }
                    Some(Ok(Message::Ping(data))) => {
                        let pong = Message::Pong(data);
                        if socket.send(pong).await.is_err() {
                            debug!("WebSocket client disconnected (pong failed)");
                            return;
                        }
                    }
                    Some(Err(e)) => {
                        debug!("WebSocket error: {e}");
                        return;
                    }
                    _ => {
                        // Ignore binary and pong frames.
                    }
                }
            }
        }
    }
}

/// Parse and dispatch one client text frame.
///
/// `start_simulation` spawns an independent relay run, fire-and-forget.
/// No mutual exclusion: a second command while a run is in progress
/// starts a second concurrent run whose events interleave with the
/// first in the broadcast stream.
fn handle_client_frame(text: &str, state: &Arc<AppState>) {
    match serde_json::from_str::<ClientCommand>(text) {
        Ok(ClientCommand::StartSimulation) => {
            info!("start_simulation received, launching run");
            let state = Arc::clone(state);
            tokio::spawn(async move {
                run_simulation(&state.relay, &state.tx).await;
            });
        }
        Err(e) => {
            warn!(error = %e, frame = text, "ignoring unrecognized client frame");
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::panic)]

    use super::*;
    use schedviz_relay::RelayConfig;
    use schedviz_types::ServerEvent;
    use std::path::PathBuf;

    #[tokio::test]
    async fn start_frame_triggers_a_run() {
        let state = Arc::new(AppState::new(RelayConfig {
            executable: PathBuf::from("/nonexistent/schedviz/os_project"),
            line_delay_ms: 0,
        }));
        let mut rx = state.subscribe();

        handle_client_frame(r#"{"event":"start_simulation"}"#, &state);

        // The spawned run hits the missing-executable path and emits
        // its diagnostic into the broadcast channel.
        let event = rx.recv().await.unwrap();
        match event {
            ServerEvent::ConsoleLog { data } => {
                assert!(data.contains("Could not find executable"));
            }
            other => panic!("expected console_log, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_frame_is_ignored() {
        let state = Arc::new(AppState::default());
        // Must not spawn anything or panic.
        handle_client_frame("not json", &state);
        handle_client_frame(r#"{"event":"unknown"}"#, &state);
    }
}
