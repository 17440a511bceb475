//! Shared wire types for the schedviz harness.
//!
//! Defines the messages exchanged over the browser-facing `WebSocket`:
//! server-to-client events ([`ServerEvent`]) and client-to-server
//! commands ([`ClientCommand`]). Both are internally tagged on an
//! `"event"` field so a frame reads as a named event with its payload
//! fields inline, e.g.
//!
//! ```json
//! {"event":"thread_update","id":"3","state":"READY","details":"Created"}
//! ```
//!
//! Nothing here is persisted; every message is scoped to a single
//! simulation run.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a simulated thread as inferred from child output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThreadState {
    /// The thread exists and is eligible to run (created or yielded).
    Ready,
    /// The thread currently holds the simulated CPU.
    Running,
    /// The thread has exited.
    Finished,
}

/// A structured thread lifecycle update derived from one output line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadUpdate {
    /// Thread identifier: the first decimal digit run found in the line.
    ///
    /// A label only; never validated against a real thread registry.
    pub id: String,
    /// The inferred lifecycle state.
    pub state: ThreadState,
    /// Short human-readable detail (`Created`, `Yielded`, `Running`, `Exited`).
    pub details: String,
}

/// Server-to-client events pushed over the `WebSocket`.
///
/// Per-run ordering mirrors the order of the child's output lines:
/// each line produces one `console_log`, optionally followed by one
/// `thread_update`, and the stream ends with one `simulation_end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ServerEvent {
    /// One raw output line, trimmed but otherwise unmodified.
    ConsoleLog {
        /// The line text.
        data: String,
    },
    /// A classified thread lifecycle update.
    ThreadUpdate(ThreadUpdate),
    /// Emitted exactly once when the child's output stream is exhausted.
    SimulationEnd {
        /// Completion message shown to the user.
        msg: String,
    },
}

impl ServerEvent {
    /// Build a `console_log` event from a line of child output.
    pub fn console(line: impl Into<String>) -> Self {
        Self::ConsoleLog { data: line.into() }
    }
}

/// Client-to-server commands received over the `WebSocket`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ClientCommand {
    /// Launch one independent simulation run. No payload.
    StartSimulation,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn console_log_wire_shape() {
        let event = ServerEvent::console("Thread 3 created");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"event": "console_log", "data": "Thread 3 created"})
        );
    }

    #[test]
    fn thread_update_wire_shape() {
        let event = ServerEvent::ThreadUpdate(ThreadUpdate {
            id: String::from("3"),
            state: ThreadState::Ready,
            details: String::from("Created"),
        });
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "event": "thread_update",
                "id": "3",
                "state": "READY",
                "details": "Created",
            })
        );
    }

    #[test]
    fn simulation_end_wire_shape() {
        let event = ServerEvent::SimulationEnd {
            msg: String::from("Simulation Complete"),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"event": "simulation_end", "msg": "Simulation Complete"})
        );
    }

    #[test]
    fn thread_state_serializes_screaming() {
        assert_eq!(
            serde_json::to_string(&ThreadState::Running).unwrap(),
            "\"RUNNING\""
        );
        assert_eq!(
            serde_json::to_string(&ThreadState::Finished).unwrap(),
            "\"FINISHED\""
        );
    }

    #[test]
    fn start_simulation_round_trip() {
        let cmd: ClientCommand =
            serde_json::from_str(r#"{"event":"start_simulation"}"#).unwrap();
        assert_eq!(cmd, ClientCommand::StartSimulation);
    }

    #[test]
    fn unknown_client_event_is_rejected() {
        let result = serde_json::from_str::<ClientCommand>(r#"{"event":"stop_simulation"}"#);
        assert!(result.is_err());
    }
}
