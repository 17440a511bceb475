//! Observer server for the schedviz harness.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **`WebSocket` endpoint** (`/ws`) carrying the live event stream via
//!   [`tokio::sync::broadcast`], plus the client-initiated
//!   `start_simulation` trigger
//! - **Dashboard page** (`GET /`) with the browser-side console and
//!   thread cards
//!
//! # Architecture
//!
//! Each `start_simulation` command spawns one independent relay run on a
//! background task; the run emits into the shared broadcast channel and
//! every connected client sees the same stream. Delivery is best-effort:
//! no replay for late joiners, and lagged clients skip ahead to the
//! newest event. Concurrent runs are permitted and interleave
//! arbitrarily -- a documented gap of the demo, not a feature.

pub mod handlers;
pub mod router;
pub mod server;
pub mod state;
pub mod ws;

// Re-export primary types for convenience.
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;
