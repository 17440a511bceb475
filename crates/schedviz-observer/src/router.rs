//! Axum router construction for the observer server.
//!
//! Assembles the dashboard page and the `WebSocket` endpoint into a
//! single [`Router`] with CORS middleware enabled so a separately
//! hosted front-end can also connect during development.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;
use crate::ws;

/// Build the complete Axum router for the observer server.
///
/// The router includes:
/// - `GET /` -- dashboard page
/// - `GET /ws` -- `WebSocket` event stream + session trigger
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/ws", get(ws::ws_events))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
