//! Health check route
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/health | GET | Liveness, catalog size, live session count |

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/health", get(health))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    /// healthy | degraded (catalog missing)
    status: &'static str,
    version: &'static str,
    /// Items loaded into the menu catalog
    catalog_items: usize,
    /// Live configurator sessions
    active_sessions: usize,
}

pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let catalog_items = state.catalog.len();
    Json(HealthResponse {
        status: if catalog_items > 0 { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        catalog_items,
        active_sessions: state.sessions.len(),
    })
}
