//! Catalog API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/catalog", get(handler::catalog_view))
        .route("/api/tiers", get(handler::tiers))
}
