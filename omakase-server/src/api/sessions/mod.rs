//! Session API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/sessions", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route("/{id}", get(handler::get_by_id).delete(handler::delete))
        .route("/{id}/toggle", post(handler::toggle))
        .route("/{id}/quantity", post(handler::set_quantity))
        .route("/{id}/serving-style", post(handler::set_serving_style))
        .route("/{id}/course-tier", post(handler::set_course_tier))
        .route("/{id}/guests", post(handler::set_guests))
        .route("/{id}/booking", post(handler::update_booking))
        .route("/{id}/submit", post(handler::submit))
}
