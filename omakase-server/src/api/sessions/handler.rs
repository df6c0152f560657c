//! Session API handlers
//!
//! Every mutation answers with a fresh [`SessionSnapshot`] so the
//! client can redraw from a single source of truth.

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::core::ServerState;
use crate::session::{BookingUpdate, CreateSessionOptions, SessionSnapshot, ToggleOutcome};
use crate::submission::{ChannelKind, SubmissionPayload, SubmissionReceipt};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{CourseCategory, GuestCounts};
use shared::types::{MealPeriod, ServingStyle};

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// POST /api/sessions - create a session
///
/// Mirrors the page's query parameters: `meal` picks the tier table,
/// `readonly` makes a display-only session, the rest prepopulate the
/// booking form.
#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionRequest {
    pub meal: Option<String>,
    #[serde(default)]
    pub readonly: bool,
    pub customer_name: Option<String>,
    pub contact_number: Option<String>,
    pub booking_date: Option<NaiveDate>,
    pub num_adults: Option<u32>,
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CreateSessionRequest>,
) -> AppResult<Json<SessionSnapshot>> {
    let opts = CreateSessionOptions {
        meal: payload
            .meal
            .as_deref()
            .map(MealPeriod::parse)
            .unwrap_or_default(),
        readonly: payload.readonly,
        customer_name: payload.customer_name,
        contact_number: payload.contact_number,
        booking_date: payload.booking_date,
        num_adults: payload.num_adults,
    };
    let id = state.sessions.create(opts)?;
    state
        .sessions
        .with_session(id, |session| Ok(Json(session.snapshot(today()))))
}

/// GET /api/sessions/{id} - state snapshot
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SessionSnapshot>> {
    state
        .sessions
        .with_session(id, |session| Ok(Json(session.snapshot(today()))))
}

/// DELETE /api/sessions/{id} - drop a session
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<bool>> {
    state.sessions.remove(id)?;
    Ok(Json(true))
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub category: CourseCategory,
    pub item_id: String,
}

/// POST /api/sessions/{id}/toggle - toggle an item
///
/// A toggle at the category cap is rejected with no state change, so
/// the client must not mark the item selected.
pub async fn toggle(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ToggleRequest>,
) -> AppResult<Json<SessionSnapshot>> {
    let catalog = state.catalog.clone();
    state.sessions.with_session_mut(id, |session| {
        let item = catalog
            .find(payload.category, session.serving_style, &payload.item_id)
            .ok_or_else(|| AppError::item_not_found(payload.item_id.clone()))?
            .clone();
        let outcome = session.toggle(payload.category, item)?;
        if outcome == ToggleOutcome::Rejected {
            return Err(AppError::new(ErrorCode::SelectionLimitReached)
                .with_detail("category", payload.category.key())
                .with_detail("max", session.max_selections(payload.category)));
        }
        Ok(Json(session.snapshot(today())))
    })
}

#[derive(Debug, Deserialize)]
pub struct QuantityRequest {
    pub item_id: String,
    /// Absent or null reverts to "unspecified"
    pub quantity: Option<u32>,
}

/// POST /api/sessions/{id}/quantity - set or clear an item quantity
pub async fn set_quantity(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<QuantityRequest>,
) -> AppResult<Json<SessionSnapshot>> {
    state.sessions.with_session_mut(id, |session| {
        session.set_quantity(&payload.item_id, payload.quantity)?;
        Ok(Json(session.snapshot(today())))
    })
}

#[derive(Debug, Deserialize)]
pub struct ServingStyleRequest {
    pub style: ServingStyle,
}

/// POST /api/sessions/{id}/serving-style - switch mains style
pub async fn set_serving_style(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ServingStyleRequest>,
) -> AppResult<Json<SessionSnapshot>> {
    state.sessions.with_session_mut(id, |session| {
        session.set_serving_style(payload.style)?;
        Ok(Json(session.snapshot(today())))
    })
}

#[derive(Debug, Deserialize)]
pub struct CourseTierRequest {
    pub courses: u8,
}

/// POST /api/sessions/{id}/course-tier - pick a course tier
pub async fn set_course_tier(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CourseTierRequest>,
) -> AppResult<Json<SessionSnapshot>> {
    state.sessions.with_session_mut(id, |session| {
        session.set_course_tier(payload.courses)?;
        Ok(Json(session.snapshot(today())))
    })
}

/// POST /api/sessions/{id}/guests - update the party composition
pub async fn set_guests(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<GuestCounts>,
) -> AppResult<Json<SessionSnapshot>> {
    state.sessions.with_session_mut(id, |session| {
        session.set_guests(payload)?;
        Ok(Json(session.snapshot(today())))
    })
}

/// POST /api/sessions/{id}/booking - update booking fields
pub async fn update_booking(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<BookingUpdate>,
) -> AppResult<Json<SessionSnapshot>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    state.sessions.with_session_mut(id, |session| {
        session.update_booking(payload)?;
        Ok(Json(session.snapshot(today())))
    })
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub channel: ChannelKind,
}

/// POST /api/sessions/{id}/submit - dispatch the selection
///
/// Gated on global validity; the payload is built from a consistent
/// snapshot before the (fire-and-forget) outbound call.
pub async fn submit(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SubmitRequest>,
) -> AppResult<Json<SubmissionReceipt>> {
    let outbound = state.sessions.with_session(id, |session| {
        let report = session.validate(today());
        if !report.can_submit {
            let code = if report.basic_info_valid {
                ErrorCode::SelectionIncomplete
            } else {
                ErrorCode::BookingIncomplete
            };
            return Err(AppError::new(code));
        }
        Ok(SubmissionPayload::from_session(session))
    })?;

    let receipt = state.submission.submit(id, payload.channel, &outbound).await?;
    Ok(Json(receipt))
}
