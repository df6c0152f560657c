//! Catalog API handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::catalog::CatalogView;
use crate::core::ServerState;
use shared::error::AppResult;
use shared::models::CourseTier;
use shared::types::MealPeriod;

/// `?meal=lunch|dinner`, defaulting to dinner like the original page
#[derive(Debug, Deserialize)]
pub struct MealQuery {
    meal: Option<String>,
}

impl MealQuery {
    fn period(&self) -> MealPeriod {
        self.meal
            .as_deref()
            .map(MealPeriod::parse)
            .unwrap_or_default()
    }
}

/// GET /api/catalog - per-meal menu view (also the readonly display)
pub async fn catalog_view(
    State(state): State<ServerState>,
    Query(query): Query<MealQuery>,
) -> AppResult<Json<CatalogView>> {
    let catalog = state.require_catalog()?;
    Ok(Json(catalog.view_for(query.period())))
}

/// GET /api/tiers - course tiers offered for a meal period
pub async fn tiers(Query(query): Query<MealQuery>) -> Json<Vec<CourseTier>> {
    Json(CourseTier::available_for(query.period()))
}
