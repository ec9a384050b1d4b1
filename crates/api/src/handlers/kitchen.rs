use axum::{
    extract::{Path, Query, State},
    Json,
};
use kitchenhub_core::{
    errors::KitchenError,
    models::kitchen::{BookingQuote, Kitchen},
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{middleware::error_handling::AppError, ApiState};

#[derive(Debug, Deserialize)]
pub struct QuoteQuery {
    pub hours: u32,
}

#[axum::debug_handler]
pub async fn list_kitchens(State(state): State<Arc<ApiState>>) -> Json<Vec<Kitchen>> {
    Json(state.kitchens.all().to_vec())
}

#[axum::debug_handler]
pub async fn get_kitchen(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<Kitchen>, AppError> {
    let kitchen = state
        .kitchens
        .get(&id)
        .cloned()
        .ok_or_else(|| KitchenError::NotFound(format!("Kitchen with ID {} not found", id)))?;

    Ok(Json(kitchen))
}

/// Prices `hours` one-hour slots at the kitchen's hourly rate.
#[axum::debug_handler]
pub async fn quote(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    Query(query): Query<QuoteQuery>,
) -> Result<Json<BookingQuote>, AppError> {
    let kitchen = state
        .kitchens
        .get(&id)
        .ok_or_else(|| KitchenError::NotFound(format!("Kitchen with ID {} not found", id)))?;

    Ok(Json(kitchen.quote(query.hours)?))
}
