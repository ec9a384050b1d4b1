use axum::{
    extract::{Path, Query, State},
    Json,
};
use kitchenhub_core::{
    errors::KitchenError,
    models::booking::{AdminBookingResponse, Booking, BookingFilter, BookingStatus},
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Lists every booking matching the status and kitchen name filters.
#[axum::debug_handler]
pub async fn list_bookings(
    State(state): State<Arc<ApiState>>,
    Query(filter): Query<BookingFilter>,
) -> Result<Json<Vec<AdminBookingResponse>>, AppError> {
    let rows = state
        .bookings
        .list_all()
        .await?
        .into_iter()
        .filter_map(|booking| {
            let kitchen_name = state.kitchens.name_of(&booking.kitchen_id).to_string();
            filter
                .matches(&booking, &kitchen_name)
                .then_some(AdminBookingResponse {
                    booking,
                    kitchen_name,
                })
        })
        .collect();

    Ok(Json(rows))
}

#[axum::debug_handler]
pub async fn confirm_booking(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, AppError> {
    set_status(&state, id, BookingStatus::Confirmed).await
}

#[axum::debug_handler]
pub async fn reject_booking(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, AppError> {
    set_status(&state, id, BookingStatus::Cancelled).await
}

async fn set_status(
    state: &ApiState,
    id: Uuid,
    status: BookingStatus,
) -> Result<Json<Booking>, AppError> {
    let booking = state
        .bookings
        .update_status(id, status)
        .await?
        .ok_or_else(|| KitchenError::NotFound(format!("Booking with ID {} not found", id)))?;

    info!("Booking {} marked {:?}", booking.id, booking.status);

    Ok(Json(booking))
}
