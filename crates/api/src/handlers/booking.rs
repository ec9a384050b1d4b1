use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use kitchenhub_core::{
    errors::KitchenError,
    models::{
        booking::{
            Booking, BookingDraft, BookingView, CreateBookingRequest, CreateBookingResponse,
            ListBookingsQuery,
        },
        time_slot::TimeSlot,
    },
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Submits a booking for the requested kitchen, date and slots.
///
/// Slot ids are resolved against the slots offered on the requested date. An
/// id that is not offered on that date, or a slot that is not available, fails
/// the request. The draft checks then run before anything is stored, so a
/// refused request leaves the booking collection untouched.
#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<Json<CreateBookingResponse>, AppError> {
    let offered = state.slots_for_date(payload.date);

    let mut time_slots = payload
        .slot_ids
        .iter()
        .map(|id| resolve_slot(&offered, *id, &payload))
        .collect::<Result<Vec<TimeSlot>, KitchenError>>()?;
    time_slots.sort_by_key(|slot| slot.start_time);

    let draft = BookingDraft {
        kitchen_id: payload.kitchen_id,
        date: payload.date,
        time_slots,
        purpose: payload.purpose,
        notes: payload.notes,
    };
    let booking = draft.submit(state.user_id.as_str(), Utc::now())?;

    let kitchen = state.kitchens.get(&booking.kitchen_id).ok_or_else(|| {
        KitchenError::NotFound(format!("Kitchen with ID {} not found", booking.kitchen_id))
    })?;
    let quote = kitchen.quote(booking.hours())?;

    // Stand-in for the latency of a real booking backend
    if !state.submit_delay.is_zero() {
        tokio::time::sleep(state.submit_delay).await;
    }

    state.bookings.add(booking.clone()).await?;

    info!(
        "Booking created: id={}, kitchen={}, date={}, hours={}, total={}",
        booking.id, kitchen.name, booking.date, quote.hours, quote.total
    );

    Ok(Json(CreateBookingResponse { booking, quote }))
}

fn resolve_slot(
    offered: &[TimeSlot],
    id: Uuid,
    payload: &CreateBookingRequest,
) -> Result<TimeSlot, KitchenError> {
    let slot = offered.iter().find(|slot| slot.id == id).ok_or_else(|| {
        KitchenError::Validation(format!(
            "Time slot {} is not offered on {}",
            id, payload.date
        ))
    })?;

    if !slot.is_available {
        return Err(KitchenError::Validation(format!(
            "Time slot {} is not available",
            id
        )));
    }

    Ok(slot.clone())
}

/// Dashboard listing: upcoming bookings by default, or past / all.
#[axum::debug_handler]
pub async fn list_bookings(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ListBookingsQuery>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let now = Utc::now();

    let bookings = match query.view {
        BookingView::Upcoming => state.bookings.list_upcoming(now).await?,
        BookingView::Past => state.bookings.list_past(now).await?,
        BookingView::All => state.bookings.list_all().await?,
    };

    Ok(Json(bookings))
}

#[axum::debug_handler]
pub async fn get_booking(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, AppError> {
    let booking = state
        .bookings
        .get(id)
        .await?
        .ok_or_else(|| KitchenError::NotFound(format!("Booking with ID {} not found", id)))?;

    Ok(Json(booking))
}

/// Removes the booking. Unknown ids are accepted silently.
#[axum::debug_handler]
pub async fn cancel_booking(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if let Some(booking) = state.bookings.cancel(id).await? {
        info!("Booking cancelled: id={}, kitchen_id={}", booking.id, booking.kitchen_id);
    }

    Ok(StatusCode::NO_CONTENT)
}
