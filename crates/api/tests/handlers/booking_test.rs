use axum::http::StatusCode;
use fake::{faker::lorem::en::Sentence, Fake};
use kitchenhub_core::models::booking::{
    Booking, BookingPurpose, BookingStatus, CreateBookingResponse,
};
use kitchenhub_db::repositories::booking::BookingRepository;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::test_utils::{future_date, past_date, TestContext, UNAVAILABLE_HOUR};

async fn book(ctx: &TestContext, date: chrono::NaiveDate, hours: &[u32]) -> CreateBookingResponse {
    let slot_ids: Vec<Uuid> = hours.iter().map(|hour| ctx.slot(date, *hour).id).collect();

    let response = ctx
        .server
        .post("/api/bookings")
        .json(&json!({
            "kitchen_id": "1",
            "date": date,
            "slot_ids": slot_ids,
            "purpose": "Meal Prep",
        }))
        .await;

    response.assert_status_ok();
    response.json()
}

#[tokio::test]
async fn test_create_booking() {
    let ctx = TestContext::new();
    let notes: String = Sentence(3..6).fake();
    let ten = ctx.slot(future_date(), 10).clone();
    let eleven = ctx.slot(future_date(), 11).clone();

    let response = ctx
        .server
        .post("/api/bookings")
        .json(&json!({
            "kitchen_id": "2",
            "date": future_date(),
            "slot_ids": [eleven.id, ten.id],
            "purpose": "Baking",
            "notes": notes,
        }))
        .await;

    response.assert_status_ok();
    let created: CreateBookingResponse = response.json();
    let booking = created.booking;

    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.kitchen_id, "2");
    assert_eq!(booking.user_id, "user123");
    assert_eq!(booking.purpose, BookingPurpose::Baking);
    assert_eq!(booking.notes, Some(notes));
    assert_eq!(booking.time_slots, vec![ten, eleven]);
    assert_eq!(created.quote.total, 120);
    assert!(!created.quote.meets_minimum);

    let stored = ctx.bookings.get(booking.id).await.unwrap();
    assert_eq!(stored, Some(booking));
}

#[tokio::test]
async fn test_missing_purpose_is_rejected() {
    let ctx = TestContext::new();
    let ten = ctx.slot(future_date(), 10);

    let response = ctx
        .server
        .post("/api/bookings")
        .json(&json!({
            "kitchen_id": "1",
            "date": future_date(),
            "slot_ids": [ten.id],
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Validation error: A booking purpose is required");
    assert!(ctx.bookings.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_kitchen_and_slots_are_rejected() {
    let ctx = TestContext::new();
    let ten = ctx.slot(future_date(), 10);

    let no_kitchen = ctx
        .server
        .post("/api/bookings")
        .json(&json!({
            "date": future_date(),
            "slot_ids": [ten.id],
            "purpose": "Cooking",
        }))
        .await;
    let no_slots = ctx
        .server
        .post("/api/bookings")
        .json(&json!({
            "kitchen_id": "1",
            "date": future_date(),
            "purpose": "Cooking",
        }))
        .await;

    no_kitchen.assert_status(StatusCode::BAD_REQUEST);
    no_slots.assert_status(StatusCode::BAD_REQUEST);
    assert!(ctx.bookings.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_kitchen_is_not_found() {
    let ctx = TestContext::new();
    let ten = ctx.slot(future_date(), 10);

    let response = ctx
        .server
        .post("/api/bookings")
        .json(&json!({
            "kitchen_id": "77",
            "date": future_date(),
            "slot_ids": [ten.id],
            "purpose": "Catering",
        }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(ctx.bookings.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_purpose_is_rejected() {
    let ctx = TestContext::new();
    let ten = ctx.slot(future_date(), 10);

    let response = ctx
        .server
        .post("/api/bookings")
        .json(&json!({
            "kitchen_id": "1",
            "date": future_date(),
            "slot_ids": [ten.id],
            "purpose": "Wine Tasting",
        }))
        .await;

    assert!(response.status_code().is_client_error());
    assert!(ctx.bookings.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_slot_selections_are_rejected() {
    let ctx = TestContext::new();
    let cases = vec![
        // not offered on the requested date
        vec![ctx.slot(past_date(), 10).id],
        // booked out
        vec![ctx.slot(future_date(), UNAVAILABLE_HOUR).id],
        // gap between the slots
        vec![ctx.slot(future_date(), 9).id, ctx.slot(future_date(), 14).id],
    ];

    for slot_ids in cases {
        let response = ctx
            .server
            .post("/api/bookings")
            .json(&json!({
                "kitchen_id": "1",
                "date": future_date(),
                "slot_ids": slot_ids,
                "purpose": "Cooking",
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    assert!(ctx.bookings.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_overlapping_bookings_are_accepted() {
    let ctx = TestContext::new();

    book(&ctx, future_date(), &[15, 16]).await;
    book(&ctx, future_date(), &[16, 17]).await;

    assert_eq!(ctx.bookings.list_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_dashboard_views() {
    let ctx = TestContext::new();
    let upcoming = book(&ctx, future_date(), &[18, 19]).await.booking;
    let past = book(&ctx, past_date(), &[8]).await.booking;

    let default_view: Vec<Booking> = ctx.server.get("/api/bookings").await.json();
    let past_view: Vec<Booking> = ctx
        .server
        .get("/api/bookings")
        .add_query_param("view", "past")
        .await
        .json();
    let all_view: Vec<Booking> = ctx
        .server
        .get("/api/bookings")
        .add_query_param("view", "all")
        .await
        .json();

    assert_eq!(default_view, vec![upcoming.clone()]);
    assert_eq!(past_view, vec![past.clone()]);
    assert_eq!(all_view, vec![upcoming, past]);
}

#[tokio::test]
async fn test_get_booking() {
    let ctx = TestContext::new();
    let booking = book(&ctx, future_date(), &[9]).await.booking;

    let fetched: Booking = ctx
        .server
        .get(&format!("/api/bookings/{}", booking.id))
        .await
        .json();

    assert_eq!(fetched, booking);

    ctx.server
        .get(&format!("/api/bookings/{}", Uuid::new_v4()))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cancel_booking() {
    let ctx = TestContext::new();
    let kept = book(&ctx, future_date(), &[9]).await.booking;
    let cancelled = book(&ctx, future_date(), &[20, 21]).await.booking;

    ctx.server
        .delete(&format!("/api/bookings/{}", cancelled.id))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    ctx.server
        .get(&format!("/api/bookings/{}", cancelled.id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    assert_eq!(ctx.bookings.list_all().await.unwrap(), vec![kept]);
}

#[tokio::test]
async fn test_cancel_unknown_booking_is_silent() {
    let ctx = TestContext::new();
    let kept = book(&ctx, future_date(), &[9]).await.booking;

    ctx.server
        .delete(&format!("/api/bookings/{}", Uuid::new_v4()))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    assert_eq!(ctx.bookings.list_all().await.unwrap(), vec![kept]);
}
