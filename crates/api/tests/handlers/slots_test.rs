use std::sync::Arc;

use chrono::Timelike;
use kitchenhub_core::models::time_slot::{SlotsForDateResponse, ToggleSlotResponse};
use kitchenhub_db::{
    mock::repositories::MockSlotProvider, repositories::booking::InMemoryBookingRepository,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use crate::test_utils::{
    build_server, fixture_slots, future_date, past_date, TestContext, UNAVAILABLE_HOUR,
};

fn hours(slots: &[kitchenhub_core::models::time_slot::TimeSlot]) -> Vec<u32> {
    slots.iter().map(|slot| slot.start_time.hour()).collect()
}

#[tokio::test]
async fn test_list_slots_grouped_by_period() {
    let ctx = TestContext::new();

    let response: SlotsForDateResponse = ctx
        .server
        .get("/api/slots")
        .add_query_param("date", future_date())
        .await
        .json();

    assert_eq!(response.date, future_date());
    assert_eq!(hours(&response.morning), vec![8, 9, 10, 11]);
    assert_eq!(hours(&response.afternoon), vec![12, 13, 14, 15, 16]);
    assert_eq!(hours(&response.evening), vec![17, 18, 19, 20, 21]);
    assert!(response
        .morning
        .iter()
        .chain(&response.afternoon)
        .chain(&response.evening)
        .all(|slot| slot.start_time.date_naive() == future_date()));
}

#[tokio::test]
async fn test_list_slots_for_date_without_slots() {
    let ctx = TestContext::new();

    let response: SlotsForDateResponse = ctx
        .server
        .get("/api/slots")
        .add_query_param("date", "2031-01-01")
        .await
        .json();

    assert!(response.morning.is_empty());
    assert!(response.afternoon.is_empty());
    assert!(response.evening.is_empty());
}

#[tokio::test]
async fn test_list_slots_reads_slot_source() {
    let slots = fixture_slots();
    let mut source = MockSlotProvider::new();
    source
        .expect_all_slots()
        .times(1)
        .returning(move || slots.clone());
    let server = build_server(Arc::new(source), Arc::new(InMemoryBookingRepository::new()));

    let response: SlotsForDateResponse = server
        .get("/api/slots")
        .add_query_param("date", past_date())
        .await
        .json();

    assert_eq!(response.morning.len(), 4);
}

#[tokio::test]
async fn test_toggle_extends_contiguous_run() {
    let ctx = TestContext::new();
    let ten = ctx.slot(future_date(), 10);
    let eleven = ctx.slot(future_date(), 11);

    let response: ToggleSlotResponse = ctx
        .server
        .post("/api/slots/toggle")
        .json(&json!({
            "date": future_date(),
            "slot_id": eleven.id,
            "selected_ids": [ten.id],
        }))
        .await
        .json();

    let ids: Vec<Uuid> = response.selected.iter().map(|slot| slot.id).collect();
    assert_eq!(ids, vec![ten.id, eleven.id]);
    assert_eq!(response.hours, 2);
    assert_eq!(response.start, Some(ten.start_time));
    assert_eq!(response.end, Some(eleven.end_time));
}

#[tokio::test]
async fn test_toggle_non_adjacent_slot_starts_over() {
    let ctx = TestContext::new();
    let ten = ctx.slot(future_date(), 10);
    let fourteen = ctx.slot(future_date(), 14);

    let response: ToggleSlotResponse = ctx
        .server
        .post("/api/slots/toggle")
        .json(&json!({
            "date": future_date(),
            "slot_id": fourteen.id,
            "selected_ids": [ten.id],
        }))
        .await
        .json();

    assert_eq!(response.selected, vec![fourteen.clone()]);
}

#[tokio::test]
async fn test_toggle_selected_slot_removes_it() {
    let ctx = TestContext::new();
    let ten = ctx.slot(future_date(), 10);
    let eleven = ctx.slot(future_date(), 11);

    let response: ToggleSlotResponse = ctx
        .server
        .post("/api/slots/toggle")
        .json(&json!({
            "date": future_date(),
            "slot_id": eleven.id,
            "selected_ids": [ten.id, eleven.id],
        }))
        .await
        .json();

    assert_eq!(response.selected, vec![ten.clone()]);
}

#[tokio::test]
async fn test_toggle_unavailable_slot_is_ignored() {
    let ctx = TestContext::new();
    let eleven = ctx.slot(future_date(), 11);
    let blocked = ctx.slot(future_date(), UNAVAILABLE_HOUR);

    let response: ToggleSlotResponse = ctx
        .server
        .post("/api/slots/toggle")
        .json(&json!({
            "date": future_date(),
            "slot_id": blocked.id,
            "selected_ids": [eleven.id],
        }))
        .await
        .json();

    assert_eq!(response.selected, vec![eleven.clone()]);
}

#[tokio::test]
async fn test_unavailable_slot_is_dropped_from_current_selection() {
    let ctx = TestContext::new();
    let eleven = ctx.slot(future_date(), 11);
    let blocked = ctx.slot(future_date(), UNAVAILABLE_HOUR);

    let response: ToggleSlotResponse = ctx
        .server
        .post("/api/slots/toggle")
        .json(&json!({
            "date": future_date(),
            "slot_id": eleven.id,
            "selected_ids": [blocked.id],
        }))
        .await
        .json();

    assert_eq!(response.selected, vec![eleven.clone()]);
    assert!(response.selected.iter().all(|slot| slot.is_available));
}

#[tokio::test]
async fn test_toggle_keeps_selection_in_start_order() {
    let ctx = TestContext::new();
    let nine = ctx.slot(future_date(), 9);
    let ten = ctx.slot(future_date(), 10);
    let eleven = ctx.slot(future_date(), 11);

    let response: ToggleSlotResponse = ctx
        .server
        .post("/api/slots/toggle")
        .json(&json!({
            "date": future_date(),
            "slot_id": nine.id,
            "selected_ids": [eleven.id, ten.id, nine.id],
        }))
        .await
        .json();

    assert_eq!(response.selected, vec![ten.clone(), eleven.clone()]);
    assert_eq!(response.hours, 2);
    assert_eq!(response.start, Some(ten.start_time));
    assert_eq!(response.end, Some(eleven.end_time));
}

#[tokio::test]
async fn test_toggle_slot_from_other_date_is_ignored() {
    let ctx = TestContext::new();
    let eleven = ctx.slot(future_date(), 11);
    let other_day = ctx.slot(past_date(), 12);
    let stale = ctx.slot(past_date(), 9);

    let response: ToggleSlotResponse = ctx
        .server
        .post("/api/slots/toggle")
        .json(&json!({
            "date": future_date(),
            "slot_id": other_day.id,
            "selected_ids": [eleven.id, stale.id],
        }))
        .await
        .json();

    assert_eq!(response.selected, vec![eleven.clone()]);
    assert_eq!(response.hours, 1);
}
