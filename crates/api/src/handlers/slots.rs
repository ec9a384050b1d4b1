//! # Slot Picker Handlers
//!
//! The slot picker is stateless on the server: the client sends the ids it
//! currently has selected along with the slot it clicked, and gets back the
//! selection produced by the core toggle rule. Ids that are not offered on the
//! requested date, or whose slot is unavailable, are dropped before the rule is
//! applied.

use axum::{
    extract::{Query, State},
    Json,
};
use kitchenhub_core::{
    models::time_slot::{
        SlotsForDateQuery, SlotsForDateResponse, ToggleSlotRequest, ToggleSlotResponse, TimeSlot,
    },
    selection::{group_by_period, SlotSelection},
};
use std::sync::Arc;
use tracing::debug;

use crate::ApiState;

#[axum::debug_handler]
pub async fn list_slots(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<SlotsForDateQuery>,
) -> Json<SlotsForDateResponse> {
    let slots = state.slots_for_date(query.date);
    let groups = group_by_period(&slots, &state.timezone);

    Json(SlotsForDateResponse {
        date: query.date,
        morning: groups.morning,
        afternoon: groups.afternoon,
        evening: groups.evening,
    })
}

#[axum::debug_handler]
pub async fn toggle_slot(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<ToggleSlotRequest>,
) -> Json<ToggleSlotResponse> {
    let available = state.slots_for_date(payload.date);

    let mut current: Vec<TimeSlot> = payload
        .selected_ids
        .iter()
        .filter_map(|id| available.iter().find(|slot| slot.id == *id))
        .filter(|slot| slot.is_available)
        .cloned()
        .collect();
    current.sort_by_key(|slot| slot.start_time);
    let mut selection = SlotSelection::from(current);

    match available.iter().find(|slot| slot.id == payload.slot_id) {
        Some(slot) => selection.toggle(slot, &available),
        None => debug!(
            "Slot {} is not offered on {}, selection unchanged",
            payload.slot_id, payload.date
        ),
    }

    Json(ToggleSlotResponse {
        hours: selection.hours(),
        start: selection.start_time(),
        end: selection.end_time(),
        selected: selection.into_slots(),
    })
}
