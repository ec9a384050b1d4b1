//! # Slot Selection
//!
//! Rules for building the slot selection of a booking-in-progress.
//!
//! A selection is a run of one-hour slots sorted by start time in which each
//! slot ends exactly where the next one begins. [`toggle_slot`] is the only
//! way a selection grows, and it never produces a gapped or overlapping run:
//!
//! - toggling a selected slot removes it
//! - toggling an unselected slot that extends the run adds it
//! - toggling an unselected slot that does not fit starts a new selection with
//!   just that slot
//!
//! Slots that are unavailable, or that are not part of the slots offered for
//! the active date, are ignored.
//!
//! Removing a slot from the middle of a run leaves the remainder as it is,
//! even though it is no longer contiguous. Callers that need a single run at
//! submission time validate with [`is_contiguous`].

use chrono::{DateTime, NaiveDate, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::time_slot::TimeSlot;

/// Returns true when the slots form one gap-free run in the given order.
///
/// An empty slice and a single slot are both trivially contiguous.
pub fn is_contiguous(slots: &[TimeSlot]) -> bool {
    slots.windows(2).all(|pair| pair[0].is_followed_by(&pair[1]))
}

/// Applies one user toggle of `slot` to `current` and returns the new selection.
///
/// `available` is the list of slots offered for the active date. The inputs are
/// not modified.
pub fn toggle_slot(slot: &TimeSlot, available: &[TimeSlot], current: &[TimeSlot]) -> Vec<TimeSlot> {
    if !available.iter().any(|offered| offered.id == slot.id) {
        debug!("Ignoring toggle of slot {} outside the active date", slot.id);
        return current.to_vec();
    }

    if current.iter().any(|selected| selected.id == slot.id) {
        return current
            .iter()
            .filter(|selected| selected.id != slot.id)
            .cloned()
            .collect();
    }

    if !slot.is_available {
        debug!("Ignoring toggle of unavailable slot {}", slot.id);
        return current.to_vec();
    }

    let mut candidate = current.to_vec();
    candidate.push(slot.clone());
    candidate.sort_by_key(|s| s.start_time);

    if is_contiguous(&candidate) {
        candidate
    } else {
        vec![slot.clone()]
    }
}

/// Owned selection state for one booking workflow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlotSelection {
    slots: Vec<TimeSlot>,
}

impl SlotSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, slot: &TimeSlot, available: &[TimeSlot]) {
        self.slots = toggle_slot(slot, available, &self.slots);
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, slot: &TimeSlot) -> bool {
        self.slots.iter().any(|selected| selected.id == slot.id)
    }

    pub fn hours(&self) -> u32 {
        self.slots.len() as u32
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.slots.first().map(|slot| slot.start_time)
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.slots.last().map(|slot| slot.end_time)
    }

    /// Picking a different date drops whatever was selected before.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn into_slots(self) -> Vec<TimeSlot> {
        self.slots
    }
}

impl From<Vec<TimeSlot>> for SlotSelection {
    fn from(slots: Vec<TimeSlot>) -> Self {
        Self { slots }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
}

impl DayPeriod {
    /// Morning is [6, 12), afternoon [12, 17), evening [17, 24). Earlier hours
    /// belong to no period.
    pub fn from_hour(hour: u32) -> Option<Self> {
        match hour {
            6..=11 => Some(DayPeriod::Morning),
            12..=16 => Some(DayPeriod::Afternoon),
            17..=23 => Some(DayPeriod::Evening),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodGroups {
    pub morning: Vec<TimeSlot>,
    pub afternoon: Vec<TimeSlot>,
    pub evening: Vec<TimeSlot>,
}

/// Splits slots into morning, afternoon and evening by the hour their start
/// time has in `tz`. Input order is kept within each group.
pub fn group_by_period(slots: &[TimeSlot], tz: &Tz) -> PeriodGroups {
    let mut groups = PeriodGroups::default();

    for slot in slots {
        let hour = slot.start_time.with_timezone(tz).hour();
        match DayPeriod::from_hour(hour) {
            Some(DayPeriod::Morning) => groups.morning.push(slot.clone()),
            Some(DayPeriod::Afternoon) => groups.afternoon.push(slot.clone()),
            Some(DayPeriod::Evening) => groups.evening.push(slot.clone()),
            None => debug!("Slot {} starts at hour {} outside any period", slot.id, hour),
        }
    }

    groups
}

/// Keeps the slots whose start time falls on `date` in `tz`.
///
/// This is a plain calendar filter; it does not look at existing bookings.
pub fn available_slots_for_date(date: NaiveDate, all_slots: &[TimeSlot], tz: &Tz) -> Vec<TimeSlot> {
    all_slots
        .iter()
        .filter(|slot| slot.start_time.with_timezone(tz).date_naive() == date)
        .cloned()
        .collect()
}
