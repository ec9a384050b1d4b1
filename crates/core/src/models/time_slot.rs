use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bookable interval of kitchen time, one hour long when produced by a slot source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub is_available: bool,
}

impl TimeSlot {
    pub fn new(start_time: DateTime<Utc>, end_time: DateTime<Utc>, is_available: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            start_time,
            end_time,
            is_available,
        }
    }

    /// One-hour slot starting at `start_time`.
    pub fn hourly(start_time: DateTime<Utc>, is_available: bool) -> Self {
        Self::new(start_time, start_time + Duration::hours(1), is_available)
    }

    /// True when `next` starts exactly where this slot ends.
    pub fn is_followed_by(&self, next: &TimeSlot) -> bool {
        self.end_time == next.start_time
    }

    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotsForDateQuery {
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotsForDateResponse {
    pub date: NaiveDate,
    pub morning: Vec<TimeSlot>,
    pub afternoon: Vec<TimeSlot>,
    pub evening: Vec<TimeSlot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleSlotRequest {
    pub date: NaiveDate,
    pub slot_id: Uuid,
    #[serde(default)]
    pub selected_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleSlotResponse {
    pub selected: Vec<TimeSlot>,
    pub hours: u32,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}
