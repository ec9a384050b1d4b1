use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    errors::{KitchenError, KitchenResult},
    models::{kitchen::BookingQuote, time_slot::TimeSlot},
    selection::is_contiguous,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingPurpose {
    Cooking,
    Baking,
    #[serde(rename = "Meal Prep")]
    MealPrep,
    Catering,
    #[serde(rename = "Food Photography")]
    FoodPhotography,
    #[serde(rename = "Recipe Testing")]
    RecipeTesting,
    #[serde(rename = "Teaching/Workshop")]
    TeachingWorkshop,
    Other,
}

impl BookingPurpose {
    pub const ALL: [BookingPurpose; 8] = [
        BookingPurpose::Cooking,
        BookingPurpose::Baking,
        BookingPurpose::MealPrep,
        BookingPurpose::Catering,
        BookingPurpose::FoodPhotography,
        BookingPurpose::RecipeTesting,
        BookingPurpose::TeachingWorkshop,
        BookingPurpose::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BookingPurpose::Cooking => "Cooking",
            BookingPurpose::Baking => "Baking",
            BookingPurpose::MealPrep => "Meal Prep",
            BookingPurpose::Catering => "Catering",
            BookingPurpose::FoodPhotography => "Food Photography",
            BookingPurpose::RecipeTesting => "Recipe Testing",
            BookingPurpose::TeachingWorkshop => "Teaching/Workshop",
            BookingPurpose::Other => "Other",
        }
    }
}

impl fmt::Display for BookingPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

/// A reservation of one kitchen for a contiguous run of slots on one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub kitchen_id: String,
    pub user_id: String,
    pub time_slots: Vec<TimeSlot>,
    pub date: NaiveDate,
    pub purpose: BookingPurpose,
    pub notes: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.time_slots.first().map(|slot| slot.start_time)
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.time_slots.last().map(|slot| slot.end_time)
    }

    pub fn hours(&self) -> u32 {
        self.time_slots.len() as u32
    }

    /// A booking is upcoming while its last slot has not ended yet.
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.end_time().is_some_and(|end| end > now)
    }
}

/// A booking that is still being put together by the user.
///
/// Nothing leaves the draft state until [`BookingDraft::submit`] has checked
/// that a kitchen, a contiguous slot selection and a purpose are all present.
#[derive(Debug, Clone)]
pub struct BookingDraft {
    pub kitchen_id: Option<String>,
    pub date: NaiveDate,
    pub time_slots: Vec<TimeSlot>,
    pub purpose: Option<BookingPurpose>,
    pub notes: Option<String>,
}

impl BookingDraft {
    pub fn submit(self, user_id: impl Into<String>, now: DateTime<Utc>) -> KitchenResult<Booking> {
        let kitchen_id = self
            .kitchen_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| KitchenError::Validation("A kitchen must be selected".to_string()))?;

        if self.time_slots.is_empty() {
            return Err(KitchenError::Validation(
                "At least one time slot must be selected".to_string(),
            ));
        }

        if !is_contiguous(&self.time_slots) {
            return Err(KitchenError::Validation(
                "Selected time slots must form one contiguous run".to_string(),
            ));
        }

        let purpose = self
            .purpose
            .ok_or_else(|| KitchenError::Validation("A booking purpose is required".to_string()))?;

        let notes = self.notes.filter(|notes| !notes.trim().is_empty());

        Ok(Booking {
            id: Uuid::new_v4(),
            kitchen_id,
            user_id: user_id.into(),
            time_slots: self.time_slots,
            date: self.date,
            purpose,
            notes,
            status: BookingStatus::Pending,
            created_at: now,
        })
    }
}

/// Admin list filter: optional status plus a case-insensitive kitchen name search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingFilter {
    pub status: Option<BookingStatus>,
    pub search: Option<String>,
}

impl BookingFilter {
    pub fn matches(&self, booking: &Booking, kitchen_name: &str) -> bool {
        let status_match = self.status.is_none_or(|status| booking.status == status);
        let search_match = match self.search.as_deref() {
            Some(term) => kitchen_name.to_lowercase().contains(&term.to_lowercase()),
            None => true,
        };

        status_match && search_match
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingView {
    #[default]
    Upcoming,
    Past,
    All,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub kitchen_id: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub slot_ids: Vec<Uuid>,
    pub purpose: Option<BookingPurpose>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingResponse {
    pub booking: Booking,
    pub quote: BookingQuote,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListBookingsQuery {
    #[serde(default)]
    pub view: BookingView,
}

/// Row of the admin booking list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminBookingResponse {
    #[serde(flatten)]
    pub booking: Booking,
    pub kitchen_name: String,
}
