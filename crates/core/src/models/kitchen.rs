use serde::{Deserialize, Serialize};

use crate::errors::{KitchenError, KitchenResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KitchenType {
    Commercial,
    Bakery,
    Catering,
    Restaurant,
    Shared,
}

/// A rentable kitchen. Kitchens are reference data and never change at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kitchen {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub location: String,
    pub kitchen_type: KitchenType,
    pub capacity: u32,
    /// Hourly rate in whole currency units
    pub price_per_hour: u32,
    /// Advertised minimum booking length, in hours
    pub min_hours: u32,
    pub rating: f32,
    pub cleanliness_rating: f32,
    pub reviews: u32,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
}

impl Kitchen {
    /// Prices a booking of `hours` one-hour slots at this kitchen's rate.
    ///
    /// Fails with a validation error when the total does not fit in a `u32`.
    pub fn quote(&self, hours: u32) -> KitchenResult<BookingQuote> {
        let total = hours.checked_mul(self.price_per_hour).ok_or_else(|| {
            KitchenError::Validation(format!(
                "Cannot price {} hours at {} per hour",
                hours, self.price_per_hour
            ))
        })?;

        Ok(BookingQuote {
            hours,
            hourly_rate: self.price_per_hour,
            total,
            meets_minimum: hours >= self.min_hours,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingQuote {
    pub hours: u32,
    pub hourly_rate: u32,
    pub total: u32,
    /// Informational only; bookings below the minimum are still accepted.
    pub meets_minimum: bool,
}
