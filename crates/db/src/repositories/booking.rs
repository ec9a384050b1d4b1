use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eyre::Result;
use kitchenhub_core::models::booking::{Booking, BookingStatus};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Storage for the bookings made during a session.
///
/// Lookups that miss return `None`; none of these operations treat an unknown
/// id as an error.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Appends a booking. No conflict checks are made against existing bookings.
    async fn add(&self, booking: Booking) -> Result<()>;

    /// Removes the booking with the given id, returning it if it was present.
    async fn cancel(&self, id: Uuid) -> Result<Option<Booking>>;

    async fn get(&self, id: Uuid) -> Result<Option<Booking>>;

    async fn list_all(&self) -> Result<Vec<Booking>>;

    /// Bookings whose last slot ends after `now`.
    async fn list_upcoming(&self, now: DateTime<Utc>) -> Result<Vec<Booking>>;

    /// Bookings whose last slot ended at or before `now`.
    async fn list_past(&self, now: DateTime<Utc>) -> Result<Vec<Booking>>;

    async fn update_status(&self, id: Uuid, status: BookingStatus) -> Result<Option<Booking>>;
}

#[derive(Debug, Default)]
pub struct InMemoryBookingRepository {
    bookings: RwLock<Vec<Booking>>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        Self {
            bookings: RwLock::new(bookings),
        }
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn add(&self, booking: Booking) -> Result<()> {
        tracing::debug!(
            "Adding booking: id={}, kitchen_id={}, slots={}",
            booking.id,
            booking.kitchen_id,
            booking.time_slots.len()
        );

        self.bookings.write().await.push(booking);
        Ok(())
    }

    async fn cancel(&self, id: Uuid) -> Result<Option<Booking>> {
        let mut bookings = self.bookings.write().await;

        let removed = bookings
            .iter()
            .position(|booking| booking.id == id)
            .map(|index| bookings.remove(index));

        if removed.is_some() {
            tracing::debug!("Booking removed: id={}", id);
        } else {
            tracing::debug!("Cancel ignored, booking not found: id={}", id);
        }

        Ok(removed)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Booking>> {
        let bookings = self.bookings.read().await;
        Ok(bookings.iter().find(|booking| booking.id == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Booking>> {
        Ok(self.bookings.read().await.clone())
    }

    async fn list_upcoming(&self, now: DateTime<Utc>) -> Result<Vec<Booking>> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .iter()
            .filter(|booking| booking.is_upcoming(now))
            .cloned()
            .collect())
    }

    async fn list_past(&self, now: DateTime<Utc>) -> Result<Vec<Booking>> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .iter()
            .filter(|booking| !booking.is_upcoming(now))
            .cloned()
            .collect())
    }

    async fn update_status(&self, id: Uuid, status: BookingStatus) -> Result<Option<Booking>> {
        let mut bookings = self.bookings.write().await;

        let updated = bookings
            .iter_mut()
            .find(|booking| booking.id == id)
            .map(|booking| {
                booking.status = status;
                booking.clone()
            });

        match &updated {
            Some(b) => tracing::debug!("Booking status updated: id={}, status={:?}", b.id, b.status),
            None => tracing::debug!("Status update ignored, booking not found: id={}", id),
        }

        Ok(updated)
    }
}
