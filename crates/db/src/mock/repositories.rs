use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kitchenhub_core::models::{
    booking::{Booking, BookingStatus},
    time_slot::TimeSlot,
};
use mockall::mock;
use uuid::Uuid;

use crate::repositories::{booking::BookingRepository, time_slot::SlotSource};

// Mock repositories for testing
mock! {
    pub BookingRepo {}

    #[async_trait]
    impl BookingRepository for BookingRepo {
        async fn add(&self, booking: Booking) -> eyre::Result<()>;

        async fn cancel(&self, id: Uuid) -> eyre::Result<Option<Booking>>;

        async fn get(&self, id: Uuid) -> eyre::Result<Option<Booking>>;

        async fn list_all(&self) -> eyre::Result<Vec<Booking>>;

        async fn list_upcoming(&self, now: DateTime<Utc>) -> eyre::Result<Vec<Booking>>;

        async fn list_past(&self, now: DateTime<Utc>) -> eyre::Result<Vec<Booking>>;

        async fn update_status(
            &self,
            id: Uuid,
            status: BookingStatus,
        ) -> eyre::Result<Option<Booking>>;
    }
}

mock! {
    pub SlotProvider {}

    impl SlotSource for SlotProvider {
        fn all_slots(&self) -> Vec<TimeSlot>;
    }
}
