use chrono::{Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use kitchenhub_core::models::time_slot::TimeSlot;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Supplies every time slot the service knows about, across all dates.
pub trait SlotSource: Send + Sync {
    fn all_slots(&self) -> Vec<TimeSlot>;
}

/// Shape of the generated booking window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotWindow {
    /// Number of consecutive days, starting with the start date
    pub days: u32,
    /// First slot of each day starts at this local hour
    pub open_hour: u32,
    /// Last slot of each day ends at this local hour
    pub close_hour: u32,
    /// Probability that a generated slot is bookable
    pub availability: f64,
}

impl Default for SlotWindow {
    fn default() -> Self {
        Self {
            days: 7,
            open_hour: 8,
            close_hour: 22,
            availability: 0.7,
        }
    }
}

/// Hourly slots with randomly assigned availability, generated once.
#[derive(Debug, Clone)]
pub struct RandomSlotSource {
    slots: Vec<TimeSlot>,
}

impl RandomSlotSource {
    pub fn generate<R: Rng>(
        start_date: NaiveDate,
        tz: &Tz,
        window: SlotWindow,
        rng: &mut R,
    ) -> Self {
        let availability = window.availability.clamp(0.0, 1.0);
        let mut slots = Vec::new();

        for day in 0..window.days {
            let date = start_date + Duration::days(i64::from(day));

            for hour in window.open_hour..window.close_hour {
                let Some(local) = date.and_hms_opt(hour, 0, 0) else {
                    continue;
                };
                // Hours skipped by a DST transition produce no slot
                let Some(start) = tz.from_local_datetime(&local).earliest() else {
                    tracing::debug!("Skipping nonexistent local time {} in {}", local, tz);
                    continue;
                };

                slots.push(TimeSlot::hourly(
                    start.with_timezone(&Utc),
                    rng.gen_bool(availability),
                ));
            }
        }

        tracing::debug!(
            "Generated {} slots over {} days from {}",
            slots.len(),
            window.days,
            start_date
        );

        Self { slots }
    }

    /// Generates from a seeded RNG when `seed` is set, otherwise from thread entropy.
    pub fn from_seed(start_date: NaiveDate, tz: &Tz, window: SlotWindow, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::generate(start_date, tz, window, &mut StdRng::seed_from_u64(seed)),
            None => Self::generate(start_date, tz, window, &mut rand::thread_rng()),
        }
    }
}

impl SlotSource for RandomSlotSource {
    fn all_slots(&self) -> Vec<TimeSlot> {
        self.slots.clone()
    }
}

/// A fixed list of slots, for fixtures and tests.
#[derive(Debug, Clone, Default)]
pub struct FixedSlotSource {
    slots: Vec<TimeSlot>,
}

impl FixedSlotSource {
    pub fn new(slots: Vec<TimeSlot>) -> Self {
        Self { slots }
    }
}

impl SlotSource for FixedSlotSource {
    fn all_slots(&self) -> Vec<TimeSlot> {
        self.slots.clone()
    }
}
