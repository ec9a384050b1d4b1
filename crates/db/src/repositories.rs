pub mod booking;
pub mod kitchen;
pub mod time_slot;
