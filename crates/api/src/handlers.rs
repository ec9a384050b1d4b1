pub mod admin;
pub mod booking;
pub mod kitchen;
pub mod slots;
