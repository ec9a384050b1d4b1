pub mod admin;
pub mod booking;
pub mod health;
pub mod kitchen;
pub mod slots;
