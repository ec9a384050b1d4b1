//! # KitchenHub Core
//!
//! Domain types for the kitchen rental service and the slot selection rules
//! that every booking goes through. Nothing in this crate performs I/O.

pub mod errors;
pub mod models;
pub mod selection;
