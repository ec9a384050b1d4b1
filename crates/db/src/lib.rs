//! # KitchenHub Data Layer
//!
//! Session-scoped, in-memory storage for the kitchen rental service: the
//! booking collection, the static kitchen catalog and the time slot source.
//! Nothing here outlives the running process.

pub mod repositories;

pub mod mock;
