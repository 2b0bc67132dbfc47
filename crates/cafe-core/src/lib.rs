//! Core rental state machine for the cafe console
//!
//! This crate contains:
//! - Customer records (case-insensitive identity, cumulative spend)
//! - Station occupancy (Available <-> Occupied) and elapsed-time billing
//! - The registry that owns stations and customers and tracks revenue
//! - Display views for the console
//!
//! Nothing here reads the clock: every time-dependent operation takes `now`.

mod customer;
mod registry;
mod station;
mod views;

pub use customer::*;
pub use registry::*;
pub use station::*;
pub use views::*;
