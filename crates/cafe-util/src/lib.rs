//! Shared utilities for the cafe console
//!
//! This crate provides:
//! - ID types (StationId, CustomerId, SessionId)
//! - Time utilities (clock capability, formatting, elapsed time)
//! - Currency formatting
//! - Error types
//! - Default paths for the config file

mod error;
mod ids;
mod money;
mod paths;
mod time;

pub use error::*;
pub use ids::*;
pub use money::*;
pub use paths::*;
pub use time::*;
