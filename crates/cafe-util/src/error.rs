//! Error types for the cafe console

use thiserror::Error;

use crate::StationId;

/// Core error type for registry and station operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CafeError {
    #[error("Station not found: {0}")]
    StationNotFound(StationId),

    #[error("Station {0} is already occupied")]
    StationOccupied(StationId),

    #[error("Station {0} is not currently rented")]
    StationIdle(StationId),

    #[error("Customer name cannot be empty")]
    EmptyCustomerName,

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

impl CafeError {
    pub fn settings(msg: impl Into<String>) -> Self {
        Self::InvalidSettings(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, CafeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_station() {
        let err = CafeError::StationOccupied(StationId::new(3));
        assert_eq!(err.to_string(), "Station 3 is already occupied");

        let err = CafeError::settings("rate must be positive");
        assert_eq!(err.to_string(), "Invalid settings: rate must be positive");
    }
}
