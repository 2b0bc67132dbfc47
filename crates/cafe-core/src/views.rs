//! Read-only views of registry state for display

use cafe_util::{format_amount, StationId};
use serde::Serialize;
use std::fmt;

/// Status line for one station
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationView {
    pub station_id: StationId,
    /// `None` when the station is available
    pub occupant: Option<String>,
    pub started_at: String,
}

impl StationView {
    pub fn is_available(&self) -> bool {
        self.occupant.is_none()
    }
}

impl fmt::Display for StationView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.occupant {
            None => write!(f, "[ Computer ] {} - Available", self.station_id),
            Some(name) => write!(
                f,
                "Computer {} - Occupied by: {} | Session Start: {}",
                self.station_id, name, self.started_at
            ),
        }
    }
}

/// A session in progress, with elapsed time computed at listing time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveSessionView {
    pub station_id: StationId,
    pub customer_name: String,
    pub started_at: String,
    pub elapsed_minutes: u64,
}

impl fmt::Display for ActiveSessionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PC {} | User: {} | Session Start: {} | Elapsed: {} mins",
            self.station_id, self.customer_name, self.started_at, self.elapsed_minutes
        )
    }
}

/// A customer and their cumulative spend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerView {
    pub name: String,
    pub total_spent: f64,
}

impl fmt::Display for CustomerView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Total Spent: {}",
            self.name,
            format_amount(self.total_spent)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_view_display() {
        let idle = StationView {
            station_id: StationId::new(2),
            occupant: None,
            started_at: "N/A".into(),
        };
        assert!(idle.is_available());
        assert_eq!(idle.to_string(), "[ Computer ] 2 - Available");

        let busy = StationView {
            station_id: StationId::new(3),
            occupant: Some("Bob".into()),
            started_at: "2025-06-01 09:00:00".into(),
        };
        assert_eq!(
            busy.to_string(),
            "Computer 3 - Occupied by: Bob | Session Start: 2025-06-01 09:00:00"
        );
    }

    #[test]
    fn active_session_view_display() {
        let view = ActiveSessionView {
            station_id: StationId::new(1),
            customer_name: "Bob".into(),
            started_at: "2025-06-01 09:00:00".into(),
            elapsed_minutes: 42,
        };
        assert_eq!(
            view.to_string(),
            "PC 1 | User: Bob | Session Start: 2025-06-01 09:00:00 | Elapsed: 42 mins"
        );
    }

    #[test]
    fn customer_view_display_rounds_to_cents() {
        let view = CustomerView {
            name: "Alice".into(),
            total_spent: 12.345_6,
        };
        assert_eq!(view.to_string(), "Name: Alice, Total Spent: PHP 12.35");
    }

    #[test]
    fn views_serialize() {
        let view = CustomerView {
            name: "Alice".into(),
            total_spent: 10.0,
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["name"], "Alice");
        assert_eq!(json["total_spent"], 10.0);
    }
}
