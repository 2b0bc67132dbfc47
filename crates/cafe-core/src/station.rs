//! Station occupancy state machine and session billing

use cafe_util::{
    elapsed_between, format_datetime_full, fractional_hours, CafeError, CustomerId, Result,
    SessionId, StationId,
};
use chrono::{DateTime, Local};
use std::time::Duration;

/// Placeholder shown for the start time of an idle station
pub const NOT_APPLICABLE: &str = "N/A";

/// Occupancy of a station
#[derive(Debug, Clone, PartialEq)]
enum Occupancy {
    Available,
    Occupied(ActiveRental),
}

/// The session currently running on a station
#[derive(Debug, Clone, PartialEq)]
struct ActiveRental {
    session_id: SessionId,
    customer: CustomerId,
    started_at: DateTime<Local>,
}

/// Record of a completed session
#[derive(Debug, Clone, PartialEq)]
pub struct Checkout {
    pub station_id: StationId,
    pub session_id: SessionId,
    pub customer: CustomerId,
    pub started_at: DateTime<Local>,
    pub ended_at: DateTime<Local>,
    pub elapsed: Duration,
    /// Unrounded charge: elapsed hours × rate
    pub payment: f64,
}

/// A rentable station
#[derive(Debug, Clone)]
pub struct Station {
    id: StationId,
    rate_per_hour: f64,
    occupancy: Occupancy,
}

impl Station {
    pub fn new(id: StationId, rate_per_hour: f64) -> Self {
        Self {
            id,
            rate_per_hour,
            occupancy: Occupancy::Available,
        }
    }

    pub fn id(&self) -> StationId {
        self.id
    }

    pub fn rate_per_hour(&self) -> f64 {
        self.rate_per_hour
    }

    pub fn is_available(&self) -> bool {
        matches!(self.occupancy, Occupancy::Available)
    }

    fn rental(&self) -> Option<&ActiveRental> {
        match &self.occupancy {
            Occupancy::Available => None,
            Occupancy::Occupied(rental) => Some(rental),
        }
    }

    /// Current occupant, present iff the station is occupied
    pub fn occupant(&self) -> Option<CustomerId> {
        self.rental().map(|r| r.customer)
    }

    /// Session start, present iff the station is occupied
    pub fn session_start(&self) -> Option<DateTime<Local>> {
        self.rental().map(|r| r.started_at)
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        self.rental().map(|r| &r.session_id)
    }

    /// Time the current session has been running, if any
    pub fn elapsed(&self, now: DateTime<Local>) -> Option<Duration> {
        self.session_start().map(|start| elapsed_between(start, now))
    }

    /// Start a session for `customer` at `now`.
    ///
    /// An occupied station keeps its running session and the call fails.
    pub fn rent(&mut self, customer: CustomerId, now: DateTime<Local>) -> Result<SessionId> {
        if !self.is_available() {
            return Err(CafeError::StationOccupied(self.id));
        }

        let session_id = SessionId::new();
        self.occupancy = Occupancy::Occupied(ActiveRental {
            session_id: session_id.clone(),
            customer,
            started_at: now,
        });

        Ok(session_id)
    }

    /// End the current session at `now` and bill it.
    ///
    /// Returns `None` without touching anything if the station is idle.
    /// The caller credits `Checkout::customer` with the payment.
    pub fn stop_rent(&mut self, now: DateTime<Local>) -> Option<Checkout> {
        let rental = match std::mem::replace(&mut self.occupancy, Occupancy::Available) {
            Occupancy::Available => return None,
            Occupancy::Occupied(rental) => rental,
        };

        if now < rental.started_at {
            tracing::warn!(
                station_id = %self.id,
                session_id = %rental.session_id,
                "Clock moved backwards during session, billing zero time"
            );
        }

        let elapsed = elapsed_between(rental.started_at, now);
        let payment = fractional_hours(elapsed) * self.rate_per_hour;

        Some(Checkout {
            station_id: self.id,
            session_id: rental.session_id,
            customer: rental.customer,
            started_at: rental.started_at,
            ended_at: now,
            elapsed,
            payment,
        })
    }

    /// Session start as `yyyy-MM-dd HH:mm:ss`, or `N/A` when idle
    pub fn formatted_start_time(&self) -> String {
        match self.session_start() {
            Some(start) => format_datetime_full(&start),
            None => NOT_APPLICABLE.to_string(),
        }
    }
}
