//! Facility registry: owns every station and customer plus the revenue total

use cafe_config::{is_valid_rate, CafeSettings};
use cafe_util::{whole_minutes, CafeError, CustomerId, Result, SessionId, StationId};
use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::{ActiveSessionView, Checkout, Customer, CustomerView, Station, StationView};

/// Result of a successful rental
#[derive(Debug, Clone, PartialEq)]
pub struct Rental {
    pub station_id: StationId,
    pub session_id: SessionId,
    pub customer: CustomerId,
    pub started_at: DateTime<Local>,
}

/// The café: a fixed set of stations, customers in first-seen order, and
/// accumulated revenue.
///
/// Stations refer to their occupant by [`CustomerId`], an index into
/// `customers`. Customers are never removed, so handles stay valid.
#[derive(Debug, Clone)]
pub struct Registry {
    stations: Vec<Station>,
    customers: Vec<Customer>,
    total_revenue: f64,
}

impl Registry {
    /// Create a registry with stations `1..=station_count`, all at the same rate
    pub fn new(station_count: u32, rate_per_hour: f64) -> Result<Self> {
        if station_count == 0 {
            return Err(CafeError::settings("station count must be at least 1"));
        }
        if !is_valid_rate(rate_per_hour) {
            return Err(CafeError::settings(format!(
                "rate per hour must be positive, got {}",
                rate_per_hour
            )));
        }

        let stations = (1..=station_count)
            .map(|id| Station::new(StationId::new(id), rate_per_hour))
            .collect();

        info!(station_count, rate_per_hour, "Registry initialized");

        Ok(Self {
            stations,
            customers: Vec::new(),
            total_revenue: 0.0,
        })
    }

    pub fn from_settings(settings: &CafeSettings) -> Result<Self> {
        Self::new(settings.station_count, settings.rate_per_hour)
    }

    pub fn station_count(&self) -> u32 {
        self.stations.len() as u32
    }

    pub fn rate_per_hour(&self) -> f64 {
        self.stations
            .first()
            .map(Station::rate_per_hour)
            .unwrap_or_default()
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Look up a station by id
    pub fn find_station(&self, id: StationId) -> Option<&Station> {
        self.stations.iter().find(|s| s.id() == id)
    }

    fn find_station_mut(&mut self, id: StationId) -> Option<&mut Station> {
        self.stations.iter_mut().find(|s| s.id() == id)
    }

    /// Find a customer by name (case-insensitive) or register a new one.
    ///
    /// The stored name keeps the casing it was first registered with.
    pub fn get_or_create_customer(&mut self, name: &str) -> CustomerId {
        if let Some(index) = self.customers.iter().position(|c| c.matches_name(name)) {
            return CustomerId::from_index(index);
        }

        self.customers.push(Customer::new(name));
        let id = CustomerId::from_index(self.customers.len() - 1);

        info!(customer_id = %id, customer = name, "Customer registered");

        id
    }

    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.get(id.index())
    }

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    /// Rent a station to the named customer, registering them if new.
    pub fn rent(
        &mut self,
        station_id: StationId,
        name: &str,
        now: DateTime<Local>,
    ) -> Result<Rental> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CafeError::EmptyCustomerName);
        }

        match self.find_station(station_id) {
            None => return Err(CafeError::StationNotFound(station_id)),
            Some(station) if !station.is_available() => {
                return Err(CafeError::StationOccupied(station_id));
            }
            Some(_) => {}
        }

        let customer = self.get_or_create_customer(name);
        let station = self
            .find_station_mut(station_id)
            .ok_or(CafeError::StationNotFound(station_id))?;
        let session_id = station.rent(customer, now)?;

        info!(
            station_id = %station_id,
            session_id = %session_id,
            customer = name,
            "Session started"
        );

        Ok(Rental {
            station_id,
            session_id,
            customer,
            started_at: now,
        })
    }

    /// End the session on a station and credit the occupant.
    ///
    /// Returns `Ok(None)` if the station is idle. Revenue is not recorded;
    /// see [`Registry::checkout`].
    pub fn stop_rent(
        &mut self,
        station_id: StationId,
        now: DateTime<Local>,
    ) -> Result<Option<Checkout>> {
        let station = self
            .find_station_mut(station_id)
            .ok_or(CafeError::StationNotFound(station_id))?;

        let Some(checkout) = station.stop_rent(now) else {
            return Ok(None);
        };

        if let Some(customer) = self.customers.get_mut(checkout.customer.index()) {
            customer.add_spent(checkout.payment);
        }

        info!(
            station_id = %station_id,
            session_id = %checkout.session_id,
            duration_secs = checkout.elapsed.as_secs(),
            payment = checkout.payment,
            "Session ended"
        );

        Ok(Some(checkout))
    }

    /// End the session on a station, credit the occupant and record the revenue.
    pub fn checkout(&mut self, station_id: StationId, now: DateTime<Local>) -> Result<Checkout> {
        let checkout = self
            .stop_rent(station_id, now)?
            .ok_or(CafeError::StationIdle(station_id))?;
        self.add_revenue(checkout.payment);
        Ok(checkout)
    }

    /// Add to total revenue. The amount is trusted as given.
    pub fn add_revenue(&mut self, amount: f64) {
        self.total_revenue += amount;
        debug!(amount, total_revenue = self.total_revenue, "Revenue recorded");
    }

    pub fn total_revenue(&self) -> f64 {
        self.total_revenue
    }

    fn customer_name(&self, id: CustomerId) -> String {
        self.customer(id)
            .map(|c| c.name().to_string())
            .unwrap_or_default()
    }

    /// Status of every station, in id order
    pub fn list_stations(&self) -> Vec<StationView> {
        self.stations
            .iter()
            .map(|station| StationView {
                station_id: station.id(),
                occupant: station.occupant().map(|id| self.customer_name(id)),
                started_at: station.formatted_start_time(),
            })
            .collect()
    }

    /// Every occupied station with its elapsed whole minutes as of `now`
    pub fn list_active_sessions(&self, now: DateTime<Local>) -> Vec<ActiveSessionView> {
        self.stations
            .iter()
            .filter_map(|station| {
                let customer = station.occupant()?;
                let elapsed = station.elapsed(now)?;
                Some(ActiveSessionView {
                    station_id: station.id(),
                    customer_name: self.customer_name(customer),
                    started_at: station.formatted_start_time(),
                    elapsed_minutes: whole_minutes(elapsed),
                })
            })
            .collect()
    }

    /// All customers in first-seen order
    pub fn list_all_customers(&self) -> Vec<CustomerView> {
        self.customers
            .iter()
            .map(|c| CustomerView {
                name: c.name().to_string(),
                total_spent: c.total_spent(),
            })
            .collect()
    }
}
