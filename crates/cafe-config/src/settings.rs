//! Validated settings structures

use crate::schema::RawConfig;

/// Default number of stations
pub const DEFAULT_STATION_COUNT: u32 = 5;

/// Default hourly rate
pub const DEFAULT_RATE_PER_HOUR: f64 = 20.0;

/// Default menu title
pub const DEFAULT_CAFE_NAME: &str = "INTERNET CAFE";

/// Validated settings ready for use by the registry and console
#[derive(Debug, Clone, PartialEq)]
pub struct CafeSettings {
    /// Title shown above the menu
    pub name: String,

    /// Number of stations
    pub station_count: u32,

    /// Hourly rate shared by all stations
    pub rate_per_hour: f64,
}

impl CafeSettings {
    /// Convert from raw config (after validation)
    pub fn from_raw(raw: RawConfig) -> Self {
        let cafe = raw.cafe;
        Self {
            name: cafe.name.unwrap_or_else(|| DEFAULT_CAFE_NAME.to_string()),
            station_count: cafe.station_count.unwrap_or(DEFAULT_STATION_COUNT),
            rate_per_hour: cafe.rate_per_hour.unwrap_or(DEFAULT_RATE_PER_HOUR),
        }
    }
}

impl Default for CafeSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_CAFE_NAME.to_string(),
            station_count: DEFAULT_STATION_COUNT,
            rate_per_hour: DEFAULT_RATE_PER_HOUR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::RawCafeConfig;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let raw = RawConfig {
            config_version: 1,
            cafe: RawCafeConfig {
                name: None,
                station_count: Some(3),
                rate_per_hour: None,
            },
        };

        let settings = CafeSettings::from_raw(raw);
        assert_eq!(settings.name, DEFAULT_CAFE_NAME);
        assert_eq!(settings.station_count, 3);
        assert_eq!(settings.rate_per_hour, DEFAULT_RATE_PER_HOUR);
    }
}
