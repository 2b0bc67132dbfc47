//! Configuration validation

use crate::schema::RawConfig;
use thiserror::Error;

/// Validation error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("station_count must be at least 1")]
    NoStations,

    #[error("rate_per_hour must be a positive number, got {0}")]
    InvalidRate(f64),

    #[error("name cannot be empty")]
    EmptyName,
}

/// Validate a raw configuration
pub fn validate_config(config: &RawConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let cafe = &config.cafe;

    if cafe.station_count == Some(0) {
        errors.push(ValidationError::NoStations);
    }

    if let Some(rate) = cafe.rate_per_hour
        && !is_valid_rate(rate)
    {
        errors.push(ValidationError::InvalidRate(rate));
    }

    if let Some(name) = &cafe.name
        && name.trim().is_empty()
    {
        errors.push(ValidationError::EmptyName);
    }

    errors
}

/// A usable hourly rate is finite and strictly positive
pub fn is_valid_rate(rate: f64) -> bool {
    rate.is_finite() && rate > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::RawCafeConfig;

    fn config(station_count: Option<u32>, rate: Option<f64>, name: Option<&str>) -> RawConfig {
        RawConfig {
            config_version: 1,
            cafe: RawCafeConfig {
                name: name.map(str::to_string),
                station_count,
                rate_per_hour: rate,
            },
        }
    }

    #[test]
    fn test_valid_config_has_no_errors() {
        assert!(validate_config(&config(Some(5), Some(20.0), Some("Cafe"))).is_empty());
        assert!(validate_config(&config(None, None, None)).is_empty());
    }

    #[test]
    fn test_zero_stations_rejected() {
        let errors = validate_config(&config(Some(0), None, None));
        assert_eq!(errors, vec![ValidationError::NoStations]);
    }

    #[test]
    fn test_bad_rates_rejected() {
        assert!(!is_valid_rate(0.0));
        assert!(!is_valid_rate(-5.0));
        assert!(!is_valid_rate(f64::NAN));
        assert!(!is_valid_rate(f64::INFINITY));
        assert!(is_valid_rate(0.01));

        let errors = validate_config(&config(None, Some(-1.0), None));
        assert!(matches!(errors.as_slice(), [ValidationError::InvalidRate(r)] if *r == -1.0));
    }

    #[test]
    fn test_all_errors_reported_together() {
        let errors = validate_config(&config(Some(0), Some(0.0), Some("  ")));
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::EmptyName));
    }
}
