//! Configuration parsing and validation for the cafe console
//!
//! Supports TOML configuration with:
//! - Versioned schema
//! - Station count, hourly rate and menu title
//! - Validation with clear error messages

mod schema;
mod settings;
mod validation;

pub use schema::*;
pub use settings::*;
pub use validation::*;

use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation failed: {errors:?}")]
    ValidationFailed { errors: Vec<ValidationError> },

    #[error("Unsupported config version: {0}")]
    UnsupportedVersion(u32),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Load and validate configuration from a TOML file
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<CafeSettings> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let settings = parse_config(&content)?;

    tracing::debug!(
        config_path = %path.display(),
        station_count = settings.station_count,
        rate_per_hour = settings.rate_per_hour,
        "Configuration parsed"
    );

    Ok(settings)
}

/// Parse and validate configuration from a TOML string
pub fn parse_config(content: &str) -> ConfigResult<CafeSettings> {
    let raw: RawConfig = toml::from_str(content)?;

    // Check version
    if raw.config_version != CURRENT_CONFIG_VERSION {
        return Err(ConfigError::UnsupportedVersion(raw.config_version));
    }

    let errors = validate_config(&raw);
    if !errors.is_empty() {
        return Err(ConfigError::ValidationFailed { errors });
    }

    Ok(CafeSettings::from_raw(raw))
}

/// Current supported config version
pub const CURRENT_CONFIG_VERSION: u32 = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_minimal_config() {
        let settings = parse_config("config_version = 1").unwrap();
        assert_eq!(settings, CafeSettings::default());
    }

    #[test]
    fn parse_custom_config() {
        let config = r#"
            config_version = 1

            [cafe]
            station_count = 2
            rate_per_hour = 30.0
        "#;

        let settings = parse_config(config).unwrap();
        assert_eq!(settings.station_count, 2);
        assert_eq!(settings.rate_per_hour, 30.0);
        assert_eq!(settings.name, DEFAULT_CAFE_NAME);
    }

    #[test]
    fn reject_wrong_version() {
        let result = parse_config("config_version = 99");
        assert!(matches!(result, Err(ConfigError::UnsupportedVersion(99))));
    }

    #[test]
    fn reject_invalid_values() {
        let config = r#"
            config_version = 1

            [cafe]
            station_count = 0
        "#;

        let result = parse_config(config);
        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed { ref errors })
                if errors == &vec![ValidationError::NoStations]
        ));
    }

    #[test]
    fn reject_malformed_toml() {
        let result = parse_config("config_version = ");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "config_version = 1\n\n[cafe]\nrate_per_hour = 15.0").unwrap();

        let settings = load_config(file.path()).unwrap();
        assert_eq!(settings.rate_per_hour, 15.0);
        assert_eq!(settings.station_count, DEFAULT_STATION_COUNT);
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }
}
