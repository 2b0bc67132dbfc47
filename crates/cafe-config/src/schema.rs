//! Raw configuration schema (as parsed from TOML)

use serde::{Deserialize, Serialize};

/// Raw configuration as parsed from TOML
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawConfig {
    /// Config schema version
    pub config_version: u32,

    /// Café settings
    #[serde(default)]
    pub cafe: RawCafeConfig,
}

/// Café-level settings. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawCafeConfig {
    /// Title shown above the menu
    pub name: Option<String>,

    /// Number of rentable stations (ids run 1..=station_count)
    pub station_count: Option<u32>,

    /// Hourly rate shared by every station
    pub rate_per_hour: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_cafe_section() {
        let toml_str = r#"
            config_version = 1

            [cafe]
            name = "NET ZONE"
            station_count = 8
            rate_per_hour = 25.5
        "#;

        let config: RawConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.cafe.name.as_deref(), Some("NET ZONE"));
        assert_eq!(config.cafe.station_count, Some(8));
        assert_eq!(config.cafe.rate_per_hour, Some(25.5));
    }

    #[test]
    fn cafe_section_is_optional() {
        let config: RawConfig = toml::from_str("config_version = 1").unwrap();
        assert!(config.cafe.name.is_none());
        assert!(config.cafe.station_count.is_none());
        assert!(config.cafe.rate_per_hour.is_none());
    }
}
