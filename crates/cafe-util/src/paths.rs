//! Default paths for the cafe console
//!
//! The config file lives in `$XDG_CONFIG_HOME/cafe/config.toml` or
//! `~/.config/cafe/config.toml`.

use std::path::PathBuf;

/// Environment variable for overriding the config file path
pub const CAFE_CONFIG_ENV: &str = "CAFE_CONFIG";

/// Config filename within the config directory
const CONFIG_FILENAME: &str = "config.toml";

/// Application subdirectory name
const APP_DIR: &str = "cafe";

/// Get the default config file path.
///
/// Order of precedence:
/// 1. `$CAFE_CONFIG` environment variable (if set)
/// 2. `$XDG_CONFIG_HOME/cafe/config.toml` (if XDG_CONFIG_HOME is set)
/// 3. `~/.config/cafe/config.toml` (fallback)
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CAFE_CONFIG_ENV) {
        return PathBuf::from(path);
    }

    config_path_without_env()
}

/// Get the config path without checking the CAFE_CONFIG env var.
pub fn config_path_without_env() -> PathBuf {
    if let Ok(config_home) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(config_home).join(APP_DIR).join(CONFIG_FILENAME);
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home)
            .join(".config")
            .join(APP_DIR)
            .join(CONFIG_FILENAME);
    }

    // Last resort
    PathBuf::from("/etc").join(APP_DIR).join(CONFIG_FILENAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_path_points_at_cafe_toml() {
        let path = config_path_without_env();
        assert!(path.to_string_lossy().contains("cafe"));
        assert!(path.ends_with(CONFIG_FILENAME));
    }
}
