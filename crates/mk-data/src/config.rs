//! Runtime configuration
//!
//! Base URLs and the outlet palette come from an optional JSON config file
//! with environment overrides on top. The development hosts of the original
//! deployment are only defaults.

use std::path::Path;

use serde::Deserialize;

use mk_core::OutletPalette;

use crate::ApiError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_LEGACY_BASE_URL: &str = "http://localhost:8000";

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "mediekompasset.json";

pub const API_URL_ENV: &str = "MEDIEKOMPASSET_API_URL";
pub const LEGACY_API_URL_ENV: &str = "MEDIEKOMPASSET_LEGACY_API_URL";

/// Shape of the optional config file. Every field may be omitted.
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    base_url: Option<String>,
    legacy_base_url: Option<String>,
    palette: Option<OutletPalette>,
}

/// Resolved configuration the client and views run with.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host serving `/api/stats` and `/api/analyze`.
    pub base_url: String,
    /// Host serving the legacy `/analyze/all`.
    pub legacy_base_url: String,
    /// Outlet color table, builtin entries overlaid with config entries.
    pub palette: OutletPalette,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            legacy_base_url: DEFAULT_LEGACY_BASE_URL.to_string(),
            palette: OutletPalette::default(),
        }
    }
}

impl ApiConfig {
    /// Parse a config file body and overlay it on the defaults.
    pub fn from_json(body: &str) -> Result<Self, ApiError> {
        let file: ConfigFile =
            serde_json::from_str(body).map_err(|e| ApiError::Config(e.to_string()))?;
        let mut config = Self::default();
        if let Some(base_url) = file.base_url {
            config.base_url = base_url;
        }
        if let Some(legacy_base_url) = file.legacy_base_url {
            config.legacy_base_url = legacy_base_url;
        }
        if let Some(palette) = file.palette {
            config.palette.merge(palette);
        }
        Ok(config)
    }

    /// Load configuration: config file if present, then environment
    /// overrides. A broken config file is logged and skipped rather than
    /// aborting startup.
    pub fn load(path: Option<&Path>) -> Self {
        let path = path.unwrap_or_else(|| Path::new(CONFIG_FILE));
        let mut config = match std::fs::read_to_string(path) {
            Ok(body) => match Self::from_json(&body) {
                Ok(config) => {
                    tracing::info!("loaded configuration from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("ignoring invalid config file {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        };
        config.apply_env(|name| std::env::var(name).ok());
        config
    }

    /// Apply environment overrides through an injectable lookup.
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(base_url) = var(API_URL_ENV) {
            self.base_url = base_url;
        }
        if let Some(legacy_base_url) = var(LEGACY_API_URL_ENV) {
            self.legacy_base_url = legacy_base_url;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_development_hosts() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.legacy_base_url, "http://localhost:8000");
        assert_eq!(config.palette.color_for("dr"), "#C70000");
    }

    #[test]
    fn config_file_overrides_urls_and_extends_palette() {
        let config = ApiConfig::from_json(
            r#"{
                "base_url": "https://stats.mediekompasset.dk",
                "palette": {"zetland": "#1A7A5E"}
            }"#,
        )
        .unwrap();

        assert_eq!(config.base_url, "https://stats.mediekompasset.dk");
        assert_eq!(config.legacy_base_url, DEFAULT_LEGACY_BASE_URL);
        assert_eq!(config.palette.color_for("zetland"), "#1A7A5E");
        assert_eq!(config.palette.color_for("dr"), "#C70000");
    }

    #[test]
    fn invalid_config_file_is_an_error() {
        assert!(ApiConfig::from_json("not json").is_err());
    }

    #[test]
    fn environment_wins_over_file_values() {
        let mut config = ApiConfig::from_json(r#"{"base_url": "http://file-host"}"#).unwrap();
        config.apply_env(|name| match name {
            API_URL_ENV => Some("http://env-host".to_string()),
            _ => None,
        });

        assert_eq!(config.base_url, "http://env-host");
        assert_eq!(config.legacy_base_url, DEFAULT_LEGACY_BASE_URL);
    }
}
