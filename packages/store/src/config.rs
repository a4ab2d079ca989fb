//! # Client configuration: `config.toml`
//!
//! Defines the TOML file the web binary embeds at build time. It tells the
//! client where the backend lives and carries the two fixed policies of the
//! presentation layer.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://elkendiviewer-backend.onrender.com"
//!
//! [session]
//! lifetime_days = 15
//!
//! [pagination]
//! page_size = 10
//! ```
//!
//! All structs derive `Default` (with the production defaults) so that a
//! missing or empty file is equivalent to the default configuration.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
}

/// Backend location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "https://elkendiviewer-backend.onrender.com".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Session policy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Days a freshly issued token is considered valid on the client.
    #[serde(default = "default_lifetime_days")]
    pub lifetime_days: u32,
}

fn default_lifetime_days() -> u32 {
    crate::session::DEFAULT_LIFETIME_DAYS
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            lifetime_days: default_lifetime_days(),
        }
    }
}

/// Table pagination.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaginationConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    10
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl ClientConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "config.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, StoreError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Builder method to point at another backend.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api.base_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.session.lifetime_days, 15);
        assert_eq!(config.pagination.page_size, 10);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = ClientConfig::from_toml("[api]\nbase_url = \"http://localhost:3000\"\n").unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.session.lifetime_days, 15);
    }

    #[test]
    fn test_roundtrip() {
        let config = ClientConfig::default().with_base_url("http://api.test");
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(matches!(
            ClientConfig::from_toml("[api\nbase_url = 1"),
            Err(StoreError::Config(_))
        ));
    }
}
