//! Facility search configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::{require_http_url, require_timeout, ValidationError};

/// Largest radius accepted for any facility search, in meters.
pub const MAX_RADIUS_M: u32 = 50_000;

/// Largest number of facilities returned by any search.
pub const MAX_LIMIT: usize = 50;

#[derive(Debug, Clone, Deserialize)]
pub struct GeoConfig {
    /// Overpass interpreter endpoint
    #[serde(default = "default_overpass_url")]
    pub overpass_url: String,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Radius for explicit nearby searches that omit one
    #[serde(default = "default_radius")]
    pub default_radius_m: u32,

    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Radius used when a chat message asks for nearby help
    #[serde(default = "default_chat_radius")]
    pub chat_radius_m: u32,

    #[serde(default = "default_limit")]
    pub chat_limit: usize,

    /// Radius for pharmacies stocking a medicine
    #[serde(default = "default_pharmacy_radius")]
    pub pharmacy_radius_m: u32,

    #[serde(default = "default_pharmacy_limit")]
    pub pharmacy_limit: usize,
}

impl GeoConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_http_url(&self.overpass_url, "geo.overpass_url")?;
        require_timeout(self.timeout_secs, "geo.timeout_secs")?;
        check_radius(self.default_radius_m, "geo.default_radius_m")?;
        check_radius(self.chat_radius_m, "geo.chat_radius_m")?;
        check_radius(self.pharmacy_radius_m, "geo.pharmacy_radius_m")?;
        check_limit(self.default_limit, "geo.default_limit")?;
        check_limit(self.chat_limit, "geo.chat_limit")?;
        check_limit(self.pharmacy_limit, "geo.pharmacy_limit")?;
        Ok(())
    }
}

fn check_radius(radius: u32, name: &'static str) -> Result<(), ValidationError> {
    if (1..=MAX_RADIUS_M).contains(&radius) {
        Ok(())
    } else {
        Err(ValidationError::InvalidRadius(name))
    }
}

fn check_limit(limit: usize, name: &'static str) -> Result<(), ValidationError> {
    if (1..=MAX_LIMIT).contains(&limit) {
        Ok(())
    } else {
        Err(ValidationError::InvalidLimit(name))
    }
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            overpass_url: default_overpass_url(),
            timeout_secs: default_timeout(),
            default_radius_m: default_radius(),
            default_limit: default_limit(),
            chat_radius_m: default_chat_radius(),
            chat_limit: default_limit(),
            pharmacy_radius_m: default_pharmacy_radius(),
            pharmacy_limit: default_pharmacy_limit(),
        }
    }
}

fn default_overpass_url() -> String {
    "https://overpass-api.de/api/interpreter".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_radius() -> u32 {
    2000
}

fn default_limit() -> usize {
    5
}

fn default_chat_radius() -> u32 {
    5000
}

fn default_pharmacy_radius() -> u32 {
    3000
}

fn default_pharmacy_limit() -> usize {
    10
}
