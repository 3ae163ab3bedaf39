//! Retail price source configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::{require_http_url, require_non_empty, require_timeout, ValidationError};

#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Most quotes kept from any one source
    #[serde(default = "default_cap")]
    pub per_source_cap: usize,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_primary_source")]
    pub primary_source: RetailSourceConfig,

    #[serde(default = "default_secondary_source")]
    pub secondary_source: RetailSourceConfig,
}

/// One retail search page.
///
/// Overriding a source through the environment requires all four fields.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RetailSourceConfig {
    pub label: String,
    pub search_url: String,
    /// Query-string parameter carrying the medicine name
    pub query_param: String,
    /// Prefix for site-relative product links
    pub link_base: String,
}

impl RetailSourceConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty(&self.label, "pricing.*.label")?;
        require_http_url(&self.search_url, "pricing.*.search_url")?;
        require_non_empty(&self.query_param, "pricing.*.query_param")?;
        require_http_url(&self.link_base, "pricing.*.link_base")?;
        Ok(())
    }
}

impl PricingConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn sources(&self) -> [&RetailSourceConfig; 2] {
        [&self.primary_source, &self.secondary_source]
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.per_source_cap == 0 {
            return Err(ValidationError::InvalidLimit("pricing.per_source_cap"));
        }
        require_timeout(self.timeout_secs, "pricing.timeout_secs")?;
        self.primary_source.validate()?;
        self.secondary_source.validate()?;
        Ok(())
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            per_source_cap: default_cap(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
            primary_source: default_primary_source(),
            secondary_source: default_secondary_source(),
        }
    }
}

fn default_cap() -> usize {
    5
}

fn default_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string()
}

fn default_primary_source() -> RetailSourceConfig {
    RetailSourceConfig {
        label: "1mg".to_string(),
        search_url: "https://www.1mg.com/search/all".to_string(),
        query_param: "name".to_string(),
        link_base: "https://www.1mg.com".to_string(),
    }
}

fn default_secondary_source() -> RetailSourceConfig {
    RetailSourceConfig {
        label: "PharmEasy".to_string(),
        search_url: "https://pharmeasy.in/search/all".to_string(),
        query_param: "name".to_string(),
        link_base: "https://pharmeasy.in".to_string(),
    }
}
