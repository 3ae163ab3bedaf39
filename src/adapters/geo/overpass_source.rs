//! Overpass Source - PoiSource backed by the OpenStreetMap Overpass API.
//!
//! Each query asks for nodes, ways and relations whose `amenity` tag matches
//! the requested categories, with `out center tags geom` so non-node
//! elements come back with a representative center.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::ports::{AmenityQuery, PoiElement, PoiError, PoiSource};

/// Server-side evaluation budget embedded in every query.
const QUERY_TIMEOUT_SECS: u32 = 25;

#[derive(Debug, Clone)]
pub struct OverpassConfig {
    pub url: String,
    pub timeout: Duration,
}

impl OverpassConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

pub struct OverpassSource {
    config: OverpassConfig,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<PoiElement>,
}

impl OverpassSource {
    pub fn new(config: OverpassConfig) -> Result<Self, PoiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PoiError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }
}

/// Renders an amenity query as Overpass QL.
pub fn build_query(query: &AmenityQuery) -> String {
    let amenities = query
        .categories
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join("|");
    let around = format!(
        "(around:{},{},{})",
        query.radius_m,
        query.center.lat(),
        query.center.lon()
    );

    let mut ql = format!("[out:json][timeout:{}];\n(\n", QUERY_TIMEOUT_SECS);
    for kind in ["node", "way", "relation"] {
        ql.push_str(&format!("  {}[\"amenity\"~\"{}\"]{};\n", kind, amenities, around));
    }
    ql.push_str(");\nout center tags geom;\n");
    ql
}

#[async_trait]
impl PoiSource for OverpassSource {
    async fn find_amenities(&self, query: &AmenityQuery) -> Result<Vec<PoiElement>, PoiError> {
        let response = self
            .client
            .post(&self.config.url)
            .body(build_query(query))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PoiError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else {
                    PoiError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PoiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: OverpassResponse = response
            .json()
            .await
            .map_err(|e| PoiError::Parse(e.to_string()))?;

        Ok(parsed.elements)
    }
}
