//! FindNearbyFacilitiesHandler - Query handler for explicit nearby searches.

use chrono::Utc;
use thiserror::Error;

use super::locator::{FacilityLocator, NearbyFacilities, SearchProfile};
use crate::config::{MAX_LIMIT, MAX_RADIUS_M};
use crate::domain::foundation::{GeoPoint, ValidationError};

/// Query for facilities around a coordinate.
///
/// Radius and limit arrive as raw integers so out-of-range values can be
/// rejected rather than silently clamped.
#[derive(Debug, Clone, Default)]
pub struct FindNearbyFacilitiesQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub radius_m: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NearbyError {
    #[error("lat and lon required")]
    MissingLocation,

    #[error(transparent)]
    InvalidLocation(#[from] ValidationError),

    #[error("radius must be between 1 and {max} meters, got {actual}")]
    InvalidRadius { actual: i64, max: u32 },

    #[error("limit must be between 1 and {max}, got {actual}")]
    InvalidLimit { actual: i64, max: usize },
}

/// Requires both coordinate halves and a valid point.
pub fn require_location(lat: Option<f64>, lon: Option<f64>) -> Result<GeoPoint, NearbyError> {
    GeoPoint::from_optional(lat, lon)?.ok_or(NearbyError::MissingLocation)
}

/// Resolves an optional radius against a default, enforcing 1..=50000.
pub fn resolve_radius(radius_m: Option<i64>, default: u32) -> Result<u32, NearbyError> {
    match radius_m {
        None => Ok(default),
        Some(r) if (1..=i64::from(MAX_RADIUS_M)).contains(&r) => Ok(r as u32),
        Some(actual) => Err(NearbyError::InvalidRadius {
            actual,
            max: MAX_RADIUS_M,
        }),
    }
}

fn resolve_limit(limit: Option<i64>, default: usize) -> Result<usize, NearbyError> {
    match limit {
        None => Ok(default),
        Some(l) if (1..=MAX_LIMIT as i64).contains(&l) => Ok(l as usize),
        Some(actual) => Err(NearbyError::InvalidLimit {
            actual,
            max: MAX_LIMIT,
        }),
    }
}

pub struct FindNearbyFacilitiesHandler {
    locator: FacilityLocator,
    defaults: SearchProfile,
}

impl FindNearbyFacilitiesHandler {
    pub fn new(locator: FacilityLocator, defaults: SearchProfile) -> Self {
        Self { locator, defaults }
    }

    pub async fn handle(
        &self,
        query: FindNearbyFacilitiesQuery,
    ) -> Result<NearbyFacilities, NearbyError> {
        let center = require_location(query.lat, query.lon)?;
        let profile = SearchProfile::new(
            resolve_radius(query.radius_m, self.defaults.radius_m)?,
            resolve_limit(query.limit, self.defaults.limit)?,
        );

        Ok(self.locator.locate(center, profile, Utc::now()).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::geo::StaticPoiSource;
    use crate::ports::PoiElement;
    use std::sync::Arc;

    fn handler(source: StaticPoiSource) -> FindNearbyFacilitiesHandler {
        FindNearbyFacilitiesHandler::new(
            FacilityLocator::new(Arc::new(source)),
            SearchProfile::new(2000, 5),
        )
    }

    fn at(lat: f64, lon: f64) -> FindNearbyFacilitiesQuery {
        FindNearbyFacilitiesQuery {
            lat: Some(lat),
            lon: Some(lon),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn zero_results_is_success_with_empty_list() {
        let result = handler(StaticPoiSource::empty()).handle(at(12.9, 77.6)).await;

        assert_eq!(result, Ok(NearbyFacilities::Found(vec![])));
    }

    #[tokio::test]
    async fn uses_default_profile() {
        let source = StaticPoiSource::new(
            (0..8)
                .map(|i| PoiElement::node(i, 12.9 + i as f64 * 0.001, 77.6))
                .collect(),
        );

        let result = handler(source.clone()).handle(at(12.9, 77.6)).await.unwrap();

        let NearbyFacilities::Found(places) = result else {
            panic!("expected facilities");
        };
        assert_eq!(places.len(), 5);
        assert_eq!(source.queries()[0].radius_m, 2000);
    }

    #[tokio::test]
    async fn missing_half_of_location_is_rejected() {
        let query = FindNearbyFacilitiesQuery {
            lat: Some(12.9),
            ..Default::default()
        };

        let result = handler(StaticPoiSource::empty()).handle(query).await;

        assert_eq!(result, Err(NearbyError::MissingLocation));
        assert_eq!(NearbyError::MissingLocation.to_string(), "lat and lon required");
    }

    #[tokio::test]
    async fn out_of_range_location_is_rejected() {
        let result = handler(StaticPoiSource::empty()).handle(at(91.0, 0.0)).await;

        assert!(matches!(result, Err(NearbyError::InvalidLocation(_))));
    }

    #[tokio::test]
    async fn radius_and_limit_are_bounded() {
        let h = handler(StaticPoiSource::empty());

        let too_far = FindNearbyFacilitiesQuery {
            radius_m: Some(50_001),
            ..at(0.0, 0.0)
        };
        assert!(matches!(
            h.handle(too_far).await,
            Err(NearbyError::InvalidRadius { actual: 50_001, .. })
        ));

        let zero_limit = FindNearbyFacilitiesQuery {
            limit: Some(0),
            ..at(0.0, 0.0)
        };
        assert!(matches!(
            h.handle(zero_limit).await,
            Err(NearbyError::InvalidLimit { actual: 0, .. })
        ));
    }
}
