//! FacilityLocator - shared nearby-facility search used by several handlers.
//!
//! Turns raw POI elements into ranked [`Facility`] values. Source failures
//! are logged and reported as [`NearbyFacilities::Unavailable`]; they never
//! surface as errors.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::facility::{rank_by_proximity, Facility};
use crate::domain::foundation::GeoPoint;
use crate::ports::{AmenityQuery, PoiSource};

/// Radius and result cap for one kind of search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchProfile {
    pub radius_m: u32,
    pub limit: usize,
}

impl SearchProfile {
    pub fn new(radius_m: u32, limit: usize) -> Self {
        Self { radius_m, limit }
    }
}

/// Outcome of a facility search.
#[derive(Debug, Clone, PartialEq)]
pub enum NearbyFacilities {
    /// Nearest first, at most the profile's limit. May be empty.
    Found(Vec<Facility>),
    /// The POI source could not be queried.
    Unavailable { error: String },
}

impl NearbyFacilities {
    pub fn nearest(&self) -> Option<&Facility> {
        match self {
            NearbyFacilities::Found(places) => places.first(),
            NearbyFacilities::Unavailable { .. } => None,
        }
    }
}

#[derive(Clone)]
pub struct FacilityLocator {
    source: Arc<dyn PoiSource>,
}

impl FacilityLocator {
    pub fn new(source: Arc<dyn PoiSource>) -> Self {
        Self { source }
    }

    /// Searches around `center`, evaluating opening hours at `now`.
    pub async fn locate(
        &self,
        center: GeoPoint,
        profile: SearchProfile,
        now: DateTime<Utc>,
    ) -> NearbyFacilities {
        let query = AmenityQuery::care_facilities(center, profile.radius_m);

        let elements = match self.source.find_amenities(&query).await {
            Ok(elements) => elements,
            Err(e) => {
                tracing::warn!(error = %e, %center, "Facility lookup failed");
                return NearbyFacilities::Unavailable {
                    error: e.to_string(),
                };
            }
        };

        let facilities = elements
            .iter()
            .filter_map(|el| {
                let location = el.location()?;
                Some(Facility::from_tags(el.id, location, &el.tags(), &center, now))
            })
            .collect();

        NearbyFacilities::Found(rank_by_proximity(facilities, profile.limit))
    }
}
