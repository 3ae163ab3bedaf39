//! Facility - a nearby hospital, clinic or pharmacy.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use super::distance::distance_m;
use super::opening_hours::OpeningHours;
use crate::domain::foundation::GeoPoint;

/// Amenity category of a facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FacilityCategory {
    Hospital,
    Clinic,
    Pharmacy,
    Unknown,
}

impl FacilityCategory {
    /// Categories the locator searches for.
    pub const SEARCHABLE: [FacilityCategory; 3] = [
        FacilityCategory::Hospital,
        FacilityCategory::Clinic,
        FacilityCategory::Pharmacy,
    ];

    /// Parses an `amenity` tag value; anything else is `Unknown`.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag.map(str::trim) {
            Some(t) if t.eq_ignore_ascii_case("hospital") => FacilityCategory::Hospital,
            Some(t) if t.eq_ignore_ascii_case("clinic") => FacilityCategory::Clinic,
            Some(t) if t.eq_ignore_ascii_case("pharmacy") => FacilityCategory::Pharmacy,
            _ => FacilityCategory::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FacilityCategory::Hospital => "hospital",
            FacilityCategory::Clinic => "clinic",
            FacilityCategory::Pharmacy => "pharmacy",
            FacilityCategory::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FacilityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized point of interest, immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Facility {
    pub source_id: i64,
    pub name: String,
    pub category: FacilityCategory,
    pub location: GeoPoint,
    pub distance_m: u64,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub opening_hours: OpeningHours,
    pub map_url: String,
}

impl Facility {
    /// Builds a facility from source tags, measured from `origin` at `now`.
    pub fn from_tags(
        source_id: i64,
        location: GeoPoint,
        tags: &HashMap<String, String>,
        origin: &GeoPoint,
        now: DateTime<Utc>,
    ) -> Self {
        let tag = |key: &str| tags.get(key).map(String::as_str).filter(|v| !v.is_empty());

        let name = tag("name")
            .or_else(|| tag("operator"))
            .unwrap_or("Unknown")
            .to_string();

        Self {
            source_id,
            name,
            category: FacilityCategory::from_tag(tag("amenity")),
            location,
            distance_m: distance_m(origin, &location),
            phone: tag("phone").or_else(|| tag("contact:phone")).map(String::from),
            website: tag("website").or_else(|| tag("contact:website")).map(String::from),
            opening_hours: OpeningHours::evaluate(tag("opening_hours"), now),
            map_url: location.directions_url(),
        }
    }
}

/// Orders facilities nearest first and keeps at most `limit`.
///
/// The sort is stable, so equidistant facilities keep source order.
pub fn rank_by_proximity(mut facilities: Vec<Facility>, limit: usize) -> Vec<Facility> {
    facilities.sort_by_key(|f| f.distance_m);
    facilities.truncate(limit);
    facilities
}

static NEARBY_KEYWORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:near|nearest|nearby|closest|where (?:is|are).+hospital|find.+hospital|hospital near|clinic near|pharmacy near|medical store|chemist)\b",
    )
    .expect("valid regex")
});

/// True when the message asks for a nearby facility.
pub fn wants_nearby_facility(text: &str) -> bool {
    NEARBY_KEYWORDS.is_match(text)
}
