//! POI Source Port - geographic point-of-interest lookup.
//!
//! Elements mirror the Overpass JSON shape: nodes carry their own
//! coordinates, ways and relations may carry a `center` or `bounds`, and
//! any of them may carry neither.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

use crate::domain::facility::FacilityCategory;
use crate::domain::foundation::GeoPoint;

/// Port for amenity searches around a point.
#[async_trait]
pub trait PoiSource: Send + Sync {
    async fn find_amenities(&self, query: &AmenityQuery) -> Result<Vec<PoiElement>, PoiError>;
}

/// Radius search for a set of amenity categories.
#[derive(Debug, Clone, PartialEq)]
pub struct AmenityQuery {
    pub center: GeoPoint,
    pub radius_m: u32,
    pub categories: Vec<FacilityCategory>,
}

impl AmenityQuery {
    /// Query for every searchable care category.
    pub fn care_facilities(center: GeoPoint, radius_m: u32) -> Self {
        Self {
            center,
            radius_m,
            categories: FacilityCategory::SEARCHABLE.to_vec(),
        }
    }
}

/// Geometry type of a raw element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Node,
    Way,
    Relation,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Bounds {
    pub minlat: f64,
    pub minlon: f64,
    pub maxlat: f64,
    pub maxlon: f64,
}

/// One raw element as returned by the source.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PoiElement {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub id: i64,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub center: Option<LatLon>,
    pub bounds: Option<Bounds>,
    #[serde(default)]
    pub tags: Option<HashMap<String, String>>,
}

impl PoiElement {
    /// A node with its own coordinates.
    pub fn node(id: i64, lat: f64, lon: f64) -> Self {
        Self {
            kind: ElementKind::Node,
            id,
            lat: Some(lat),
            lon: Some(lon),
            center: None,
            bounds: None,
            tags: None,
        }
    }

    /// A way with no geometry attached yet.
    pub fn way(id: i64) -> Self {
        Self {
            kind: ElementKind::Way,
            id,
            lat: None,
            lon: None,
            center: None,
            bounds: None,
            tags: None,
        }
    }

    pub fn with_center(mut self, lat: f64, lon: f64) -> Self {
        self.center = Some(LatLon { lat, lon });
        self
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Representative location, or `None` when it cannot be resolved.
    ///
    /// Nodes use their own coordinates; other kinds use `center`, then the
    /// midpoint of `bounds`.
    pub fn location(&self) -> Option<GeoPoint> {
        let (lat, lon) = match self.kind {
            ElementKind::Node => (self.lat?, self.lon?),
            _ => match (self.center, self.bounds) {
                (Some(c), _) => (c.lat, c.lon),
                (None, Some(b)) => ((b.minlat + b.maxlat) / 2.0, (b.minlon + b.maxlon) / 2.0),
                (None, None) => return None,
            },
        };
        GeoPoint::new(lat, lon).ok()
    }

    pub fn tags(&self) -> HashMap<String, String> {
        self.tags.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PoiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("POI source returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse POI response: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_uses_own_coordinates() {
        let el = PoiElement::node(1, 12.0, 77.0);
        assert_eq!(el.location(), Some(GeoPoint::new(12.0, 77.0).unwrap()));
    }

    #[test]
    fn way_uses_center_then_bounds() {
        let centered = PoiElement::way(2).with_center(10.0, 20.0);
        assert_eq!(centered.location(), Some(GeoPoint::new(10.0, 20.0).unwrap()));

        let json = r#"{"type":"relation","id":3,"bounds":{"minlat":10.0,"minlon":20.0,"maxlat":12.0,"maxlon":22.0}}"#;
        let bounded: PoiElement = serde_json::from_str(json).unwrap();
        assert_eq!(bounded.location(), Some(GeoPoint::new(11.0, 21.0).unwrap()));
    }

    #[test]
    fn missing_geometry_is_unresolvable() {
        assert_eq!(PoiElement::way(4).location(), None);

        let json = r#"{"type":"node","id":5,"tags":{"amenity":"clinic"}}"#;
        let node: PoiElement = serde_json::from_str(json).unwrap();
        assert_eq!(node.location(), None);
        assert_eq!(node.tags().get("amenity").map(String::as_str), Some("clinic"));
    }

    #[test]
    fn null_tags_deserialize_as_empty() {
        let json = r#"{"type":"node","id":6,"lat":1.0,"lon":2.0,"tags":null}"#;
        let node: PoiElement = serde_json::from_str(json).unwrap();
        assert!(node.tags().is_empty());
    }

    #[test]
    fn unknown_element_kind_is_tolerated() {
        let json = r#"{"type":"area","id":7}"#;
        let el: PoiElement = serde_json::from_str(json).unwrap();
        assert_eq!(el.kind, ElementKind::Other);
    }

    #[test]
    fn care_query_searches_all_categories() {
        let q = AmenityQuery::care_facilities(GeoPoint::new(0.0, 0.0).unwrap(), 2000);
        assert_eq!(q.categories.len(), 3);
        assert_eq!(q.radius_m, 2000);
    }
}
