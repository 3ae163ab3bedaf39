//! Geographic coordinate value object (WGS84 degrees).

use serde::Serialize;
use std::fmt;

use super::ValidationError;

/// A validated latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    /// Creates a coordinate, rejecting non-finite or out-of-range values.
    pub fn new(lat: f64, lon: f64) -> Result<Self, ValidationError> {
        check_axis("lat", lat, 90.0)?;
        check_axis("lon", lon, 180.0)?;
        Ok(Self { lat, lon })
    }

    /// Builds a coordinate only when both halves are present.
    ///
    /// A missing half means "no location supplied", which is not an error.
    pub fn from_optional(
        lat: Option<f64>,
        lon: Option<f64>,
    ) -> Result<Option<Self>, ValidationError> {
        match (lat, lon) {
            (Some(lat), Some(lon)) => Self::new(lat, lon).map(Some),
            _ => Ok(None),
        }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Map-navigation link with this point as the destination.
    pub fn directions_url(&self) -> String {
        format!(
            "https://www.google.com/maps/dir/?api=1&destination={},{}",
            self.lat, self.lon
        )
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

fn check_axis(field: &str, value: f64, bound: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::invalid_format(field, "not a finite number"));
    }
    if !(-bound..=bound).contains(&value) {
        return Err(ValidationError::out_of_range(field, -bound, bound, value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_coordinates() {
        let point = GeoPoint::new(12.9716, 77.5946).unwrap();
        assert_eq!(point.lat(), 12.9716);
        assert_eq!(point.lon(), 77.5946);
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        let err = GeoPoint::new(90.5, 0.0).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
    }

    #[test]
    fn rejects_out_of_range_longitude() {
        assert!(GeoPoint::new(0.0, -180.01).is_err());
        assert!(GeoPoint::new(0.0, 180.0).is_ok());
    }

    #[test]
    fn rejects_non_finite_values() {
        let err = GeoPoint::new(f64::NAN, 0.0).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
        assert!(GeoPoint::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn from_optional_requires_both_halves() {
        assert_eq!(GeoPoint::from_optional(Some(1.0), None).unwrap(), None);
        assert_eq!(GeoPoint::from_optional(None, Some(1.0)).unwrap(), None);
        assert!(GeoPoint::from_optional(Some(1.0), Some(2.0)).unwrap().is_some());
        assert!(GeoPoint::from_optional(Some(100.0), Some(2.0)).is_err());
    }

    #[test]
    fn directions_url_embeds_destination() {
        let point = GeoPoint::new(12.5, 77.25).unwrap();
        assert_eq!(
            point.directions_url(),
            "https://www.google.com/maps/dir/?api=1&destination=12.5,77.25"
        );
    }
}
