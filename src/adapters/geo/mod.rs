//! POI Source Adapters.
//!
//! - `OverpassSource` - OpenStreetMap Overpass API
//! - `StaticPoiSource` - Canned elements for testing

mod overpass_source;
mod static_poi_source;

pub use overpass_source::{build_query, OverpassConfig, OverpassSource};
pub use static_poi_source::StaticPoiSource;
