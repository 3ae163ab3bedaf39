//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! of the triage domain.

mod errors;
mod geo_point;

pub use errors::ValidationError;
pub use geo_point::GeoPoint;
