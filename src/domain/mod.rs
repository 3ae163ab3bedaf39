//! Domain layer containing triage logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (coordinates, validation errors)
//! - `triage` - Urgency classification, prompt composition and escalation
//! - `facility` - Nearby care locations, distances and opening hours
//! - `medicine` - Medicine name extraction and price comparison

pub mod facility;
pub mod foundation;
pub mod medicine;
pub mod triage;
