//! Aries Companion - Conversational health triage assistant
//!
//! Classifies the urgency of each message, composes a guided reply through a
//! local language model, points users at nearby hospitals, clinics and
//! pharmacies, and compares retail medicine prices.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
