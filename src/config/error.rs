//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid timeout: {0}")]
    InvalidTimeout(&'static str),

    #[error("Invalid URL: {0} must start with http:// or https://")]
    InvalidUrl(&'static str),

    #[error("Invalid search radius: {0} must be within 1..=50000 meters")]
    InvalidRadius(&'static str),

    #[error("Invalid result limit: {0} must be within 1..=50")]
    InvalidLimit(&'static str),

    #[error("Invalid log format: {0}")]
    InvalidLogFormat(String),
}

pub(crate) fn require_http_url(value: &str, name: &'static str) -> Result<(), ValidationError> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ValidationError::InvalidUrl(name))
    }
}

pub(crate) fn require_non_empty(value: &str, name: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingRequired(name))
    } else {
        Ok(())
    }
}

pub(crate) fn require_timeout(secs: u64, name: &'static str) -> Result<(), ValidationError> {
    if secs == 0 || secs > 300 {
        Err(ValidationError::InvalidTimeout(name))
    } else {
        Ok(())
    }
}
