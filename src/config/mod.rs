//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ARIES` prefix and nested values use double underscores as separators.
//! Every value has a default, so the service starts with an empty environment.
//!
//! # Example
//!
//! ```no_run
//! use aries_companion::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod error;
mod geo;
mod llm;
mod persona;
mod pricing;
mod server;
mod speech;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use geo::{GeoConfig, MAX_LIMIT, MAX_RADIUS_M};
pub use llm::{LlmConfig, DEFAULT_FALLBACK_REPLY};
pub use persona::PersonaConfig;
pub use pricing::{PricingConfig, RetailSourceConfig};
pub use server::{LogFormat, ServerConfig};
pub use speech::SpeechConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (bind address, logging, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Language model backend (Ollama-style generate endpoint)
    #[serde(default)]
    pub llm: LlmConfig,

    /// Assistant name and base persona
    #[serde(default)]
    pub persona: PersonaConfig,

    /// Speech synthesis backend
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Facility search (Overpass endpoint and search profiles)
    #[serde(default)]
    pub geo: GeoConfig,

    /// Retail price sources
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Conversation log
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ARIES` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ARIES__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `ARIES__LLM__MODEL=llama3` -> `llm.model = llama3`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ARIES")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid value found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.llm.validate()?;
        self.persona.validate()?;
        self.speech.validate()?;
        self.geo.validate()?;
        self.pricing.validate()?;
        self.storage.validate()?;
        Ok(())
    }
}
