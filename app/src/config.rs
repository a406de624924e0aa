//! Configuration management for the Smooth Business app
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with SB_ prefix

use std::time::Duration;

use config::{ConfigError, Environment, File};
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// UI timing configuration
    pub ui: UiConfig,

    /// Mock seed data configuration
    pub seed: SeedConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    /// Delay before the post-create redirect fires, in milliseconds
    pub redirect_delay_ms: u64,

    /// Delay between sign-in success and the dashboard, in milliseconds
    pub sign_in_delay_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    /// Whether to load the demo businesses and reviews at startup
    pub enabled: bool,
}

impl UiConfig {
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    pub fn sign_in_delay(&self) -> Duration {
        Duration::from_millis(self.sign_in_delay_ms)
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> AppResult<Self> {
        Self::build().map_err(|e| AppError::Configuration(e.to_string()))
    }

    fn build() -> Result<Self, ConfigError> {
        let environment = std::env::var("SB_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("ui.redirect_delay_ms", 2000)?
            .set_default("ui.sign_in_delay_ms", 1500)?
            .set_default("seed.enabled", true)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (SB_ prefix)
            .add_source(
                Environment::with_prefix("SB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            ui: UiConfig {
                redirect_delay_ms: 2000,
                sign_in_delay_ms: 1500,
            },
            seed: SeedConfig { enabled: true },
        }
    }
}
