//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SUBSCRIPTION_BRIDGE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use subscription_bridge::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Sandbox gateway: {}", config.gateway.is_sandbox());
//! ```

mod error;
mod gateway;
mod telemetry;

pub use error::{ConfigError, ValidationError};
pub use gateway::{GatewayConfig, GatewayEnvironment};
pub use telemetry::TelemetryConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Payment gateway credentials
    pub gateway: GatewayConfig,

    /// Log output settings
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SUBSCRIPTION_BRIDGE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `SUBSCRIPTION_BRIDGE__GATEWAY__MERCHANT_ID=...` -> `gateway.merchant_id`
    /// - `SUBSCRIPTION_BRIDGE__TELEMETRY__JSON=true` -> `telemetry.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or cannot be
    /// parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SUBSCRIPTION_BRIDGE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration sections
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.gateway.validate()?;
        self.telemetry.validate()?;
        Ok(())
    }

    /// Check if the gateway points at the production environment
    pub fn is_production(&self) -> bool {
        self.gateway.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "SUBSCRIPTION_BRIDGE__GATEWAY__MERCHANT_ID",
        "SUBSCRIPTION_BRIDGE__GATEWAY__PUBLIC_KEY",
        "SUBSCRIPTION_BRIDGE__GATEWAY__PRIVATE_KEY",
        "SUBSCRIPTION_BRIDGE__GATEWAY__ENVIRONMENT",
        "SUBSCRIPTION_BRIDGE__TELEMETRY__LOG_LEVEL",
        "SUBSCRIPTION_BRIDGE__TELEMETRY__JSON",
    ];

    fn set_minimal_env() {
        env::set_var("SUBSCRIPTION_BRIDGE__GATEWAY__MERCHANT_ID", "merchant");
        env::set_var("SUBSCRIPTION_BRIDGE__GATEWAY__PUBLIC_KEY", "public");
        env::set_var("SUBSCRIPTION_BRIDGE__GATEWAY__PRIVATE_KEY", "private");
    }

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.gateway.merchant_id, "merchant");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let config = AppConfig::load().unwrap();
        clear_env();

        assert!(config.gateway.is_sandbox());
        assert!(!config.is_production());
        assert_eq!(config.telemetry.log_level, "info");
        assert!(!config.telemetry.json);
    }

    #[test]
    fn test_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("SUBSCRIPTION_BRIDGE__GATEWAY__ENVIRONMENT", "production");
        env::set_var("SUBSCRIPTION_BRIDGE__TELEMETRY__LOG_LEVEL", "debug");
        env::set_var("SUBSCRIPTION_BRIDGE__TELEMETRY__JSON", "true");
        let config = AppConfig::load().unwrap();
        clear_env();

        assert!(config.is_production());
        assert_eq!(config.telemetry.log_level, "debug");
        assert!(config.telemetry.json);
    }

    #[test]
    fn test_missing_private_key_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("SUBSCRIPTION_BRIDGE__GATEWAY__MERCHANT_ID", "merchant");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
