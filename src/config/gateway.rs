//! Payment gateway configuration

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer};

use super::error::ValidationError;

/// Processor environment the credentials belong to
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GatewayEnvironment {
    #[default]
    Sandbox,
    Production,
}

/// Payment gateway configuration (merchant credentials)
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Processor environment
    #[serde(default)]
    pub environment: GatewayEnvironment,

    /// Merchant account identifier
    #[serde(default)]
    pub merchant_id: String,

    /// Public API key
    #[serde(default)]
    pub public_key: String,

    /// Private API key
    #[serde(deserialize_with = "deserialize_secret")]
    pub private_key: SecretString,
}

impl GatewayConfig {
    /// Check if using the sandbox environment
    pub fn is_sandbox(&self) -> bool {
        self.environment == GatewayEnvironment::Sandbox
    }

    /// Check if using the production environment
    pub fn is_production(&self) -> bool {
        self.environment == GatewayEnvironment::Production
    }

    /// Validate gateway configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.merchant_id.trim().is_empty() {
            return Err(ValidationError::MissingRequired("GATEWAY__MERCHANT_ID"));
        }
        if self.public_key.trim().is_empty() {
            return Err(ValidationError::MissingRequired("GATEWAY__PUBLIC_KEY"));
        }
        if self.private_key.expose_secret().trim().is_empty() {
            return Err(ValidationError::MissingRequired("GATEWAY__PRIVATE_KEY"));
        }
        Ok(())
    }
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}
