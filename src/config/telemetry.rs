//! Telemetry configuration

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::error::ValidationError;

/// Log output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// Tracing filter directive (e.g. `info,subscription_bridge=debug`)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

impl TelemetryConfig {
    /// Validate the filter directive
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.log_level.trim().is_empty() {
            return Err(ValidationError::MissingRequired("TELEMETRY__LOG_LEVEL"));
        }
        EnvFilter::try_new(&self.log_level)
            .map(|_| ())
            .map_err(|_| ValidationError::InvalidLogFilter(self.log_level.clone()))
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
