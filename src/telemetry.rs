//! Tracing subscriber setup.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::TelemetryConfig;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured directive when set. Calling this more
/// than once is harmless; later calls leave the first subscriber in place.
pub fn init_tracing(config: &TelemetryConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let text_layer = (!config.json).then(|| fmt::layer().with_target(true));
    let json_layer = config.json.then(|| {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(text_layer)
        .with(json_layer)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        let config = TelemetryConfig::default();
        init_tracing(&config);
        init_tracing(&TelemetryConfig {
            json: true,
            ..config
        });
        tracing::info!("tracing initialised");
    }
}
