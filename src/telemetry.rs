use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over the configured filter when set.
pub fn init(logging: &LoggingConfig) {
    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    let registry = tracing_subscriber::registry().with(filter_layer);

    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .compact(),
            )
            .init();
    }
}
