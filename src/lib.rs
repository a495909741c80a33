pub mod api;
pub mod config;
pub mod models;
pub mod report; // Report Aggregator
pub mod store; // Record Store (in-memory)
pub mod vocabulary; // Recognized symptom vocabulary + validation

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` overrides the default filter when set.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
