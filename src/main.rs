use std::sync::Arc;

use pcos_tracker::api::start_server;
use pcos_tracker::store::RecordStore;
use pcos_tracker::{config, init_tracing};

#[tokio::main]
async fn main() {
    init_tracing();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let store = Arc::new(RecordStore::new());
    store.seed_demo_users();

    let mut server = match start_server(store, config::bind_addr()).await {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };

    tracing::info!("Server running on port {}", server.addr.port());

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }

    server.shutdown();
    // Let in-flight requests drain before the process exits
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
}
