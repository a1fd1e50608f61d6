//! Nearbite HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use nearbite::cache::MokaCacheBackend;
use nearbite::config::Config;
use nearbite::gateway::{HandlerState, create_router_with_state};
use nearbite::service::RestaurantService;
use nearbite::store::InMemoryStore;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        search_mode = %config.search_mode,
        cache_enabled = config.cache_enabled,
        "Nearbite starting"
    );

    let store = match &config.data_path {
        Some(path) => InMemoryStore::load_json(path)?,
        None => {
            tracing::warn!("No NEARBITE_DATA_PATH configured, starting with an empty catalog");
            InMemoryStore::new()
        }
    };

    let cache = MokaCacheBackend::with_capacity(config.cache_capacity);
    if !config.cache_enabled {
        tracing::info!("Geo cache disabled, close-by lookups will always scan the store");
        cache.set_available(false);
    }

    let service = RestaurantService::with_settings(
        Arc::new(cache),
        Arc::new(store),
        config.service_settings(),
    );
    let app = create_router_with_state(HandlerState::new(Arc::new(service)));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Nearbite shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
