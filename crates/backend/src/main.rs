use std::sync::Arc;

use backend::routes::{configure_routes, AppState};
use backend::shared::catalog_api::HttpCatalogGateway;
use backend::shared::config;
use backend::system;
use backend::usecases::u501_resolve_catalog_path::ResolveExecutor;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = config::load_config()?;
    tracing::info!(
        "Catalog API: {} (timeout {}s)",
        config.catalog.api_base_url,
        config.catalog.request_timeout_secs
    );

    let gateway = HttpCatalogGateway::from_config(&config.catalog)?;
    let executor = ResolveExecutor::new(Arc::new(gateway), config.site_info());
    let app = configure_routes(Arc::new(AppState::new(executor)));

    let addr = config.server.socket_addr()?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
