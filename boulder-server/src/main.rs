mod routes;
mod singleton;
mod state;

use anyhow::Result;
use axum::Router;
use boulder_core::BoulderConfig;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = BoulderConfig::load()?;
    let store = config.store();

    // Ensure only one instance is serving this store
    let _lock = singleton::acquire_lock(store.path())?;

    // Fail early on a malformed store rather than on the first request
    let count = store.list_appointments()?.len();
    info!(path = %store.path().display(), appointments = count, "opened store");

    let state = AppState::new(&config, store);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::appointments::router())
        .merge(routes::calendar::router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.server_port));
    info!("boulder-server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
