use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use stockroom::infra::config;
use stockroom::transport;
use stockroom::{HtmlRenderer, PgStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("connecting to the inventory database");
    let store = Arc::new(PgStore::connect().await?);
    tracing::info!("database ready, schema prepared");

    let app_state = transport::http::AppState::new(store, Arc::new(HtmlRenderer));
    let app = transport::http::create_router(app_state).layer(TraceLayer::new_for_http());

    let addr = config::http_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "inventory server listening");

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
        }
    }

    Ok(())
}
