//! Framework registry server: reads config from the environment (and `.env`), prepares
//! the store, and serves the framework API.
//!
//! Run from repo root: `cargo run -p jsframework-server`
//! Without a database: `STORE_BACKEND=memory cargo run -p jsframework-server`

use jsframework_registry::{
    app, ensure_database_exists, ensure_frameworks_table, AppConfig, AppState, FrameworkService,
    FrameworkStore, InMemoryFrameworkStore, PgFrameworkStore, StoreBackend,
};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("jsframework_registry=info,tower_http=info")
            }),
        )
        .init();

    let config = AppConfig::from_env()?;
    let store: Arc<dyn FrameworkStore> = match config.store_backend {
        StoreBackend::Postgres => {
            ensure_database_exists(&config.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .connect(&config.database_url)
                .await?;
            ensure_frameworks_table(&pool, &config.schema).await?;
            Arc::new(PgFrameworkStore::new(pool, config.schema.clone()))
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory store; records are lost on exit");
            Arc::new(InMemoryFrameworkStore::new())
        }
    };

    let state = AppState::new(FrameworkService::new(store));
    let router = app(state, config.request_body_limit);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutting down");
    }
}
