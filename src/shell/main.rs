use std::sync::Arc;

use anyhow::Context;
use timesheets::shared::infrastructure::database::in_memory::InMemoryDatabase;
use timesheets::shell::{config::AppConfig, http, state::AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    let database = Arc::new(InMemoryDatabase::new());
    let app = http::router(AppState::new(database));

    let address = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    tracing::info!(%address, "timesheets listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
