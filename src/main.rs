mod config;
mod controller;
mod data;
mod domain;
mod dto;
mod error;
mod router;
mod service;
mod startup;
mod state;
mod util;

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::ensure_indexes(&db).await?;

    tracing::info!("Connected to database '{}'", db.name());

    let app = router::router(AppState::new(db));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .map_err(|err| AppError::InternalError(format!("Failed to bind port: {}", err)))?;

    tracing::info!("Application started and listening on port: {}", config.port);

    axum::serve(listener, app)
        .await
        .map_err(|err| AppError::InternalError(format!("Server error: {}", err)))?;

    Ok(())
}
