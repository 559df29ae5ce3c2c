mod api;
mod database;
mod dto;
mod error;
mod models;
mod repo;
mod schema;
mod settings;

use std::net::SocketAddr;

use axum::{serve::Serve, Router};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::info;

use api::build_api;
use database::{create_db_pool, DatabaseBookRepo};

pub use database::{run_migrations, MigrationError};
pub use settings::{Settings, SettingsError};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("failed to create DB connection pool: {0}")]
    Pool(#[from] diesel_async::pooled_connection::PoolError),
    #[error("failed to migrate the DB: {0}")]
    Migration(#[from] MigrationError),
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub async fn start_server(
    settings: Settings,
) -> Result<(SocketAddr, Serve<TcpListener, Router, Router>), StartupError> {
    if settings.run_migrations {
        let applied = run_migrations(settings.database_url.clone()).await?;
        info!("Executed {} DB migrations", applied);
    }

    let pool = create_db_pool(settings.database_url, settings.max_connections).await?;
    let repo = DatabaseBookRepo::new(pool);

    let router = build_api(repo);

    let listener = TcpListener::bind(settings.bind_addr).await?;
    let local_addr = listener.local_addr()?;
    info!("Listening on {}", local_addr);

    Ok((local_addr, axum::serve(listener, router)))
}
