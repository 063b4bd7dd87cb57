//! Category Service Library
//!
//! This crate serves categories over HTTP (`GET /v1/category/{id}`).
//! It can be run as a standalone service or embedded in the combined binary.

pub mod config;
pub mod handlers;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

use std::sync::Arc;

use tracing::info;

use common::{Database, ServiceLifecycle};

use crate::config::CategoryServiceConfig;
use crate::repository::CategoryStore;
use crate::routes::create_router;
use crate::service::CategoryManager;
use crate::state::AppState;

/// Run the category service until SIGINT/SIGTERM, then drain.
pub async fn run_embedded(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CategoryServiceConfig::from_env();
    config.server.host = host.to_string();
    config.server.port = port;
    run_server_with_config(config).await
}

/// Run the HTTP server with the given configuration.
async fn run_server_with_config(
    config: CategoryServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database
    let db = Database::connect(&config.database).await?;

    // Create repository and service
    let category_repo = Arc::new(CategoryStore::new(db.get_connection()));
    let category_service = Arc::new(CategoryManager::new(category_repo));

    // Build router
    let app = create_router(AppState::new(category_service));

    info!("Starting category service");
    let mut lifecycle = ServiceLifecycle::from_config(&config.server)?;
    let signal = lifecycle.start(app).await?;

    signal.recv().await;
    info!("Shutting down category service");
    lifecycle.shutdown().await?;
    info!("Gracefully shut down category service");

    Ok(())
}
