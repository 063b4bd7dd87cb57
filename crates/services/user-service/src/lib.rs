//! User Service Library
//!
//! This crate manages users and answers `GET /v1/user/{id}` by joining the
//! local user row with its category fetched from category-service.
//! It can be run as a standalone service or embedded in the combined binary.

pub mod client;
pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

use std::sync::Arc;

use tracing::info;

use common::{Database, ServiceLifecycle};

use crate::client::HttpCategoryClient;
use crate::config::UserServiceConfig;
use crate::repository::UserStore;
use crate::routes::create_router;
use crate::service::UserManager;
use crate::state::AppState;

/// Run the user service until SIGINT/SIGTERM, then drain.
pub async fn run_embedded(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = UserServiceConfig::from_env();
    config.server.host = host.to_string();
    config.server.port = port;
    run_server_with_config(config).await
}

/// Run the HTTP server with the given configuration.
async fn run_server_with_config(config: UserServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect(&config.database).await?;

    info!(
        "Category service at {} (timeout {:?})",
        config.category_service.base_url,
        config.category_service.request_timeout()
    );
    let category_client = Arc::new(HttpCategoryClient::new(&config.category_service)?);
    let user_repo = Arc::new(UserStore::new(db.get_connection()));
    let user_service = Arc::new(UserManager::new(user_repo, category_client));

    let app = create_router(AppState::new(user_service));

    info!("Starting user service");
    let mut lifecycle = ServiceLifecycle::from_config(&config.server)?;
    let signal = lifecycle.start(app).await?;

    signal.recv().await;
    info!("Shutting down user service");
    lifecycle.shutdown().await?;
    info!("Gracefully shut down user service");

    Ok(())
}
