//! Route configuration.

use axum::{routing::get, Router};

use domain::API_PREFIX;

use crate::handlers::category_routes;
use crate::openapi::openapi_json;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let api = category_routes().route("/openapi.json", get(openapi_json));

    Router::new().nest(API_PREFIX, api).with_state(state)
}
