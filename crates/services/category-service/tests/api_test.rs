//! HTTP tests for the category endpoints.
//!
//! These tests use a stub service to exercise routing and status mapping
//! without a database.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use category_service_lib::routes::create_router;
use category_service_lib::service::CategoryService;
use category_service_lib::state::AppState;
use common::{AppError, AppResult};
use domain::{Category, ErrorMessage};

/// Stub service: id 7 exists, id 13 breaks, everything else is missing.
struct StubCategoryService;

#[async_trait]
impl CategoryService for StubCategoryService {
    async fn get_category(&self, id: i32) -> AppResult<Category> {
        match id {
            7 => Ok(Category::new(7, "Books")),
            13 => Err(AppError::internal("database unavailable")),
            _ => Err(AppError::category_not_found("category not found")),
        }
    }
}

fn app() -> Router {
    create_router(AppState::new(Arc::new(StubCategoryService)))
}

async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn test_get_category_ok() {
    let (status, body) = get("/v1/category/7").await;

    assert_eq!(status, StatusCode::OK);
    let category: Category = serde_json::from_slice(&body).unwrap();
    assert_eq!(category, Category::new(7, "Books"));
}

#[tokio::test]
async fn test_get_category_not_found() {
    let (status, body) = get("/v1/category/8").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: ErrorMessage = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.message, "category not found");
}

#[tokio::test]
async fn test_get_category_internal_error() {
    let (status, body) = get("/v1/category/13").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error: ErrorMessage = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.message, "database unavailable");
}

#[tokio::test]
async fn test_get_category_non_numeric_id_is_json_400() {
    let (status, body) = get("/v1/category/abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorMessage = serde_json::from_slice(&body).unwrap();
    assert!(error.message.contains("abc"));
}

#[tokio::test]
async fn test_routes_are_mounted_under_v1() {
    let (status, _) = get("/category/7").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_openapi_document_lists_category_path() {
    let (status, body) = get("/v1/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(doc["paths"].get("/v1/category/{id}").is_some());
}
