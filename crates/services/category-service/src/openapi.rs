//! OpenAPI documentation.

use axum::Json;
use utoipa::OpenApi;

use domain::{Category, ErrorMessage};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(crate::handlers::category_handler::get_category),
    components(schemas(Category, ErrorMessage)),
    tags((name = "Categories", description = "Category lookup endpoints"))
)]
pub struct ApiDoc;

/// Serve the OpenAPI document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
