//! OpenAPI documentation.

use axum::Json;
use utoipa::OpenApi;

use domain::{ErrorMessage, User, UserWithCategory};

use crate::handlers::CreateUserRequest;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::get_user_with_category,
    ),
    components(schemas(User, UserWithCategory, CreateUserRequest, ErrorMessage)),
    tags((name = "Users", description = "User management and category lookup"))
)]
pub struct ApiDoc;

/// Serve the OpenAPI document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
