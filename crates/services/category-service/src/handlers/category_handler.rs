//! Category handlers.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};

use common::{AppResult, ValidatedPath};
use domain::{Category, ErrorMessage};

use crate::state::AppState;

/// Create category routes
pub fn category_routes() -> Router<AppState> {
    Router::new().route("/category/:id", get(get_category))
}

/// Get category by ID
#[utoipa::path(
    get,
    path = "/v1/category/{id}",
    tag = "Categories",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = Category),
        (status = 400, description = "Malformed category id", body = ErrorMessage),
        (status = 404, description = "Category not found", body = ErrorMessage),
        (status = 500, description = "Internal error", body = ErrorMessage)
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<Json<Category>> {
    tracing::debug!("GetCategoryById: {}", id);
    let category = state.category_service.get_category(id).await?;
    Ok(Json(category))
}
