//! User handlers.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use common::{AppResult, ValidatedPath};
use domain::{ErrorMessage, User, UserWithCategory};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// User creation request with validation
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// Display name
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    #[schema(example = "Alice")]
    pub name: String,
    /// Contact email, stored as given
    #[schema(example = "alice@example.com")]
    pub email: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user", get(list_users).post(create_user))
        .route("/user/:id", get(get_user_with_category))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/v1/user",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 400, description = "Invalid request body", body = ErrorMessage),
        (status = 500, description = "Internal error", body = ErrorMessage)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> AppResult<Json<User>> {
    tracing::debug!("CreateUser: {}", req.name);
    let id = state
        .user_service
        .create_user(req.name.clone(), req.email.clone())
        .await?;
    Ok(Json(User::new(id, req.name, req.email)))
}

/// List all users
#[utoipa::path(
    get,
    path = "/v1/user",
    tag = "Users",
    responses(
        (status = 200, description = "All users, possibly empty", body = Vec<User>),
        (status = 500, description = "Internal error", body = ErrorMessage)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

/// Get a user together with its category name
#[utoipa::path(
    get,
    path = "/v1/user/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User with category", body = UserWithCategory),
        (status = 400, description = "Malformed user id", body = ErrorMessage),
        (status = 404, description = "User or category not found", body = ErrorMessage),
        (status = 500, description = "Internal error", body = ErrorMessage),
        (status = 503, description = "Category service unavailable", body = ErrorMessage)
    )
)]
pub async fn get_user_with_category(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<Json<UserWithCategory>> {
    tracing::debug!("GetUserWithCategory: {}", id);
    let user = state.user_service.get_user_with_category(id).await?;
    Ok(Json(user))
}
