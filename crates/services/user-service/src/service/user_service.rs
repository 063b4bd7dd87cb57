//! User service - joins local users with categories from category-service.
//!
//! This is the only place where repository and client failures are turned into
//! [`AppError`] kinds. Nothing below it reaches the HTTP layer unclassified.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, warn};

use common::{AppError, AppResult};
use domain::{User, UserWithCategory};

use crate::client::{CategoryClient, CategoryClientError};
use crate::repository::UserRepository;

/// User operations exposed to the HTTP handlers.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a user and return its id. Name and email are stored as given.
    async fn create_user(&self, name: String, email: String) -> AppResult<i32>;

    /// List all users. An empty store yields an empty list.
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Fetch a user together with the name of its category.
    async fn get_user_with_category(&self, id: i32) -> AppResult<UserWithCategory>;
}

/// Concrete implementation of UserService over the local store and the
/// category service client.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    categories: Arc<dyn CategoryClient>,
}

impl UserManager {
    pub fn new(repo: Arc<dyn UserRepository>, categories: Arc<dyn CategoryClient>) -> Self {
        Self { repo, categories }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, name: String, email: String) -> AppResult<i32> {
        self.repo.create(name, email).await.map_err(|e| {
            error!("Failed to create user: {}", e);
            AppError::internal(format!("failed to create user: {}", e))
        })
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await.map_err(|e| {
            error!("Failed to list users: {}", e);
            AppError::internal(format!("failed to list users: {}", e))
        })
    }

    async fn get_user_with_category(&self, id: i32) -> AppResult<UserWithCategory> {
        let user = match self.repo.find_by_id(id).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                debug!("User {} not found", id);
                return Err(AppError::UserNotFound);
            }
            Err(e) => {
                error!("Failed to load user {}: {}", id, e);
                return Err(AppError::internal(format!("failed to load user {}: {}", id, e)));
            }
        };

        // The user id doubles as the category id.
        let category = self
            .categories
            .get_category_by_id(id)
            .await
            .map_err(|e| map_category_error(id, e))?;

        Ok(UserWithCategory::merge(user, category))
    }
}

fn map_category_error(id: i32, error: CategoryClientError) -> AppError {
    match error {
        CategoryClientError::Status { status, message } => {
            warn!("Category lookup for user {} answered {}: {}", id, status, message);
            AppError::category_not_found(format!("no category found for this user: {}", message))
        }
        CategoryClientError::Timeout(_) | CategoryClientError::Transport(_) => {
            warn!("Category service unreachable for user {}: {}", id, error);
            AppError::category_service_unavailable(error.to_string())
        }
        CategoryClientError::Decode(_) => {
            error!("Category lookup for user {} returned garbage: {}", id, error);
            AppError::internal(error.to_string())
        }
    }
}
