//! Category service - Handles category lookups.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult};
use domain::Category;

use crate::repository::CategoryRepository;

/// Category service trait for dependency injection.
#[async_trait]
pub trait CategoryService: Send + Sync {
    /// Get category by ID
    async fn get_category(&self, id: i32) -> AppResult<Category>;
}

/// Concrete implementation of CategoryService using repository.
pub struct CategoryManager {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryManager {
    /// Create new category service instance with repository
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl CategoryService for CategoryManager {
    async fn get_category(&self, id: i32) -> AppResult<Category> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::category_not_found("category not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockCategoryRepository;
    use common::ErrorKind;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_get_category_success() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_find_by_id()
            .with(eq(7))
            .times(1)
            .returning(|id| Ok(Some(Category::new(id, "Books"))));

        let service = CategoryManager::new(Arc::new(repo));
        let category = service.get_category(7).await.unwrap();

        assert_eq!(category, Category::new(7, "Books"));
    }

    #[tokio::test]
    async fn test_get_category_not_found() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = CategoryManager::new(Arc::new(repo));
        let err = service.get_category(99).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::CategoryNotFound);
        assert_eq!(err.to_string(), "category not found");
    }

    #[tokio::test]
    async fn test_get_category_database_failure_is_internal() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_find_by_id().returning(|_| {
            Err(AppError::from(sea_orm::DbErr::Custom(
                "connection reset".to_string(),
            )))
        });

        let service = CategoryManager::new(Arc::new(repo));
        let err = service.get_category(1).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Internal);
    }
}
