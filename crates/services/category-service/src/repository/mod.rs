//! Repository layer for data access.

pub mod entities;
mod category_repository;

#[cfg(any(test, feature = "test-utils"))]
pub use category_repository::MockCategoryRepository;
pub use category_repository::{CategoryRepository, CategoryStore};
