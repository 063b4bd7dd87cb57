//! Service layer - category use cases.

mod category_service;

pub use category_service::{CategoryManager, CategoryService};
