//! HTTP clients for calling other services.

mod category_client;

#[cfg(any(test, feature = "test-utils"))]
pub use category_client::MockCategoryClient;
pub use category_client::{CategoryClient, CategoryClientError, HttpCategoryClient};
