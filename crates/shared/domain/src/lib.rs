//! Domain layer - Core entities shared by the category and user services.
//!
//! This crate contains plain data types with no infrastructure dependencies.
//! The same types are used as JSON wire shapes on both sides of the
//! user-service -> category-service call.

pub mod category;
pub mod constants;
pub mod user;

pub use category::Category;
pub use constants::*;
pub use user::{User, UserWithCategory};

use serde::{Deserialize, Serialize};

/// Error body returned by every endpoint on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorMessage {
    /// Human-readable description of the failure
    #[cfg_attr(feature = "openapi", schema(example = "user not found"))]
    pub message: String,
}

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
