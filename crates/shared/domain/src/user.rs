//! User domain entity and related types.

use serde::{Deserialize, Serialize};

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Identifier assigned by the store on creation
    #[cfg_attr(feature = "openapi", schema(example = 7))]
    pub id: i32,
    /// User display name
    #[cfg_attr(feature = "openapi", schema(example = "Bob"))]
    pub name: String,
    /// User email address (not validated)
    #[cfg_attr(feature = "openapi", schema(example = "bob@example.com"))]
    pub email: String,
}

impl User {
    pub fn new(id: i32, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// A user joined with the name of its category.
///
/// Built per request and never persisted. Only constructed once both the local
/// user and the remote category have been fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserWithCategory {
    /// User identifier
    #[cfg_attr(feature = "openapi", schema(example = 7))]
    pub id: i32,
    /// User display name
    #[cfg_attr(feature = "openapi", schema(example = "Bob"))]
    pub name: String,
    /// Name of the user's category
    #[cfg_attr(feature = "openapi", schema(example = "Books"))]
    pub category: String,
}

impl UserWithCategory {
    /// Merge a local user with a remote category name.
    pub fn merge(user: User, category: crate::Category) -> Self {
        Self {
            id: user.id,
            name: user.name,
            category: category.name,
        }
    }
}
