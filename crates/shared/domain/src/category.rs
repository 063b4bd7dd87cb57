//! Category entity, owned by the category service.

use serde::{Deserialize, Serialize};

/// A category as served by `GET /v1/category/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Category {
    /// Category identifier
    #[cfg_attr(feature = "openapi", schema(example = 7))]
    pub id: i32,
    /// Category display name
    #[cfg_attr(feature = "openapi", schema(example = "Books"))]
    pub name: String,
}

impl Category {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
