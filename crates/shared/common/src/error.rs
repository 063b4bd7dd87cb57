//! Unified error handling for both services.
//!
//! Every failure that leaves a service boundary is an [`AppError`]. Each error
//! resolves to exactly one [`ErrorKind`], and each kind maps to exactly one
//! HTTP status code. Handlers never pick status codes themselves.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::ErrorMessage;
use thiserror::Error;

/// Closed set of failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No local user with the requested id
    UserNotFound,
    /// The category service reported the category as absent
    CategoryNotFound,
    /// The category service could not be reached or gave no structured answer
    CategoryServiceUnavailable,
    /// Anything else, including malformed remote responses
    Internal,
    /// Request body failed to decode or validate (transport layer only)
    InvalidRequest,
}

impl ErrorKind {
    /// HTTP status code for this kind.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::UserNotFound | ErrorKind::CategoryNotFound => StatusCode::NOT_FOUND,
            ErrorKind::CategoryServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable identifier used in logs.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::UserNotFound => "USER_NOT_FOUND",
            ErrorKind::CategoryNotFound => "CATEGORY_NOT_FOUND",
            ErrorKind::CategoryServiceUnavailable => "CATEGORY_SERVICE_UNAVAILABLE",
            ErrorKind::Internal => "INTERNAL_ERROR",
            ErrorKind::InvalidRequest => "INVALID_REQUEST",
        }
    }
}

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("user not found")]
    UserNotFound,

    #[error("{0}")]
    CategoryNotFound(String),

    #[error("category service down: {0}")]
    CategoryServiceUnavailable(String),

    #[error("{0}")]
    Validation(String),

    #[cfg(feature = "database")]
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// The taxonomy member this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::UserNotFound => ErrorKind::UserNotFound,
            AppError::CategoryNotFound(_) => ErrorKind::CategoryNotFound,
            AppError::CategoryServiceUnavailable(_) => ErrorKind::CategoryServiceUnavailable,
            AppError::Validation(_) => ErrorKind::InvalidRequest,
            #[cfg(feature = "database")]
            AppError::Database(_) => ErrorKind::Internal,
            AppError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        self.kind().status()
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let status = kind.status();
        if status.is_server_error() {
            tracing::error!(code = kind.code(), "Request failed: {}", self);
        } else {
            tracing::debug!(code = kind.code(), "Request rejected: {}", self);
        }

        (status, Json(ErrorMessage::new(self.to_string()))).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn category_not_found(msg: impl Into<String>) -> Self {
        AppError::CategoryNotFound(msg.into())
    }

    pub fn category_service_unavailable(msg: impl Into<String>) -> Self {
        AppError::CategoryServiceUnavailable(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_message(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorMessage = serde_json::from_slice(&bytes).unwrap();
        body.message
    }

    #[test]
    fn kind_to_status_is_total_and_exact() {
        assert_eq!(ErrorKind::UserNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorKind::CategoryNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorKind::CategoryServiceUnavailable.status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ErrorKind::Internal.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ErrorKind::InvalidRequest.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn errors_resolve_to_one_kind() {
        assert_eq!(AppError::UserNotFound.kind(), ErrorKind::UserNotFound);
        assert_eq!(
            AppError::category_not_found("gone").kind(),
            ErrorKind::CategoryNotFound
        );
        assert_eq!(
            AppError::category_service_unavailable("refused").kind(),
            ErrorKind::CategoryServiceUnavailable
        );
        assert_eq!(AppError::validation("bad").kind(), ErrorKind::InvalidRequest);
        assert_eq!(AppError::internal("boom").kind(), ErrorKind::Internal);
    }

    #[tokio::test]
    async fn response_body_carries_message() {
        let response = AppError::UserNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_message(response).await, "user not found");
    }

    #[tokio::test]
    async fn unavailable_response_echoes_cause() {
        let response =
            AppError::category_service_unavailable("connection refused").into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            body_message(response).await,
            "category service down: connection refused"
        );
    }
}
