//! HTTP client for category-service.
//!
//! Owns transport details only: URL building, timeouts, and sorting failures
//! into "the service answered with an error" versus "no usable answer".

use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client, StatusCode};
use thiserror::Error;
use tracing::debug;

use common::HttpClientConfig;
use domain::{Category, ErrorMessage};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Failure of a single category lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CategoryClientError {
    /// The service answered with an error status and a `{message}` body.
    #[error("category service returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The request timed out before a response arrived.
    #[error("request to category service timed out: {0}")]
    Timeout(String),

    /// No structured answer: connection failure or an error without a body.
    #[error("{0}")]
    Transport(String),

    /// Success status, but the body is not a category.
    #[error("unexpected response from category service: {0}")]
    Decode(String),
}

/// Category lookups needed by the user service.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CategoryClient: Send + Sync {
    /// Fetch a category by id. Exactly one request, no retries.
    async fn get_category_by_id(&self, id: i32) -> Result<Category, CategoryClientError>;
}

/// reqwest-backed client for category-service.
pub struct HttpCategoryClient {
    client: Client,
    base_url: String,
}

impl HttpCategoryClient {
    /// Build a client with the configured connect and request timeouts.
    pub fn new(config: &HttpClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()?;

        debug!("Category service client targeting {}", config.base_url);
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl CategoryClient for HttpCategoryClient {
    async fn get_category_by_id(&self, id: i32) -> Result<Category, CategoryClientError> {
        let url = format!("{}/category/{}", self.base_url, id);
        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        serde_json::from_slice(body.as_ref())
            .map_err(|e| CategoryClientError::Decode(format!("invalid category payload: {}", e)))
    }
}

fn map_transport_error(error: reqwest::Error) -> CategoryClientError {
    if error.is_timeout() {
        CategoryClientError::Timeout(error.to_string())
    } else {
        CategoryClientError::Transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> CategoryClientError {
    match serde_json::from_slice::<ErrorMessage>(body) {
        Ok(error) => CategoryClientError::Status {
            status: status.as_u16(),
            message: error.message,
        },
        Err(_) => {
            let preview = body_preview(body);
            if preview.is_empty() {
                CategoryClientError::Transport(format!("status {}", status.as_u16()))
            } else {
                CategoryClientError::Transport(format!("status {}: {}", status.as_u16(), preview))
            }
        }
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{}...", preview)
    } else {
        preview
    }
}
