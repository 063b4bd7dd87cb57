//! Domain-level constants.
//!
//! Defaults for addresses, timeouts and the shared API prefix.

// =============================================================================
// HTTP surface
// =============================================================================

/// Prefix every route is mounted under
pub const API_PREFIX: &str = "/v1";

/// Default port of the category service
pub const DEFAULT_CATEGORY_SERVICE_PORT: u16 = 4000;

/// Default port of the user service
pub const DEFAULT_USER_SERVICE_PORT: u16 = 3000;

/// Base URL the user service uses to reach the category service
pub const DEFAULT_CATEGORY_SERVICE_URL: &str = "http://localhost:4000/v1";

// =============================================================================
// Timeouts
// =============================================================================

/// Grace period for draining in-flight requests on shutdown
pub const DEFAULT_SHUTDOWN_GRACE_SECONDS: u64 = 5;

/// Per-request timeout for calls to the category service
pub const DEFAULT_CATEGORY_REQUEST_TIMEOUT_MS: u64 = 3000;

/// Connect timeout for calls to the category service
pub const DEFAULT_CATEGORY_CONNECT_TIMEOUT_MS: u64 = 1000;
