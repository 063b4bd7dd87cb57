//! Common utilities shared by the category and user services.
//!
//! This crate provides:
//! - The error-kind taxonomy and its HTTP mapping
//! - Configuration structures
//! - Shared request extractors
//! - Database connection management
//! - The HTTP service lifecycle (start, signal wait, graceful stop)

pub mod config;
#[cfg(feature = "database")]
pub mod db;
pub mod error;
pub mod extract;
pub mod lifecycle;
pub mod signal;

pub use config::*;
#[cfg(feature = "database")]
pub use db::Database;
pub use error::{AppError, AppResult, ErrorKind};
pub use extract::ValidatedPath;
pub use lifecycle::{LifecycleError, ServiceLifecycle};
pub use signal::{Termination, TerminationSignal};
