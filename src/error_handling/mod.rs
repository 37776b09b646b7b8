//! Error handling.
//!
//! Initialization, dashboard resolution and splash extraction each have their
//! own error enum. Pipeline code wraps them in `anyhow::Error` with context.

mod types;

// Re-export public API
pub use types::{InitializationError, ResolveError, SplashError};
