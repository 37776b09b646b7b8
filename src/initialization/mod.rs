//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger
//! - Dashboard session clients (shared cookie jar, with and without redirects)
//! - REST API client (API key header)
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

// Re-export public API
pub use client::{init_api_client, init_session_clients, SessionClients};
pub use logger::init_logger_with;
