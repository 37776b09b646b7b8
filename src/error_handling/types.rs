//! Error type definitions.
//!
//! This module defines the error types raised while initializing the
//! application, resolving the dashboard, and extracting splash details.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing an HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The API key cannot be used as a header value.
    #[error("Invalid API key: {0}")]
    InvalidApiKeyError(#[from] reqwest::header::InvalidHeaderValue),
}

/// Reasons the dashboard base URL of the organization could not be resolved.
///
/// Any of these ends the run before clients are listed.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// No organization with a matching name was found.
    #[error("Org_url could not be obtained for {0}")]
    OrganizationNotFound(String),

    /// The organization page answered without redirecting.
    #[error("Request was not redirected: {0}")]
    NotRedirected(String),

    /// The URL is too short (or not cut on a character boundary) to drop its suffix.
    #[error("Cannot derive dashboard base URL from {0}")]
    SuffixTooShort(String),

    /// The redirect chain was still redirecting when the hop limit ran out.
    #[error("Too many redirects starting at {0}")]
    TooManyRedirects(String),
}

/// Error types for per-client splash detail extraction.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SplashError {
    /// The usage payload carried no access-control-list entry.
    #[error("No wireless_bigacl entry for client {0}")]
    MissingAcl(String),

    /// `last_seen` is not an epoch timestamp.
    #[error("Invalid last_seen value: {0}")]
    InvalidLastSeen(String),
}
