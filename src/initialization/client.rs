//! HTTP client initialization.
//!
//! The dashboard web application is driven through two clients sharing one
//! cookie jar: one follows redirects, the other leaves them to the caller so
//! a redirect chain can be inspected hop by hop. The REST API gets its own
//! client that sends the API key on every call.

use std::sync::Arc;
use std::time::Duration;

use reqwest::cookie::Jar;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::ClientBuilder;

use crate::config::{Config, API_KEY_HEADER};
use crate::error_handling::InitializationError;

/// Cookie-sharing clients for the dashboard web application.
#[derive(Debug, Clone)]
pub struct SessionClients {
    /// Follows redirects (login form, organization list, usage JSON).
    pub client: reqwest::Client,
    /// Redirects disabled, for manual redirect chain tracking.
    pub redirect_client: reqwest::Client,
}

/// Initializes the dashboard session clients.
///
/// Both clients are configured with:
/// - The same cookie jar, so the login cookie is replayed everywhere
/// - Timeout and User-Agent from the configuration
///
/// # Errors
///
/// Returns an error if client creation fails.
pub fn init_session_clients(config: &Config) -> Result<SessionClients, InitializationError> {
    let jar = Arc::new(Jar::default());

    let client = ClientBuilder::new()
        .cookie_provider(Arc::clone(&jar))
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;

    let redirect_client = ClientBuilder::new()
        .cookie_provider(jar)
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;

    Ok(SessionClients {
        client,
        redirect_client,
    })
}

/// Initializes the REST API client.
///
/// The API key is installed as a sensitive default header.
///
/// # Errors
///
/// Returns an error if the API key is not a valid header value or client
/// creation fails.
pub fn init_api_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let mut api_key = HeaderValue::from_str(&config.api_key)?;
    api_key.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);

    let client = ClientBuilder::new()
        .default_headers(headers)
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}
