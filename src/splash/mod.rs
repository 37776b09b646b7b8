//! Per-client splash authorization details.
//!
//! For each guest client the dashboard usage payload is fetched with the
//! session cookies, its first ACL entry is flattened into a [`SplashInfo`],
//! and the client's current access point is looked up through the REST API.

mod extract;
mod models;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::api::find_recent_device_name;
use crate::config::{REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE, USAGE_TIMESPAN_SECS};
use crate::dashboard::is_ok;

pub use extract::{format_last_seen, parse_epoch, scalar_to_cell, splash_info_from_usage};
pub use models::{AclEntry, ClientUsage, SplashInfo, SPLASH_INFO_COLUMNS};

/// Resources shared by every per-client fetch.
#[derive(Debug, Clone)]
pub struct SplashContext {
    /// Dashboard session client (follows redirects)
    pub session_client: reqwest::Client,
    /// REST API client
    pub api_client: reqwest::Client,
    /// Resolved dashboard base URL of the organization
    pub dashboard_base_url: String,
    /// REST API base URL
    pub api_url: String,
    /// Network the guest clients belong to
    pub network_id: String,
}

/// Fetches the dashboard usage payload of one client.
///
/// A non-OK status is logged only; the body is still decoded.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a usage payload.
pub async fn fetch_client_usage(ctx: &SplashContext, client_id: &str) -> Result<ClientUsage> {
    let url = format!(
        "{}/usage/client_show/{}?t0=&t1=&timespan={}&filter=",
        ctx.dashboard_base_url, client_id, USAGE_TIMESPAN_SECS
    );
    let response = ctx
        .session_client
        .get(&url)
        .header(REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE)
        .send()
        .await
        .with_context(|| format!("Failed to request {}", url))?;

    if is_ok(response.status()) {
        info!("*** The splash infos per client ID was successfully obtained ***");
    } else {
        warn!(
            "Usage page for client {} answered with status {}",
            client_id,
            response.status()
        );
    }

    response
        .json::<ClientUsage>()
        .await
        .with_context(|| format!("Failed to decode usage payload for client {}", client_id))
}

/// Builds the report row for one client.
///
/// # Errors
///
/// Returns an error if either fetch fails or the payload has no ACL entry.
pub async fn fetch_splash_info(ctx: &SplashContext, client_id: &str) -> Result<SplashInfo> {
    let usage = fetch_client_usage(ctx, client_id).await?;
    let ap =
        find_recent_device_name(&ctx.api_client, &ctx.api_url, &ctx.network_id, client_id).await?;
    Ok(splash_info_from_usage(client_id, usage, ap)?)
}
