//! Organization lookup through the REST API.

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::api::models::Organization;
use crate::config::ORGANIZATION_URL_SUFFIX_LEN;
use crate::dashboard::strip_url_suffix;
use crate::error_handling::ResolveError;

/// Fetches every organization the API key has access to.
///
/// # Errors
///
/// Returns an error on transport failures, non-2xx statuses, or an
/// undecodable body.
pub async fn list_organizations(
    client: &reqwest::Client,
    api_url: &str,
) -> Result<Vec<Organization>> {
    let url = format!("{}/v1/organizations", api_url);
    let response = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("Failed to request {}", url))?
        .error_for_status()?;
    info!("*** The list of organizations was successfully obtained ***");

    let organizations = response
        .json::<Vec<Organization>>()
        .await
        .context("Failed to decode organizations")?;
    Ok(organizations)
}

/// Returns the first organization whose name contains `name`.
pub fn find_organization<'a>(organizations: &'a [Organization], name: &str) -> Option<&'a Organization> {
    organizations.iter().find(|org| org.name.contains(name))
}

/// Resolves the dashboard base URL from the organizations endpoint.
///
/// The organization's `url` points at its overview page; the trailing
/// `/organization/overview` segment is cut off by length.
///
/// # Errors
///
/// Returns [`ResolveError::OrganizationNotFound`] if no name matches,
/// [`ResolveError::SuffixTooShort`] if the URL cannot be cut, or the
/// request error if the endpoint fails.
pub async fn resolve_dashboard_base_url_from_api(
    client: &reqwest::Client,
    api_url: &str,
    organization_name: &str,
) -> Result<String> {
    let organizations = list_organizations(client, api_url).await?;
    debug!("Found {} organizations", organizations.len());

    let Some(organization) = find_organization(&organizations, organization_name) else {
        warn!("Org_url could not be obtained for {}", organization_name);
        return Err(ResolveError::OrganizationNotFound(organization_name.to_string()).into());
    };

    let base_url = strip_url_suffix(&organization.url, ORGANIZATION_URL_SUFFIX_LEN)
        .ok_or_else(|| ResolveError::SuffixTooShort(organization.url.clone()))?;
    info!("Dashboard base url: {}", base_url);
    Ok(base_url.to_string())
}
