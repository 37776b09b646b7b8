//! HTTP redirect chain resolution.
//!
//! Choosing an organization on the account portal redirects to the
//! organization's dashboard shard. The chain is followed manually so the
//! intermediate URLs are known.

use anyhow::{Error, Result};
use log::{debug, info, warn};
use reqwest::Url;

use crate::config::{DASHBOARD_URL_SUFFIX_LEN, MAX_REDIRECT_HOPS};
use crate::dashboard::strip_url_suffix;
use crate::error_handling::ResolveError;

/// A followed redirect chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectChain {
    /// URLs that answered with a redirect, in request order.
    pub redirected: Vec<String>,
    /// URL of the last request made.
    pub final_url: String,
}

impl RedirectChain {
    /// URL of the last response that redirected, if any did.
    pub fn last_redirect(&self) -> Option<&str> {
        self.redirected.last().map(String::as_str)
    }
}

/// Follows the redirect chain for a URL, up to `max_hops` requests.
///
/// # Arguments
///
/// * `start_url` - The initial URL to start from
/// * `max_hops` - Maximum number of requests to make
/// * `client` - HTTP client with redirects disabled (sharing the session cookies)
///
/// # Errors
///
/// Returns an error if a request fails, a `Location` header cannot be
/// resolved, or the last of the `max_hops` responses still redirects
/// ([`ResolveError::TooManyRedirects`]).
pub async fn resolve_redirect_chain(
    start_url: &str,
    max_hops: usize,
    client: &reqwest::Client,
) -> Result<RedirectChain, Error> {
    let mut redirected: Vec<String> = Vec::new();
    let mut current = start_url.to_string();

    let mut settled = false;

    for _ in 0..max_hops {
        let resp = client.get(&current).send().await?;

        let status = resp.status();
        if !status.is_redirection() {
            settled = true;
            break;
        }

        let Some(loc) = resp.headers().get(reqwest::header::LOCATION) else {
            warn!(
                "Redirect status {} for {} but no Location header",
                status.as_u16(),
                current
            );
            settled = true;
            break;
        };

        // Servers may send raw UTF-8 paths; `Url::join` percent-encodes them
        let loc = String::from_utf8_lossy(loc.as_bytes()).into_owned();
        let new_url = Url::parse(&loc)
            .or_else(|_| Url::parse(&current).and_then(|base| base.join(&loc)))?;
        debug!("{} redirected to {}", current, new_url);
        redirected.push(current);
        current = new_url.to_string();
    }

    if !settled {
        warn!("Stopped following redirects after {} hops", max_hops);
        return Err(ResolveError::TooManyRedirects(start_url.to_string()).into());
    }

    Ok(RedirectChain {
        redirected,
        final_url: current,
    })
}

/// Resolves the dashboard base URL by following the organization link.
///
/// The URL of the last redirecting hop ends in `/dashboard`; those ten
/// characters are cut off.
///
/// # Errors
///
/// Returns [`ResolveError::NotRedirected`] if the organization page does
/// not redirect, [`ResolveError::SuffixTooShort`] if the URL cannot be cut,
/// or any error from [`resolve_redirect_chain`].
pub async fn resolve_dashboard_base_url(
    client: &reqwest::Client,
    account_url: &str,
    org_href: &str,
) -> Result<String> {
    info!("*** Getting the dashboard base url ***");
    let url = format!("{}{}", account_url, org_href);
    let chain = resolve_redirect_chain(&url, MAX_REDIRECT_HOPS, client).await?;

    let Some(dashboard_url) = chain.last_redirect() else {
        warn!("Request was not redirected");
        return Err(ResolveError::NotRedirected(url).into());
    };
    info!("The request was redirected to the following dashboard url:");

    let base_url = strip_url_suffix(dashboard_url, DASHBOARD_URL_SUFFIX_LEN)
        .ok_or_else(|| ResolveError::SuffixTooShort(dashboard_url.to_string()))?;
    info!("{}", base_url);
    Ok(base_url.to_string())
}
