use anyhow::{Context, Result};
use log::{info, warn};

use crate::config::LOGIN_PATH;
use crate::dashboard::is_ok;

/// Posts the login form so the session cookie lands in the shared jar.
///
/// Success is judged by HTTP status only; a rejected login is logged, not
/// raised, and shows up later as failing dashboard calls.
///
/// # Returns
///
/// Whether the login response was OK.
///
/// # Errors
///
/// Returns an error only if the request could not be sent.
pub async fn post_login_credentials(
    client: &reqwest::Client,
    account_url: &str,
    email: &str,
    password: &str,
) -> Result<bool> {
    info!("*** Posting the login credentials to the dashboard ***");
    let url = format!("{}{}", account_url, LOGIN_PATH);
    let response = client
        .post(&url)
        .form(&[("email", email), ("password", password)])
        .send()
        .await
        .with_context(|| format!("Failed to post login form to {}", url))?;

    let ok = is_ok(response.status());
    if ok {
        info!("*** The login credentials were successfully posted ***");
    } else {
        warn!("Login form answered with status {}", response.status());
    }
    Ok(ok)
}
