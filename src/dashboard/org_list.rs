//! Organization list scraping.

use std::sync::LazyLock;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use scraper::{ElementRef, Html, Selector};

use crate::config::ORG_LIST_PATH;
use crate::dashboard::is_ok;

const ANCHOR_SELECTOR_STR: &str = "a";

static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(ANCHOR_SELECTOR_STR).expect("Failed to parse anchor selector - this is a bug")
});

/// True if one of the anchor's direct text children is `name`.
///
/// Surrounding whitespace is ignored, so indented markup such as
/// `<a>\n  Acme\n</a>` still matches.
fn anchor_names(anchor: &ElementRef<'_>, name: &str) -> bool {
    anchor
        .children()
        .filter_map(|node| node.value().as_text())
        .any(|text| text.trim() == name)
}

/// Finds the `href` of the first anchor labelled with the organization name.
///
/// Only direct text children are compared (trimmed, case-sensitive); text
/// nested inside child elements does not count.
pub fn find_org_href(html: &str, organization_name: &str) -> Option<String> {
    let document = Html::parse_document(html);

    for anchor in document.select(&ANCHOR_SELECTOR) {
        debug!("Anchor: {}", anchor.html());
        if anchor_names(&anchor, organization_name) {
            if let Some(href) = anchor.value().attr("href") {
                return Some(href.to_string());
            }
        }
    }
    None
}

/// Fetches the account portal's organization list and returns the link of
/// the configured organization.
///
/// # Returns
///
/// The organization's `href` (a path on the account portal), or `None` if
/// no anchor matches.
///
/// # Errors
///
/// Returns an error if the page cannot be fetched or its body read.
pub async fn get_org_url_from_org_list(
    client: &reqwest::Client,
    account_url: &str,
    organization_name: &str,
) -> Result<Option<String>> {
    info!("*** Getting the org url from the org list ***");
    let url = format!("{}{}", account_url, ORG_LIST_PATH);
    let response = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("Failed to request {}", url))?;

    if is_ok(response.status()) {
        info!("*** The org list was successfully obtained ***");
    } else {
        warn!("Org list answered with status {}", response.status());
    }

    let body = response
        .text()
        .await
        .context("Failed to read org list body")?;

    let href = find_org_href(&body, organization_name);
    if href.is_none() {
        warn!("Org_url could not be obtained for {}", organization_name);
    }
    Ok(href)
}
