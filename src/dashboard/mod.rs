//! Dashboard web application access (cookie session).
//!
//! Unlike the REST API, these calls only log whether a response was OK; a
//! failed status does not end the run by itself.

mod login;
mod org_list;
mod redirects;

pub use login::post_login_credentials;
pub use org_list::{find_org_href, get_org_url_from_org_list};
pub use redirects::{resolve_dashboard_base_url, resolve_redirect_chain, RedirectChain};

/// Mirrors the `ok` flag of a response: anything below 400.
pub(crate) fn is_ok(status: reqwest::StatusCode) -> bool {
    status.as_u16() < 400
}

/// Drops the last `suffix_len` bytes of `url`.
///
/// Returns `None` if `url` is not longer than the suffix or the cut would
/// split a multi-byte character. No check is made that the result is a
/// usable URL.
pub fn strip_url_suffix(url: &str, suffix_len: usize) -> Option<&str> {
    let end = url.len().checked_sub(suffix_len)?;
    if end == 0 {
        return None;
    }
    url.get(..end)
}
