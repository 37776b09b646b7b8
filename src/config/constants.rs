//! Configuration constants.
//!
//! This module defines the endpoints, header names and fixed parameters used
//! when talking to the dashboard web application and the REST API.

/// Account portal that serves the login form and the organization list.
pub const DEFAULT_ACCOUNT_URL: &str = "https://account.meraki.com";

/// Base URL of the versioned REST API.
pub const DEFAULT_API_URL: &str = "https://dashboard.meraki.com/api";

/// Directory the CSV reports are written to (relative to the working directory).
pub const DEFAULT_OUTPUT_DIR: &str = "csv_reports";

/// Per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User-Agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("splash_report/", env!("CARGO_PKG_VERSION"));

// Dashboard web endpoints (relative to the account URL)
pub const LOGIN_PATH: &str = "/login/login";
pub const ORG_LIST_PATH: &str = "/login/org_list";

// Header names are lowercase so they can be used with `HeaderName::from_static`.
/// Header carrying the REST API key (`X-Cisco-Meraki-API-Key`).
pub const API_KEY_HEADER: &str = "x-cisco-meraki-api-key";

/// Marks dashboard requests as XHR so the usage endpoint answers with JSON.
pub const REQUESTED_WITH_HEADER: &str = "x-requested-with";
pub const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";

/// Lookback window (seconds) passed to the client usage endpoint.
pub const USAGE_TIMESPAN_SECS: u64 = 86_400;

/// Page size for the client list used to look up a client's access point.
/// Only the first page is read; networks with more clients are truncated.
pub const CLIENTS_PER_PAGE: u32 = 1000;

/// Length of the trailing `/dashboard` segment removed from the last
/// redirect URL to obtain the dashboard base URL.
pub const DASHBOARD_URL_SUFFIX_LEN: usize = 10;

/// Length of the trailing `/organization/overview` segment removed from an
/// organization's `url` field to obtain the dashboard base URL.
pub const ORGANIZATION_URL_SUFFIX_LEN: usize = 22;

/// Maximum number of redirect hops followed when resolving the dashboard URL.
pub const MAX_REDIRECT_HOPS: usize = 10;

/// `strftime` pattern for the last-seen column.
pub const LAST_SEEN_FORMAT: &str = "%Y/%m/%d %H:%M";

/// `strftime` pattern for the report file name prefix.
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M";
