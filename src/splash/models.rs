//! Splash authorization data types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One access-control-list entry of a client's usage payload.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AclEntry {
    #[serde(default)]
    pub sponsor_email: Option<String>,
    /// Usually a boolean, occasionally a string.
    #[serde(default)]
    pub authorized: Value,
    /// Expiry timestamp as sent by the dashboard (string or number).
    #[serde(default)]
    pub expires: Value,
}

/// Payload of the dashboard `usage/client_show/{id}` endpoint.
///
/// Only the fields the report needs are decoded.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ClientUsage {
    #[serde(default)]
    pub description: Option<String>,
    /// Epoch seconds; integer, float or numeric string.
    #[serde(default)]
    pub last_seen: Value,
    #[serde(default)]
    pub os: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
    pub mac: String,
    #[serde(default)]
    pub wireless_bigacl: Option<Vec<AclEntry>>,
    #[serde(default)]
    pub ssid_name: Option<String>,
}

/// CSV header, in field order of [`SplashInfo`].
pub const SPLASH_INFO_COLUMNS: [&str; 10] = [
    "description",
    "last_seen",
    "os",
    "ip",
    "mac",
    "sponsor_email",
    "authorized",
    "expires",
    "AP",
    "ssid",
];

/// One report row: splash authorization details of a guest client.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SplashInfo {
    pub description: Option<String>,
    /// Local time, `YYYY/MM/DD HH:MM`.
    pub last_seen: String,
    pub os: Option<String>,
    pub ip: Option<String>,
    pub mac: String,
    pub sponsor_email: Option<String>,
    pub authorized: String,
    pub expires: String,
    /// Access point the client was most recently associated with.
    #[serde(rename = "AP")]
    pub ap: Option<String>,
    pub ssid: Option<String>,
}
