//! REST API response types.

use serde::Deserialize;

/// An organization returned by `GET /v1/organizations`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Organization {
    pub id: String,
    pub name: String,
    /// Dashboard overview URL of the organization.
    pub url: String,
}

/// A client returned by `GET /v{0,1}/networks/{networkId}/clients`.
///
/// Only the fields used by the report are decoded; nullable fields are
/// optional because wired clients and stale entries omit them.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkClient {
    pub id: String,
    #[serde(default)]
    pub mac: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub ssid: Option<String>,
    /// Name of the access point the client was most recently associated with.
    #[serde(default)]
    pub recent_device_name: Option<String>,
}
