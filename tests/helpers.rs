// Shared test helpers for mock dashboard setup and test data creation.
//
// One wiremock server plays all three roles: account portal (login, org
// list, org redirect), dashboard shard (usage JSON) and REST API (under /api).

#![allow(dead_code)] // Each test binary uses a subset

use std::path::Path;

use serde_json::{json, Value};
use splash_report::{Config, OrgResolution};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "test-api-key";
pub const NETWORK_ID: &str = "L_646829496481105433";
pub const SESSION_COOKIE: &str = "dash_auth=abc123";
/// Dashboard base path the org-list redirect chain leads to.
pub const DASHBOARD_BASE_PATH: &str = "/Guest-Site/n/Ab12cD/manage";

/// Builds a config pointing every endpoint at the mock server.
pub fn test_config(server: &MockServer, output_dir: &Path, mode: OrgResolution) -> Config {
    Config {
        organization_name: "Acme".to_string(),
        ssid: "Guest Wifi".to_string(),
        network_id: NETWORK_ID.to_string(),
        email: "admin@example.com".to_string(),
        password: "s3cret!".to_string(),
        api_key: API_KEY.to_string(),
        org_resolution: mode,
        output_dir: output_dir.to_path_buf(),
        account_url: server.uri(),
        api_url: format!("{}/api", server.uri()),
        timeout_seconds: 5,
        ..Default::default()
    }
}

/// Login form that hands out the session cookie.
pub async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/login/login"))
        .respond_with(
            ResponseTemplate::new(200).insert_header("set-cookie", format!("{}; Path=/", SESSION_COOKIE)),
        )
        .mount(server)
        .await;
}

/// Organization list page with one anchor per `(name, href)`.
pub async fn mount_org_list(server: &MockServer, orgs: &[(&str, &str)]) {
    let anchors: String = orgs
        .iter()
        .map(|(name, href)| format!("<li><a href=\"{}\">{}</a></li>", href, name))
        .collect();
    let html = format!(
        "<html><body><h2>Choose an organization</h2><ul>{}</ul></body></html>",
        anchors
    );
    Mock::given(method("GET"))
        .and(path("/login/org_list"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(server)
        .await;
}

/// org_choose -> {base}/dashboard -> {base}/usage/list (final).
pub async fn mount_org_redirects(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/login/org_choose"))
        .respond_with(ResponseTemplate::new(302).insert_header(
            "location",
            format!("{}{}/dashboard", server.uri(), DASHBOARD_BASE_PATH),
        ))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{}/dashboard", DASHBOARD_BASE_PATH)))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("location", format!("{}/usage/list", DASHBOARD_BASE_PATH)),
        )
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{}/usage/list", DASHBOARD_BASE_PATH)))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>usage</html>"))
        .mount(server)
        .await;
}

pub fn network_client(id: &str, ssid: Option<&str>, ap: Option<&str>) -> Value {
    json!({
        "id": id,
        "mac": format!("00:18:0a:00:00:{}", &id[id.len() - 2..]),
        "description": format!("device-{}", id),
        "ip": "10.0.0.10",
        "ssid": ssid,
        "recentDeviceName": ap,
        "status": "Online"
    })
}

/// Both REST client lists: v0 (listing) and v1 (access point lookup).
///
/// `ap_lookups` is the exact number of v1 calls expected.
pub async fn mount_network_clients(server: &MockServer, clients: &Value, ap_lookups: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v0/networks/{}/clients", NETWORK_ID)))
        .and(header("x-cisco-meraki-api-key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(clients))
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/networks/{}/clients", NETWORK_ID)))
        .and(query_param("perPage", "1000"))
        .and(header("x-cisco-meraki-api-key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(clients))
        .expect(ap_lookups)
        .mount(server)
        .await;
}

pub fn usage_payload(mac: &str, sponsor: &str, last_seen: i64) -> Value {
    json!({
        "description": format!("phone {}", mac),
        "last_seen": last_seen,
        "os": "iOS",
        "ip": "10.0.0.10",
        "mac": mac,
        "ssid_name": "Guest Wifi",
        "wireless_bigacl": [
            {
                "sponsor_email": sponsor,
                "authorized": true,
                "expires": "2024-03-06 08:55:00 UTC"
            }
        ]
    })
}

/// Usage JSON for one client under `base_path`; requires the session cookie.
pub async fn mount_usage(server: &MockServer, base_path: &str, client_id: &str, payload: Value) {
    Mock::given(method("GET"))
        .and(path(format!("{}/usage/client_show/{}", base_path, client_id)))
        .and(query_param("timespan", "86400"))
        .and(header("x-requested-with", "XMLHttpRequest"))
        .and(header("cookie", SESSION_COOKIE))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload))
        .expect(1)
        .mount(server)
        .await;
}
