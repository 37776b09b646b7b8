//! Network client listing through the REST API.

use anyhow::{Context, Result};
use log::{debug, info};

use crate::api::models::NetworkClient;
use crate::config::CLIENTS_PER_PAGE;

async fn get_clients(client: &reqwest::Client, url: &str) -> Result<Vec<NetworkClient>> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to request {}", url))?
        .error_for_status()?;

    response
        .json::<Vec<NetworkClient>>()
        .await
        .with_context(|| format!("Failed to decode clients from {}", url))
}

/// Keeps the IDs of clients connected to `ssid` (exact match), in input order.
pub fn filter_guest_client_ids(clients: &[NetworkClient], ssid: &str) -> Vec<String> {
    clients
        .iter()
        .filter(|c| c.ssid.as_deref() == Some(ssid))
        .map(|c| c.id.clone())
        .collect()
}

/// Lists the IDs of clients on `network_id` connected to `ssid`.
///
/// Uses the v0 clients endpoint; only the first page is read.
///
/// # Errors
///
/// Returns an error on transport failures, non-2xx statuses, or an
/// undecodable body.
pub async fn list_guest_client_ids(
    client: &reqwest::Client,
    api_url: &str,
    network_id: &str,
    ssid: &str,
) -> Result<Vec<String>> {
    info!("Let's obtain the clients connected to the guest SSID");
    let url = format!("{}/v0/networks/{}/clients", api_url, network_id);
    let clients = get_clients(client, &url).await?;
    info!("*** The list of clients connected to the guest SSID was successfully obtained ***");

    let guest_clients = filter_guest_client_ids(&clients, ssid);
    debug!(
        "{} of {} clients are connected to {}",
        guest_clients.len(),
        clients.len(),
        ssid
    );
    Ok(guest_clients)
}

/// Looks up the access point `client_id` was most recently associated with.
///
/// Fetches a single page of up to [`CLIENTS_PER_PAGE`] clients from the v1
/// endpoint on every call. Returns `None` if the client is not on that page
/// or has no recent device.
///
/// # Errors
///
/// Returns an error on transport failures, non-2xx statuses, or an
/// undecodable body.
pub async fn find_recent_device_name(
    client: &reqwest::Client,
    api_url: &str,
    network_id: &str,
    client_id: &str,
) -> Result<Option<String>> {
    let url = format!(
        "{}/v1/networks/{}/clients?perPage={}",
        api_url, network_id, CLIENTS_PER_PAGE
    );
    let clients = get_clients(client, &url).await?;

    Ok(clients
        .into_iter()
        .find(|c| c.id == client_id)
        .and_then(|c| c.recent_device_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(id: &str, ssid: Option<&str>) -> NetworkClient {
        NetworkClient {
            id: id.to_string(),
            mac: None,
            description: None,
            ip: None,
            ssid: ssid.map(str::to_string),
            recent_device_name: None,
        }
    }

    #[test]
    fn test_filter_guest_client_ids_preserves_order() {
        let clients = vec![
            client("a", Some("Guest Wifi")),
            client("b", Some("Corp")),
            client("c", None),
            client("d", Some("Guest Wifi")),
            client("e", Some("Guest Wifi")),
        ];
        assert_eq!(
            filter_guest_client_ids(&clients, "Guest Wifi"),
            vec!["a".to_string(), "d".to_string(), "e".to_string()]
        );
    }

    #[test]
    fn test_filter_guest_client_ids_exact_match_only() {
        let clients = vec![
            client("a", Some("Guest Wifi 5G")),
            client("b", Some("guest wifi")),
            client("c", Some(" Guest Wifi")),
        ];
        assert!(filter_guest_client_ids(&clients, "Guest Wifi").is_empty());
    }

    #[test]
    fn test_filter_guest_client_ids_empty_input() {
        assert!(filter_guest_client_ids(&[], "Guest Wifi").is_empty());
    }
}
