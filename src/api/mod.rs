//! REST API access (API-key authenticated).
//!
//! Every call raises on a non-2xx status; the error propagates and ends the run.

mod clients;
mod models;
mod organizations;

pub use clients::{filter_guest_client_ids, find_recent_device_name, list_guest_client_ids};
pub use models::{NetworkClient, Organization};
pub use organizations::{
    find_organization, list_organizations, resolve_dashboard_base_url_from_api,
};
