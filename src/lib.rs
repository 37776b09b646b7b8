//! splash_report library: guest splash authorization export
//!
//! Logs in to the dashboard, resolves the organization's dashboard base URL,
//! lists the clients connected to a guest SSID, fetches each client's splash
//! authorization details and writes them to a timestamped CSV report.
//!
//! # Example
//!
//! ```no_run
//! use splash_report::{run_report, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     organization_name: "Acme".to_string(),
//!     ssid: "Guest Wifi".to_string(),
//!     network_id: "L_1234".to_string(),
//!     email: "admin@example.com".to_string(),
//!     password: "secret".to_string(),
//!     api_key: "0123456789abcdef".to_string(),
//!     ..Default::default()
//! };
//!
//! let summary = run_report(config).await?;
//! println!("{} guest clients exported", summary.rows_written);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Requests are issued one at a time.

pub mod api;
pub mod config;
pub mod dashboard;
mod error_handling;
pub mod export;
pub mod initialization;
pub mod splash;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Opt, OrgResolution};
pub use error_handling::{InitializationError, ResolveError, SplashError};
pub use run::{run_report, ReportSummary};
pub use splash::SplashInfo;

// Internal run module (contains the report pipeline)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use chrono::Local;
    use log::{debug, info};

    use crate::api::{list_guest_client_ids, resolve_dashboard_base_url_from_api};
    use crate::config::{Config, OrgResolution};
    use crate::dashboard::{
        get_org_url_from_org_list, post_login_credentials, resolve_dashboard_base_url,
    };
    use crate::error_handling::ResolveError;
    use crate::export::write_report;
    use crate::initialization::{init_api_client, init_session_clients, SessionClients};
    use crate::splash::{fetch_splash_info, SplashContext};

    /// Results of a report run.
    #[derive(Debug, Clone)]
    pub struct ReportSummary {
        /// Dashboard base URL the usage pages were read from
        pub dashboard_base_url: String,
        /// Number of clients connected to the guest SSID
        pub guest_clients: usize,
        /// Number of rows in the report
        pub rows_written: usize,
        /// Report file, or `None` if writing it failed
        pub report_path: Option<PathBuf>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    async fn resolve_dashboard(
        config: &Config,
        session: &SessionClients,
        api_client: &reqwest::Client,
    ) -> Result<String> {
        match config.org_resolution {
            OrgResolution::OrgList => {
                let org_href = get_org_url_from_org_list(
                    &session.client,
                    &config.account_url,
                    &config.organization_name,
                )
                .await?
                .ok_or_else(|| ResolveError::OrganizationNotFound(config.organization_name.clone()))?;
                debug!("Organization link: {}", org_href);

                resolve_dashboard_base_url(&session.redirect_client, &config.account_url, &org_href)
                    .await
            }
            OrgResolution::Api => {
                resolve_dashboard_base_url_from_api(
                    api_client,
                    &config.api_url,
                    &config.organization_name,
                )
                .await
            }
        }
    }

    /// Runs the report with the provided configuration.
    ///
    /// Steps, each awaited before the next:
    /// 1. Post the login form (status is logged, not checked)
    /// 2. Resolve the dashboard base URL ([`OrgResolution`])
    /// 3. List client IDs on the guest SSID
    /// 4. Fetch splash details and access point per client
    /// 5. Write the CSV report (failures are logged, not returned)
    ///
    /// # Errors
    ///
    /// Returns an error if the clients cannot be built, the dashboard base
    /// URL cannot be resolved (no clients are listed in that case), a REST
    /// call fails, or a client's usage payload cannot be used.
    pub async fn run_report(config: Config) -> Result<ReportSummary> {
        let start_time = Instant::now();
        let run_started = Local::now();
        debug!("Starting report with {:?}", config);

        let session =
            init_session_clients(&config).context("Failed to initialize dashboard session")?;
        let api_client = init_api_client(&config).context("Failed to initialize API client")?;

        post_login_credentials(
            &session.client,
            &config.account_url,
            &config.email,
            &config.password,
        )
        .await?;

        let dashboard_base_url = resolve_dashboard(&config, &session, &api_client)
            .await
            .context("Failed to resolve the dashboard base url")?;

        let guest_clients = list_guest_client_ids(
            &api_client,
            &config.api_url,
            &config.network_id,
            &config.ssid,
        )
        .await
        .context("Failed to list guest clients")?;
        info!(
            "{} client{} connected to {}",
            guest_clients.len(),
            if guest_clients.len() == 1 { "" } else { "s" },
            config.ssid
        );

        let ctx = SplashContext {
            session_client: session.client.clone(),
            api_client,
            dashboard_base_url: dashboard_base_url.clone(),
            api_url: config.api_url.clone(),
            network_id: config.network_id.clone(),
        };

        let mut splash_infos = Vec::with_capacity(guest_clients.len());
        for client_id in &guest_clients {
            let splash_info = fetch_splash_info(&ctx, client_id)
                .await
                .with_context(|| format!("Failed to fetch splash info for client {}", client_id))?;
            splash_infos.push(splash_info);
        }

        let report_path =
            write_report(&config.output_dir, &run_started, &config.ssid, &splash_infos);

        Ok(ReportSummary {
            dashboard_base_url,
            guest_clients: guest_clients.len(),
            rows_written: if report_path.is_some() {
                splash_infos.len()
            } else {
                0
            },
            report_path,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
