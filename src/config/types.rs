//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_ACCOUNT_URL, DEFAULT_API_URL, DEFAULT_OUTPUT_DIR, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How the dashboard base URL of the organization is discovered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OrgResolution {
    /// Scrape the account portal's organization list and follow the
    /// organization link's redirect chain.
    OrgList,
    /// Look the organization up through the REST organizations endpoint.
    Api,
}

/// Library configuration (no CLI dependencies).
///
/// Can be constructed programmatically; the binary builds it from [`Opt`].
///
/// # Examples
///
/// ```no_run
/// use splash_report::Config;
///
/// let config = Config {
///     organization_name: "Acme".to_string(),
///     ssid: "Guest Wifi".to_string(),
///     network_id: "N_1234".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Clone)]
pub struct Config {
    /// Organization name as shown in the dashboard
    pub organization_name: String,

    /// SSID whose clients are reported
    pub ssid: String,

    /// Network the guest SSID belongs to
    pub network_id: String,

    /// Dashboard login email
    pub email: String,

    /// Dashboard login password
    pub password: String,

    /// REST API key
    pub api_key: String,

    /// Dashboard base URL discovery strategy
    pub org_resolution: OrgResolution,

    /// Directory CSV reports are written to
    pub output_dir: PathBuf,

    /// Account portal base URL (login form, organization list)
    pub account_url: String,

    /// REST API base URL
    pub api_url: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            organization_name: String::new(),
            ssid: String::new(),
            network_id: String::new(),
            email: String::new(),
            password: String::new(),
            api_key: String::new(),
            org_resolution: OrgResolution::OrgList,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            account_url: DEFAULT_ACCOUNT_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

// Secrets stay out of logs and panic messages.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("organization_name", &self.organization_name)
            .field("ssid", &self.ssid)
            .field("network_id", &self.network_id)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("api_key", &"<redacted>")
            .field("org_resolution", &self.org_resolution)
            .field("output_dir", &self.output_dir)
            .field("account_url", &self.account_url)
            .field("api_url", &self.api_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("user_agent", &self.user_agent)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .finish()
    }
}

/// Command-line options and configuration.
///
/// Every option can also be supplied through the environment (or a `.env`
/// file loaded at startup). Credentials are never echoed in `--help`.
///
/// # Examples
///
/// ```bash
/// # Everything from .env
/// splash_report
///
/// # Resolve the dashboard through the REST API and write elsewhere
/// splash_report --org-resolution api --output-dir /tmp/reports
/// ```
#[derive(Parser)]
#[command(
    name = "splash_report",
    version,
    about = "Exports splash page authorization details of guest clients to CSV."
)]
pub struct Opt {
    /// Organization name as shown in the dashboard
    #[arg(long, env = "MERAKI_ORGANIZATION_NAME")]
    pub organization_name: String,

    /// SSID whose clients are reported
    #[arg(long, env = "SSID")]
    pub ssid: String,

    /// Network ID the SSID belongs to
    #[arg(long, env = "NETWORK_ID")]
    pub network_id: String,

    /// Dashboard login email
    #[arg(long, env = "MERAKI_EMAIL", hide_env_values = true)]
    pub email: String,

    /// Dashboard login password
    #[arg(long, env = "MERAKI_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// REST API key
    #[arg(long, env = "MERAKI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Dashboard URL discovery: org-list|api
    #[arg(long, env = "ORG_RESOLUTION", value_enum, default_value_t = OrgResolution::OrgList)]
    pub org_resolution: OrgResolution,

    /// Directory CSV reports are written to
    #[arg(long, env = "CSV_REPORT_DIR", value_parser, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Account portal base URL
    #[arg(long, env = "MERAKI_ACCOUNT_URL", default_value = DEFAULT_ACCOUNT_URL)]
    pub account_url: String,

    /// REST API base URL
    #[arg(long, env = "MERAKI_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl fmt::Debug for Opt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Opt")
            .field("organization_name", &self.organization_name)
            .field("ssid", &self.ssid)
            .field("network_id", &self.network_id)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("api_key", &"<redacted>")
            .field("org_resolution", &self.org_resolution)
            .field("output_dir", &self.output_dir)
            .field("account_url", &self.account_url)
            .field("api_url", &self.api_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("user_agent", &self.user_agent)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            organization_name: opt.organization_name,
            ssid: opt.ssid,
            network_id: opt.network_id,
            email: opt.email,
            password: opt.password,
            api_key: opt.api_key,
            org_resolution: opt.org_resolution,
            output_dir: opt.output_dir,
            account_url: opt.account_url.trim_end_matches('/').to_string(),
            api_url: opt.api_url.trim_end_matches('/').to_string(),
            timeout_seconds: opt.timeout_seconds,
            user_agent: opt.user_agent,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.org_resolution, OrgResolution::OrgList);
        assert_eq!(config.output_dir, PathBuf::from("csv_reports"));
        assert_eq!(config.account_url, "https://account.meraki.com");
        assert_eq!(config.api_url, "https://dashboard.meraki.com/api");
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn test_config_debug_redacts_secrets() {
        let config = Config {
            password: "hunter2".to_string(),
            api_key: "abc123secret".to_string(),
            ..Default::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("abc123secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_opt_into_config_trims_trailing_slashes() {
        let opt = Opt::try_parse_from([
            "splash_report",
            "--organization-name",
            "Acme",
            "--ssid",
            "Guest Wifi",
            "--network-id",
            "N_1",
            "--email",
            "a@b.c",
            "--password",
            "pw",
            "--api-key",
            "key",
            "--account-url",
            "http://localhost:9000/",
            "--api-url",
            "http://localhost:9001/api/",
        ])
        .expect("valid arguments");

        let config = Config::from(opt);
        assert_eq!(config.account_url, "http://localhost:9000");
        assert_eq!(config.api_url, "http://localhost:9001/api");
        assert_eq!(config.ssid, "Guest Wifi");
    }
}
