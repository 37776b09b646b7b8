//! CSV export functionality.
//!
//! One row per guest client, header always present.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use csv::WriterBuilder;
use log::{error, info};

use crate::config::REPORT_TIMESTAMP_FORMAT;
use crate::splash::{SplashInfo, SPLASH_INFO_COLUMNS};

/// Report file name: `<YYYYMMDD_HHMM>_splash_infos_<SSID>.csv`.
///
/// Spaces and path separators in the SSID become underscores, so the name
/// is always a single path component.
pub fn report_file_name(run_started: &DateTime<Local>, ssid: &str) -> String {
    let ssid: String = ssid
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            other => other,
        })
        .collect();
    format!(
        "{}_splash_infos_{}.csv",
        run_started.format(REPORT_TIMESTAMP_FORMAT),
        ssid
    )
}

/// Full path of the report inside `output_dir`.
pub fn report_path(output_dir: &Path, run_started: &DateTime<Local>, ssid: &str) -> PathBuf {
    output_dir.join(report_file_name(run_started, ssid))
}

/// Writes `records` to `output` as CSV.
///
/// The parent directory is created if missing. An empty slice produces a
/// header-only file.
///
/// # Returns
///
/// The number of records written.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created or a row
/// cannot be written.
pub fn export_csv(output: &Path, records: &[SplashInfo]) -> Result<usize> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let file = fs::File::create(output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?;
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

    writer.write_record(SPLASH_INFO_COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(records.len())
}

/// Writes the run's report, logging instead of failing.
///
/// # Returns
///
/// The report path, or `None` if writing failed (the error is logged).
pub fn write_report(
    output_dir: &Path,
    run_started: &DateTime<Local>,
    ssid: &str,
    records: &[SplashInfo],
) -> Option<PathBuf> {
    info!("*** Writing to csv ***");
    let path = report_path(output_dir, run_started, ssid);
    match export_csv(&path, records) {
        Ok(count) => {
            info!("*** Writing to csv was successful ({} rows) ***", count);
            info!("*** The file can be found here: {}", path.display());
            Some(path)
        }
        Err(e) => {
            error!("{:#}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn started() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 3, 5, 9, 7, 42)
            .single()
            .expect("unambiguous local time")
    }

    fn record(mac: &str) -> SplashInfo {
        SplashInfo {
            description: Some("iPhone, Jane".to_string()),
            last_seen: "2024/03/05 08:55".to_string(),
            os: Some("iOS".to_string()),
            ip: None,
            mac: mac.to_string(),
            sponsor_email: Some("host@example.com".to_string()),
            authorized: "true".to_string(),
            expires: "2024-03-06 08:55:00 UTC".to_string(),
            ap: None,
            ssid: Some("Guest Wifi".to_string()),
        }
    }

    #[test]
    fn test_report_file_name_replaces_spaces() {
        assert_eq!(
            report_file_name(&started(), "Guest Wifi"),
            "20240305_0907_splash_infos_Guest_Wifi.csv"
        );
    }

    #[test]
    fn test_report_file_name_replaces_path_separators() {
        assert_eq!(
            report_file_name(&started(), "Guest/Lobby\\2"),
            "20240305_0907_splash_infos_Guest_Lobby_2.csv"
        );
    }

    #[test]
    fn test_write_report_keeps_slash_ssid_in_output_dir() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_report(dir.path(), &started(), "Guest/Lobby", &[record("aa")])
            .expect("report written");
        assert_eq!(path.parent(), Some(dir.path()));
        assert_eq!(fs::read_dir(dir.path()).expect("list dir").count(), 1);
    }

    #[test]
    fn test_report_path_joins_directory() {
        let path = report_path(Path::new("csv_reports"), &started(), "Lobby Guest Net");
        assert_eq!(
            path,
            PathBuf::from("csv_reports/20240305_0907_splash_infos_Lobby_Guest_Net.csv")
        );
    }

    #[test]
    fn test_export_csv_writes_header_and_rows() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("report.csv");

        let count = export_csv(&path, &[record("aa:aa"), record("bb:bb")]).expect("export");
        assert_eq!(count, 2);

        let content = fs::read_to_string(&path).expect("read report");
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("description,last_seen,os,ip,mac,sponsor_email,authorized,expires,AP,ssid")
        );
        assert_eq!(
            lines.next(),
            Some("\"iPhone, Jane\",2024/03/05 08:55,iOS,,aa:aa,host@example.com,true,2024-03-06 08:55:00 UTC,,Guest Wifi")
        );
        assert!(lines.next().is_some());
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_export_csv_empty_is_header_only() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested").join("empty.csv");

        assert_eq!(export_csv(&path, &[]).expect("export"), 0);
        let content = fs::read_to_string(&path).expect("read report");
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn test_write_report_swallows_errors() {
        let dir = TempDir::new().expect("temp dir");
        // A file where the output directory should be
        let blocker = dir.path().join("csv_reports");
        fs::write(&blocker, b"not a directory").expect("write blocker");

        assert_eq!(write_report(&blocker, &started(), "Guest Wifi", &[]), None);
    }

    #[test]
    fn test_write_report_returns_path() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_report(dir.path(), &started(), "Guest Wifi", &[record("aa")])
            .expect("report written");
        assert!(path.exists());
        assert!(path.to_string_lossy().contains("Guest_Wifi"));
    }
}
