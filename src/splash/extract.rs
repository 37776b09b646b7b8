//! Flattening of a client usage payload into a report row.

use chrono::{Local, TimeZone};
use serde_json::Value;

use crate::config::LAST_SEEN_FORMAT;
use crate::error_handling::SplashError;
use crate::splash::models::{ClientUsage, SplashInfo};

/// Reads an epoch-seconds value sent as an integer, float or numeric string.
///
/// Fractions are truncated toward zero.
pub fn parse_epoch(value: &Value) -> Result<i64, SplashError> {
    let invalid = || SplashError::InvalidLastSeen(value.to_string());
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .ok_or_else(invalid),
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

/// Formats an epoch timestamp as local `YYYY/MM/DD HH:MM`.
pub fn format_last_seen(epoch_secs: i64) -> Result<String, SplashError> {
    Local
        .timestamp_opt(epoch_secs, 0)
        .single()
        .map(|dt| dt.format(LAST_SEEN_FORMAT).to_string())
        .ok_or_else(|| SplashError::InvalidLastSeen(epoch_secs.to_string()))
}

/// Renders a scalar JSON value as a CSV cell.
///
/// Strings are taken verbatim, `null` becomes empty and booleans are written
/// `True`/`False` like earlier exports. Numbers use their JSON text.
pub fn scalar_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Builds the report row for one client.
///
/// Authorization fields come from the first `wireless_bigacl` entry.
///
/// # Errors
///
/// Returns [`SplashError::MissingAcl`] if there is no ACL entry and
/// [`SplashError::InvalidLastSeen`] if `last_seen` is not a timestamp.
pub fn splash_info_from_usage(
    client_id: &str,
    usage: ClientUsage,
    ap: Option<String>,
) -> Result<SplashInfo, SplashError> {
    let acl = usage
        .wireless_bigacl
        .as_deref()
        .and_then(|entries| entries.first())
        .ok_or_else(|| SplashError::MissingAcl(client_id.to_string()))?;

    let last_seen = format_last_seen(parse_epoch(&usage.last_seen)?)?;

    Ok(SplashInfo {
        description: usage.description,
        last_seen,
        os: usage.os,
        ip: usage.ip,
        mac: usage.mac,
        sponsor_email: acl.sponsor_email.clone(),
        authorized: scalar_to_cell(&acl.authorized),
        expires: scalar_to_cell(&acl.expires),
        ap,
        ssid: usage.ssid_name,
    })
}
