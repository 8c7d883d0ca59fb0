//! Table cell formatting shared by all pages.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use std::fmt::Display;

use crate::models::{Alert, LatestReading, Reading, SensorField};

/// Shown for a sensor value the reading did not report
pub const PLACEHOLDER: &str = "-";

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const ALERT_HEADERS: [&str; 6] = ["Time", "Topic", "Parameter", "Threshold", "Actual", "Message"];

/// Headers for the raw data table: Time, Topic, then one per sensor field
pub fn reading_headers() -> Vec<&'static str> {
    let mut headers = vec!["Time", "Topic"];
    headers.extend(SensorField::all().iter().map(|f| f.label()));
    headers
}

/// Headers for the dashboard's latest reading row: Topic first
pub fn latest_headers() -> Vec<&'static str> {
    let mut headers = vec!["Topic", "Time"];
    headers.extend(SensorField::all().iter().map(|f| f.label()));
    headers
}

pub fn format_value(value: Option<f64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Render an ISO-8601 timestamp in the viewer's local time
pub fn format_timestamp(raw: &str) -> String {
    format_timestamp_in(raw, &Local)
}

/// Render an ISO-8601 timestamp in `tz`.
///
/// Timestamps without an offset are taken as UTC. Anything unparseable is
/// returned unchanged.
pub fn format_timestamp_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let trimmed = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return ts.with_timezone(tz).format(TIME_FORMAT).to_string();
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|naive| {
            Utc.from_utc_datetime(&naive)
                .with_timezone(tz)
                .format(TIME_FORMAT)
                .to_string()
        })
        .unwrap_or_else(|| raw.to_string())
}

/// Time, Topic, then the five sensor values
pub fn reading_cells(reading: &Reading) -> Vec<String> {
    let mut cells = vec![format_timestamp(&reading.timestamp), reading.topic.clone()];
    cells.extend(
        SensorField::all()
            .iter()
            .map(|f| format_value(reading.value(*f))),
    );
    cells
}

/// Thresholds and actual values are shown as plain numbers
pub fn alert_cells(alert: &Alert) -> Vec<String> {
    vec![
        format_timestamp(&alert.timestamp),
        alert.topic.clone(),
        alert.violated_key.clone(),
        alert.threshold_value.to_string(),
        alert.actual_value.to_string(),
        alert.message.clone(),
    ]
}

/// Topic, Time, then the five sensor values
pub fn latest_cells(latest: &LatestReading) -> Vec<String> {
    let mut cells = vec![
        latest.topic.clone().unwrap_or_default(),
        latest
            .timestamp
            .as_deref()
            .map(format_timestamp)
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
    ];
    cells.extend(
        SensorField::all()
            .iter()
            .map(|f| format_value(latest.value(*f))),
    );
    cells
}
