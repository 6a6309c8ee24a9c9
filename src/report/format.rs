use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;

pub const NOT_AVAILABLE: &str = "N/A";

pub fn or_na<T: Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn or_zero<T: Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "0".to_string(),
    }
}

pub fn yes_no(flag: Option<bool>) -> &'static str {
    if flag == Some(true) {
        "✅ Yes"
    } else {
        "❌ No"
    }
}

/// `YYYY-MM-DD HH:MM:SS UTC`, or N/A for a missing or zero timestamp.
pub fn absolute_time(timestamp: Option<i64>) -> String {
    match timestamp.filter(|ts| *ts != 0).and_then(|ts| Utc.timestamp_opt(ts, 0).single()) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Coarse age of `timestamp` relative to `now`.
pub fn relative_time(timestamp: Option<i64>, now: DateTime<Utc>) -> String {
    let ts = match timestamp.filter(|ts| *ts != 0) {
        Some(ts) => ts,
        None => return NOT_AVAILABLE.to_string(),
    };

    let elapsed = (now.timestamp() - ts).max(0);
    let days = elapsed / 86400;
    let hours = (elapsed % 86400) / 3600;
    let minutes = (elapsed % 3600) / 60;

    if days > 0 {
        format!("{} days ago", days)
    } else if hours > 0 {
        format!("{} hours ago", hours)
    } else if minutes > 0 {
        format!("{} minutes ago", minutes)
    } else {
        "just now".to_string()
    }
}

/// First `len` characters of an address.
pub fn short_address(address: &str, len: usize) -> String {
    address.chars().take(len).collect()
}

pub fn price_list(levels: &[f64], take: usize) -> String {
    if levels.is_empty() {
        return "None identified".to_string();
    }
    levels
        .iter()
        .take(take)
        .map(|p| format!("${:.6}", p))
        .collect::<Vec<_>>()
        .join(", ")
}
