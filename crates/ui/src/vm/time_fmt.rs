use chrono::{DateTime, Utc};

#[must_use]
pub fn format_sync_time(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M UTC").to_string()
}
