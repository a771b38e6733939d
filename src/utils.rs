use chrono::Utc;

/// Current UTC time in integer milliseconds since the epoch.
pub fn ms_since_epoch() -> i64 {
    Utc::now().timestamp_millis()
}
