//! Platform-aware wall clock.
//!
//! Uses `js_sys::Date::now()` on WASM and `std::time::SystemTime` on native.
//! Every other time value in the client is derived from [`now_millis`].

use chrono::{DateTime, SecondsFormat, Utc};

/// Milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }
}

fn to_datetime(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}

/// RFC 3339 rendering of an instant, e.g. `2024-05-02T09:15:00.000Z`.
pub fn rfc3339(millis: i64) -> String {
    to_datetime(millis).to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Calendar date of an instant, `YYYY-MM-DD`.
pub fn iso_date(millis: i64) -> String {
    to_datetime(millis).format("%Y-%m-%d").to_string()
}

/// UTC time of day of an instant, `HH:MM:SS`.
pub fn time_of_day(millis: i64) -> String {
    to_datetime(millis).format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats() {
        let t = 1_714_641_300_000; // 2024-05-02T09:15:00Z
        assert_eq!(rfc3339(t), "2024-05-02T09:15:00.000Z");
        assert_eq!(iso_date(t), "2024-05-02");
        assert_eq!(time_of_day(t), "09:15:00");
    }

    #[test]
    fn test_now_is_after_2020() {
        assert!(now_millis() > 1_577_836_800_000);
    }
}
