//! Wall-clock stamps for optimistic messages.
//!
//! The browser build reads local time from `Date`; native builds fall back
//! to UTC from `SystemTime`, which is only used by tests and tooling.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Format hours and minutes as zero-padded `HH:MM`.
pub fn format_hhmm(hours: u32, minutes: u32) -> String {
    format!("{hours:02}:{minutes:02}")
}

/// Current local time as `HH:MM`.
pub fn now_hhmm() -> String {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        format_hhmm(now.get_hours(), now.get_minutes())
    }
    #[cfg(not(feature = "csr"))]
    {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        let of_day = u32::try_from(secs % 86_400).unwrap_or_default();
        format_hhmm(of_day / 3600, of_day % 3600 / 60)
    }
}
