//! Wall-clock labels for chat bubbles.
//!
//! The browser build reads local time from `js_sys::Date`; native builds
//! (SSR and tests) fall back to UTC from `SystemTime`.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current local time as `hh:mm AM/PM`.
pub fn time_of_day() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        format_time_of_day(now.get_hours(), now.get_minutes())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        let minute_of_day = u32::try_from((secs / 60) % (24 * 60)).unwrap_or_default();
        format_time_of_day(minute_of_day / 60, minute_of_day % 60)
    }
}

/// Format a 24-hour clock reading as a two-digit 12-hour label.
pub fn format_time_of_day(hours: u32, minutes: u32) -> String {
    let suffix = if hours < 12 { "AM" } else { "PM" };
    let hour12 = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour12:02}:{minutes:02} {suffix}")
}
