//! Wall-clock display formatting for message timestamps.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// Formats an hour/minute pair as an `HH:MM` display string.
pub fn format_clock(hours: u32, minutes: u32) -> String {
    format!("{:02}:{:02}", hours % 24, minutes % 60)
}

/// Current local wall-clock time as `HH:MM`.
///
/// Reads the browser clock; outside a browser (SSR render, native tests)
/// no submission path runs, so the placeholder is never user-visible.
pub fn now_clock() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        format_clock(now.get_hours(), now.get_minutes())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        "--:--".to_owned()
    }
}
