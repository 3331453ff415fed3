//! Countdown formatting.
//!
//! Pure formatting over the selector's output; no selection decisions happen
//! here. The `<= 0` boundary and the hour/minute split are rendered exactly
//! as the board has always shown them, and the tests pin the strings.

use crate::domain::TimeOfDay;

/// Signed minutes from `now` until a target on the absolute minute axis.
///
/// Negative when the target has passed.
pub fn minutes_until(target_minutes: i32, now: TimeOfDay) -> i32 {
    target_minutes - now.minutes() as i32
}

/// Render a countdown for display.
///
/// A countdown of zero or less renders as `gone_label` (the caller picks
/// "Departed", "Arrived" or "En route" by context). Otherwise minutes render
/// as `"{m} min"` below an hour and `"{h}h {m}m"` from an hour up.
///
/// # Examples
///
/// ```
/// use bus_server::board::format_countdown;
///
/// assert_eq!(format_countdown(10, "Departed"), "10 min");
/// assert_eq!(format_countdown(75, "Departed"), "1h 15m");
/// assert_eq!(format_countdown(0, "Departed"), "Departed");
/// ```
pub fn format_countdown(minutes: i32, gone_label: &str) -> String {
    if minutes <= 0 {
        return gone_label.to_string();
    }

    let hours = minutes / 60;
    let mins = minutes % 60;

    if hours > 0 {
        format!("{hours}h {mins}m")
    } else {
        format!("{mins} min")
    }
}
