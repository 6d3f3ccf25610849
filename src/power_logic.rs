//! Backlight idle policy.
//!
//! Any encoder or touch activity resets the idle clock in the polling loop;
//! this predicate decides when the panel backlight goes dark.

/// Decide whether the backlight should be on.
///
/// `display_enabled` is the base state (false while the panel itself is
/// off); the auto-off rule only ever turns an enabled backlight off, never
/// on.
pub fn backlight_should_be_on(
    display_enabled: bool,
    auto_off_enabled: bool,
    idle_ms: u64,
    auto_off_timeout_ms: u64,
) -> bool {
    if !display_enabled {
        return false;
    }

    if auto_off_enabled && idle_ms >= auto_off_timeout_ms {
        return false;
    }

    true
}
