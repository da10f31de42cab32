//! Blocking confirmation prompt.

/// Native `window.confirm` wrapper. Returns `false` when the window or the
/// prompt is unavailable, so destructive actions never fire by accident.
#[must_use]
pub fn confirm(message: &str) -> bool {
    web_sys::window().is_some_and(|w| w.confirm_with_message(message).unwrap_or(false))
}
