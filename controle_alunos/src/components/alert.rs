use leptos::logging::warn;
use leptos::prelude::*;

/// Blocking browser alert.
pub fn alert(message: &str) {
    if window().alert_with_message(message).is_err() {
        warn!("Alert could not be shown: {}", message);
    }
}
