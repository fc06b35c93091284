//! Blocking notifications.
//!
//! In the browser these are `window.alert` and `window.confirm`. Elsewhere
//! the message is logged and `confirm` answers yes.

pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
            return;
        }
    }
    tracing::warn!("{}", message);
}

pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            return window.confirm_with_message(message).unwrap_or(false);
        }
    }
    tracing::info!("confirm: {}", message);
    true
}
