/// Blocking browser dialogs used by the review section.
/// Both are no-ops outside the browser.
use leptos::logging::log;

pub fn alert(message: &str) {
    log!("[DIALOG] alert: {}", message);
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// `false` when the viewer declines or no window is available.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        log!("[DIALOG] confirm outside the browser: {}", message);
        false
    }
}
