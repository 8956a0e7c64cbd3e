use std::panic;
use leptos::logging::log;

/// Chains onto the installed panic hook and explains owner disposal panics,
/// which show up when a review request finishes after its view was removed.
pub fn set_custom_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Call the original hook first
        original_hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        if is_disposal_panic(&message) {
            log!("[PANIC] Leptos owner disposal detected. Likely causes:");
            log!("[PANIC] 1. The book page changed while a review request was still in flight");
            log!("[PANIC] 2. A name lookup finished after the review list was unmounted");
            log!("[PANIC] 3. A dialog callback ran after the review list was cleaned up");
        }
    }));
}

fn is_disposal_panic(message: &str) -> bool {
    message.contains("OwnerDisposed") || message.contains("disposed")
}

/// Call once when the client starts, after `console_error_panic_hook::set_once`.
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
}
