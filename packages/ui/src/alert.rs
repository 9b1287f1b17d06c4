//! Blocking alert dialog.

/// Show `message` in a blocking `window.alert`.
#[cfg(target_arch = "wasm32")]
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        tracing::warn!("No window to alert: {message}");
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        tracing::error!("Alert failed: {e:?}");
    }
}

/// Outside the browser there is no dialog; the message goes to the log.
#[cfg(not(target_arch = "wasm32"))]
pub fn alert(message: &str) {
    tracing::warn!("{message}");
}
