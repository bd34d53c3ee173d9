// ============================================================================
// NOTIFY SERVICE - Avisos de demo vía window.alert
// ============================================================================

use log::{info, warn};
use wasm_bindgen_futures::JsFuture;

/// Blocking browser alert used by the simulated demo actions. Logs first
/// so the action leaves a trace even if the window is unavailable.
pub fn alert(message: &str) {
    info!("📣 {}", message);
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Writes `text` to the system clipboard and confirms with an alert once
/// the async write settles.
pub fn copy_text(text: &str) {
    if let Some(window) = web_sys::window() {
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::spawn_local(async move {
            if JsFuture::from(promise).await.is_ok() {
                alert("Copied to clipboard!");
            } else {
                warn!("📋 No se pudo escribir en el portapapeles");
            }
        });
    }
}
