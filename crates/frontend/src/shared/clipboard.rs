//! Clipboard utilities
//!
//! Copies table values (nicknames, wallet addresses) with the Web Clipboard API
//! and reports the result as a notification.

use leptos::task::spawn_local;

use crate::layout::notification_service::NotificationService;

/// Copy text to the system clipboard and show "Copied" on success
pub fn copy_with_notice(text: &str, notifications: NotificationService) {
    let text = text.to_owned();
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            return;
        };
        let clipboard = window.navigator().clipboard();
        match wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await {
            Ok(_) => notifications.success("Copied to clipboard"),
            Err(e) => {
                log::warn!("clipboard write failed: {:?}", e);
                notifications.error("Failed to copy");
            }
        }
    });
}
