//! Clipboard access through the Web Clipboard API.

use wasm_bindgen_futures::{spawn_local, JsFuture};

/// Copy text to the system clipboard.
///
/// Fire-and-forget: the write finishes asynchronously and a rejected
/// promise (e.g. permission denied) is only logged.
pub fn copy_to_clipboard(text: &str) {
    let text = text.to_owned();
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            log::warn!("clipboard: no window object");
            return;
        };
        let clipboard = window.navigator().clipboard();
        if let Err(e) = JsFuture::from(clipboard.write_text(&text)).await {
            log::warn!("clipboard: write rejected: {:?}", e);
        }
    });
}
