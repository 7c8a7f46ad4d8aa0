//! Printing a generated HTML document in a separate browser window.

use wasm_bindgen::{JsCast, JsValue};

/// Opens a blank window, writes `html` into it and shows the print dialog.
///
/// Returns an error when the popup was blocked. Nothing waits for images in
/// the document to finish loading.
pub fn print_html_document(html: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;

    let print_window = window
        .open_with_url_and_target("", "_blank")
        .map_err(|e| format!("Failed to open window: {:?}", e))?
        .ok_or("Popup window was blocked")?;

    let document = print_window
        .document()
        .ok_or("Print window has no document")?;
    let document = document.unchecked_ref::<web_sys::HtmlDocument>();

    document
        .write(&js_sys::Array::of1(&JsValue::from_str(html)))
        .map_err(|e| format!("Failed to write document: {:?}", e))?;
    document
        .close()
        .map_err(|e| format!("Failed to close document: {:?}", e))?;

    print_window
        .print()
        .map_err(|e| format!("Failed to print: {:?}", e))
}
