/// Скачивание файлов по ссылке через временный `<a download>`
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

/// Points a hidden anchor at `href`, clicks it and removes it again.
///
/// The browser decides what happens next; for cross-origin images it may
/// open the image instead of saving it under `filename`.
pub fn download_url(href: &str, filename: &str) -> Result<(), String> {
    let anchor = create_download_anchor(href, filename)?;

    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Ok(())
}

/// Detached anchor with `href` and `download` set.
pub fn create_download_anchor(href: &str, filename: &str) -> Result<HtmlAnchorElement, String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document object")?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(href);
    anchor.set_download(filename);
    Ok(anchor)
}
