//! Saving server-provided bytes as a file on the user's machine.
//!
//! In the browser this creates an object URL for a `Blob` and clicks a
//! temporary `<a download>` element. Other platforms have no download
//! manager to hand the file to and report an error.

/// Offer `bytes` to the user as a file named `file_name`.
#[cfg(target_arch = "wasm32")]
pub fn save_file(file_name: &str, bytes: &[u8], mime: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    let js_err = |e: wasm_bindgen::JsValue| format!("{e:?}");

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let body = document.body().ok_or("no document body")?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| "anchor element has the wrong type".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    body.append_child(&anchor).map_err(js_err)?;
    anchor.click();
    anchor.remove();
    Url::revoke_object_url(&url).map_err(js_err)?;

    tracing::info!("Saved {} bytes as {}", bytes.len(), file_name);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_file(file_name: &str, bytes: &[u8], _mime: &str) -> Result<(), String> {
    tracing::warn!("Cannot save {file_name} ({} bytes) outside the browser", bytes.len());
    Err("File downloads are only available in the browser".to_string())
}
