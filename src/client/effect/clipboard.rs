use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::{document, js_error, window, EffectError};

/// Which copy mechanism ended up being used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyPath {
    AsyncApi,
    Fallback,
}

/// Places `text` on the clipboard.
///
/// Tries the asynchronous Clipboard API first; if that is unavailable or
/// rejects, falls back once to a hidden textarea and `execCommand("copy")`.
pub async fn copy_text(text: &str) -> Result<CopyPath, EffectError> {
    match copy_via_async_api(text).await {
        Ok(()) => Ok(CopyPath::AsyncApi),
        Err(_) => copy_via_textarea(text).map(|()| CopyPath::Fallback),
    }
}

async fn copy_via_async_api(text: &str) -> Result<(), EffectError> {
    let clipboard = window()?.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map_err(js_error)?;
    Ok(())
}

fn copy_via_textarea(text: &str) -> Result<(), EffectError> {
    let document = document()?;
    let body = document.body().ok_or(EffectError::NoDocument)?;

    let textarea: web_sys::HtmlTextAreaElement = document
        .create_element("textarea")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| EffectError::Browser("textarea cast failed".into()))?;
    textarea.set_value(text);

    body.append_child(&textarea).map_err(js_error)?;
    textarea.select();
    let html_document: web_sys::HtmlDocument = document.unchecked_into();
    let copied = html_document.exec_command("copy").map_err(js_error);
    body.remove_child(&textarea).map_err(js_error)?;

    if copied? {
        Ok(())
    } else {
        Err(EffectError::Browser("execCommand copy refused".into()))
    }
}
