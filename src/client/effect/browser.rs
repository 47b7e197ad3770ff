use super::{document, js_error, window, EffectError};

/// Opens `url` in a new browsing context.
pub fn open_in_new_tab(url: &str) -> Result<(), EffectError> {
    window()?
        .open_with_url_and_target(url, "_blank")
        .map_err(js_error)?;
    Ok(())
}

pub fn print_page() -> Result<(), EffectError> {
    window()?.print().map_err(js_error)
}

pub fn document_title() -> Result<String, EffectError> {
    Ok(document()?.title())
}

pub fn set_document_title(title: &str) -> Result<(), EffectError> {
    document()?.set_title(title);
    Ok(())
}

pub fn document_hidden() -> bool {
    document().map(|doc| doc.hidden()).unwrap_or(false)
}

/// Locks or releases body scrolling while the mobile menu is open.
pub fn set_body_scroll_locked(locked: bool) -> Result<(), EffectError> {
    let body = document()?.body().ok_or(EffectError::NoDocument)?;
    let style = body.style();
    if locked {
        style.set_property("overflow", "hidden").map_err(js_error)
    } else {
        style.remove_property("overflow").map(drop).map_err(js_error)
    }
}
