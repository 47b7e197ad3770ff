use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::{document, js_error, window, EffectError};

/// Attaches a persistent listener to the document.
///
/// The closure is leaked: page-level listeners live for the lifetime of the
/// page, and the browser reclaims them on navigation.
pub fn on_document(
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), EffectError> {
    let document = document()?;
    attach(document.as_ref(), event, handler)
}

/// Attaches a persistent listener to the window.
pub fn on_window(
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), EffectError> {
    let window = window()?;
    attach(window.as_ref(), event, handler)
}

fn attach(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), EffectError> {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    closure.forget();
    Ok(())
}
