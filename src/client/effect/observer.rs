use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{js_error, EffectError};

/// Visibility fraction that counts as "entered the viewport" for reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Pulls the trigger line 50 px up so reveals start slightly early.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Fires `on_enter` the first time `element` intersects the viewport, then
/// stops watching it (one-shot).
///
/// The observer and its callback are leaked; they live as long as the page,
/// like the listeners in [`super::listener`].
pub fn observe_once(
    element: &Element,
    threshold: f64,
    root_margin: &str,
    mut on_enter: impl FnMut() + 'static,
) -> Result<(), EffectError> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    observer.unobserve(&entry.target());
                    on_enter();
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options.set_root_margin(root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(js_error)?;
    observer.observe(element);
    callback.forget();
    Ok(())
}
