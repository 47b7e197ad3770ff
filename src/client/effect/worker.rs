use wasm_bindgen_futures::JsFuture;

use super::{js_error, window, EffectError};

/// Registers the offline-caching service worker.
///
/// The result is for logging only; the page works without it.
pub async fn register(script_url: &str) -> Result<(), EffectError> {
    let container = window()?.navigator().service_worker();
    JsFuture::from(container.register(script_url))
        .await
        .map_err(js_error)?;
    Ok(())
}
