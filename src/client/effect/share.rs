use wasm_bindgen_futures::JsFuture;

use super::{clipboard, document, js_error, window, EffectError};

/// How the page ended up being shared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareOutcome {
    SheetOpened,
    UrlCopied,
}

/// Shares the current page through the native share sheet, falling back to
/// copying the URL to the clipboard when the Share API is missing.
pub async fn share_page(text: &str) -> Result<ShareOutcome, EffectError> {
    let window = window()?;
    let href = window.location().href().map_err(js_error)?;

    let navigator = window.navigator();
    let has_share = js_sys::Reflect::has(navigator.as_ref(), &"share".into()).unwrap_or(false);
    if has_share {
        let data = web_sys::ShareData::new();
        data.set_title(&document()?.title());
        data.set_text(text);
        data.set_url(&href);
        JsFuture::from(navigator.share_with_data(&data))
            .await
            .map_err(js_error)?;
        Ok(ShareOutcome::SheetOpened)
    } else {
        clipboard::copy_text(&href).await?;
        Ok(ShareOutcome::UrlCopied)
    }
}
