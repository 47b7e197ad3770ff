//! Thin wrappers over browser APIs.
//!
//! Everything here degrades gracefully: a missing element or an unavailable
//! API surfaces as an [`EffectError`] for the caller to log, never as a
//! panic. Compiled only for the `web` feature so the pure display logic in
//! `crate::model` builds and tests natively.

pub mod browser;
pub mod clipboard;
pub mod listener;
pub mod motion;
pub mod observer;
pub mod random;
pub mod scroll;
pub mod share;
pub mod worker;

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum EffectError {
    #[error("window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("browser API failed: {0}")]
    Browser(String),
}

pub(crate) fn js_error(value: JsValue) -> EffectError {
    EffectError::Browser(format!("{value:?}"))
}

pub(crate) fn window() -> Result<web_sys::Window, EffectError> {
    web_sys::window().ok_or(EffectError::NoWindow)
}

pub(crate) fn document() -> Result<web_sys::Document, EffectError> {
    window()?.document().ok_or(EffectError::NoDocument)
}
