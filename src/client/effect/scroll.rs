use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions};

use super::{document, EffectError};

pub fn window_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Smooth-scrolls the page back to the top.
pub fn scroll_to_top() {
    scroll_to(0.0);
}

/// Smooth-scrolls to the element with `id`, stopping `offset_px` above it
/// so the fixed header does not cover the target.
pub fn scroll_to_id(id: &str, offset_px: i32) -> Result<(), EffectError> {
    let element = document()?
        .get_element_by_id(id)
        .ok_or_else(|| EffectError::Browser(format!("missing element #{id}")))?;
    let top = element
        .dyn_ref::<web_sys::HtmlElement>()
        .map(|el| el.offset_top())
        .unwrap_or(0)
        - offset_px;
    scroll_to(f64::from(top.max(0)));
    Ok(())
}

fn scroll_to(top: f64) {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Runs an action only once events stop arriving for a quiet period.
#[derive(Clone)]
pub struct Debouncer {
    quiet_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new(quiet_ms: u32) -> Self {
        Self {
            quiet_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Schedules `action`, cancelling any predecessor that has not fired yet.
    pub fn call(&self, action: impl FnOnce() + 'static) {
        let pending = Rc::clone(&self.pending);
        let timeout = Timeout::new(self.quiet_ms, move || {
            pending.borrow_mut().take();
            action();
        });
        // Replacing the handle drops the previous Timeout, which cancels it.
        *self.pending.borrow_mut() = Some(timeout);
    }
}
