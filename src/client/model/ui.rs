use dioxus::prelude::*;

/// Page-wide visual effect switches, provided as a context at the root.
#[derive(Clone, Copy)]
pub struct UiEffects {
    /// Konami easter egg: hue-rotates the whole page while set.
    pub rainbow: Signal<bool>,
    /// Mirrors the OS reduced-motion preference; collapses animation and
    /// transition durations when set.
    pub reduced_motion: Signal<bool>,
}

impl UiEffects {
    pub fn new() -> Self {
        Self {
            rainbow: Signal::new(false),
            reduced_motion: Signal::new(false),
        }
    }
}
