use dioxus::prelude::*;

use crate::client::constant::SITE_NAME;
use crate::client::router::Route;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::constant::{
    HEADER_SCROLL_THRESHOLD_PX, LOGO_PULSE_HOLD_MS, LOGO_PULSE_PERIOD_MS, SCROLL_DEBOUNCE_MS,
};
#[cfg(feature = "web")]
use crate::client::effect::{browser, listener, scroll};

#[component]
pub fn Header() -> Element {
    let mut menu_open = use_signal(|| false);
    let scrolled = use_signal(|| false);
    let mut logo_pulse = use_signal(|| false);

    // Scroll restyle (debounced) and outside-click dismissal, attached once.
    #[cfg(feature = "web")]
    {
        let mut wired = use_signal(|| false);
        use_effect(move || {
            if *wired.peek() {
                return;
            }
            wired.set(true);
            wire_scroll_restyle(scrolled);
            wire_outside_click(menu_open);
        });

        // An open menu locks body scrolling behind it.
        use_effect(move || {
            if let Err(err) = browser::set_body_scroll_locked(menu_open()) {
                tracing::warn!("body scroll lock failed: {err}");
            }
        });

        // Periodic logo pulse.
        use_future(move || async move {
            loop {
                gloo_timers::future::TimeoutFuture::new(LOGO_PULSE_PERIOD_MS).await;
                logo_pulse.set(true);
                gloo_timers::future::TimeoutFuture::new(LOGO_PULSE_HOLD_MS).await;
                logo_pulse.set(false);
            }
        });
    }

    rsx!(header {
        class: if scrolled() { "header scrolled" } else { "header" },
        nav {
            class: "nav",
            Link {
                to: Route::Home {},
                class: "logo",
                onclick: move |_| menu_open.set(false),
                span {
                    class: if logo_pulse() { "logo-icon pulse" } else { "logo-icon" },
                    aria_hidden: "true",
                    "⚡"
                }
                span {
                    class: "logo-text",
                    {SITE_NAME}
                }
            }
            button {
                class: if menu_open() { "mobile-toggle active" } else { "mobile-toggle" },
                aria_label: "Toggle navigation menu",
                aria_expanded: menu_open(),
                onclick: move |_| {
                    let open = menu_open();
                    menu_open.set(!open);
                },
                span { class: "bar" }
                span { class: "bar" }
                span { class: "bar" }
            }
            ul {
                class: if menu_open() { "nav-menu active" } else { "nav-menu" },
                NavItem { to: Route::Home {}, label: "Home", menu_open }
                NavItem { to: Route::Minecraft {}, label: "Minecraft", menu_open }
                NavItem { to: Route::VoiceChat {}, label: "Voice Chat", menu_open }
                NavItem { to: Route::SocialMedia {}, label: "Social Media", menu_open }
            }
        }
    })
}

#[component]
fn NavItem(to: Route, label: String, mut menu_open: Signal<bool>) -> Element {
    let route = use_route::<Route>();
    let is_active = route == to;

    rsx!(li {
        Link {
            to: to.clone(),
            class: if is_active { "nav-link active" } else { "nav-link" },
            // Any navigation closes the mobile menu.
            onclick: move |_| menu_open.set(false),
            "{label}"
        }
    })
}

/// Recolors the header once the page is scrolled past the threshold. The
/// raw scroll stream is debounced to one check per quiet period.
#[cfg(feature = "web")]
fn wire_scroll_restyle(mut scrolled: Signal<bool>) {
    let debouncer = scroll::Debouncer::new(SCROLL_DEBOUNCE_MS);
    let result = listener::on_window("scroll", move |_| {
        debouncer.call(move || {
            scrolled.set(scroll::window_scroll_y() > HEADER_SCROLL_THRESHOLD_PX);
        });
    });
    if let Err(err) = result {
        tracing::warn!("scroll restyle wiring failed: {err}");
    }
}

/// Closes the mobile menu on any click that lands outside the nav.
#[cfg(feature = "web")]
fn wire_outside_click(mut menu_open: Signal<bool>) {
    use wasm_bindgen::JsCast;

    let result = listener::on_document("click", move |event| {
        if !*menu_open.peek() {
            return;
        }
        let inside_nav = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|element| element.closest(".nav").ok().flatten())
            .is_some();
        if !inside_nav {
            menu_open.set(false);
        }
    });
    if let Err(err) = result {
        tracing::warn!("outside-click wiring failed: {err}");
    }
}
