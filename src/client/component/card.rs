use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::effect::observer;

/// Content card with the site's shared interaction set: one-shot scroll
/// reveal, hover lift, keyboard activation, and an injected ARIA label.
///
/// `on_activate` fires on click and on Enter/Space, standing in for the
/// card's primary link.
#[component]
pub fn Card(
    title: String,
    class: Option<&'static str>,
    on_activate: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    let class = class.unwrap_or_default();
    let mut revealed = use_signal(|| false);
    let mut lifted = use_signal(|| false);

    rsx!(div {
        class: "card {class}",
        class: if revealed() { "revealed" },
        class: if lifted() { "lifted" },
        tabindex: 0,
        role: "button",
        aria_label: "{title} - Click to learn more",
        onmounted: move |event| {
            #[cfg(feature = "web")]
            {
                use dioxus::web::WebEventExt;

                let element = event.data().as_web_event();
                let watch = observer::observe_once(
                    &element,
                    observer::REVEAL_THRESHOLD,
                    observer::REVEAL_ROOT_MARGIN,
                    move || revealed.set(true),
                );
                if let Err(err) = watch {
                    // Without an observer the card just shows immediately.
                    tracing::warn!("reveal observer failed: {err}");
                    revealed.set(true);
                }
            }
            #[cfg(not(feature = "web"))]
            {
                let _ = &event;
                revealed.set(true);
            }
        },
        onmouseenter: move |_| lifted.set(true),
        onmouseleave: move |_| lifted.set(false),
        onclick: move |_| {
            if let Some(handler) = on_activate {
                handler.call(());
            }
        },
        onkeydown: move |event| {
            let key = event.key();
            if key == Key::Enter || key == Key::Character(" ".to_string()) {
                event.prevent_default();
                if let Some(handler) = on_activate {
                    handler.call(());
                }
            }
        },
        {children}
    })
}
