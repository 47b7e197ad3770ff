use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::effect::observer;

/// Transparent single-pixel GIF shown until the real source loads.
const PLACEHOLDER_SRC: &str =
    "data:image/gif;base64,R0lGODlhAQABAAAAACH5BAEKAAEALAAAAAABAAEAAAICTAEAOw==";

/// Image that defers fetching its real source until it first scrolls into
/// view, on top of the browser's own `loading="lazy"` default.
#[component]
pub fn LazyImage(src: String, alt: String, class: Option<&'static str>) -> Element {
    let class = class.unwrap_or_default();
    let mut visible = use_signal(|| false);

    rsx!(img {
        class: "lazy-image {class}",
        class: if visible() { "loaded" },
        src: if visible() { src.clone() } else { PLACEHOLDER_SRC.to_string() },
        alt: "{alt}",
        loading: "lazy",
        onmounted: move |event| {
            #[cfg(feature = "web")]
            {
                use dioxus::web::WebEventExt;

                let element = event.data().as_web_event();
                let watch = observer::observe_once(&element, 0.0, "0px", move || {
                    visible.set(true);
                });
                if let Err(err) = watch {
                    tracing::warn!("lazy image observer failed: {err}");
                    visible.set(true);
                }
            }
            #[cfg(not(feature = "web"))]
            {
                let _ = &event;
                visible.set(true);
            }
        },
    })
}
