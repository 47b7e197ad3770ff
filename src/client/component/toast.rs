use dioxus::prelude::*;

use crate::client::model::toast::Toasts;

/// Renders the toast queue in a fixed stack below the header.
#[component]
pub fn ToastHost() -> Element {
    let mut toasts = use_context::<Toasts>();

    rsx!(div {
        class: "toast-stack",
        aria_live: "polite",
        for toast in toasts.items() {
            div {
                key: "{toast.id}",
                class: toast.kind.class(),
                onclick: move |_| toasts.dismiss(toast.id),
                "{toast.message}"
            }
        }
    })
}
