use dioxus::prelude::*;

use crate::client::component::ParticleField;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class = class.unwrap_or_default();

    rsx!(
        div {
            class: "page {class}",
            {children}
        }
    )
}

/// Banner section at the top of each page, with the particle field floating
/// behind the copy.
#[component]
pub fn Hero(title: String, subtitle: String, children: Element) -> Element {
    rsx!(
        section {
            class: "hero",
            ParticleField {}
            div {
                class: "hero-content",
                h1 {
                    class: "hero-title",
                    "{title}"
                }
                p {
                    class: "hero-subtitle",
                    "{subtitle}"
                }
                div {
                    class: "hero-actions",
                    {children}
                }
            }
        }
    )
}
