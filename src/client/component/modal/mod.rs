pub mod confirmation_modal;

use dioxus::prelude::*;

pub use confirmation_modal::ConfirmationModal;

#[component]
pub fn Modal(mut show: Signal<bool>, title: String, children: Element) -> Element {
    // Focus the dialog when it opens.
    #[cfg(feature = "web")]
    use_effect(move || {
        if show() {
            document::eval(r#"document.querySelector('.modal-open')?.focus()"#);
        }
    });

    rsx!(
        div {
            class: if show() { "modal modal-open" } else { "modal" },
            tabindex: "-1",
            role: "dialog",
            aria_modal: "true",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    show.set(false);
                }
            },
            div {
                class: "modal-box",
                div {
                    class: "modal-header",
                    h3 {
                        class: "modal-title",
                        "{title}"
                    }
                    button {
                        class: "modal-close",
                        aria_label: "Close dialog",
                        onclick: move |_| show.set(false),
                        "✕"
                    }
                }
                div {
                    {children}
                }
            }
            div {
                class: "modal-backdrop",
                onclick: move |_| show.set(false),
            }
        }
    )
}
