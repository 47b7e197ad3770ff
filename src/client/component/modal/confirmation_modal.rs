use dioxus::prelude::*;

use super::Modal;

/// Blocking yes/no dialog. Cancelling or dismissing it has no side effect;
/// only the confirm button fires `on_confirm`.
#[component]
pub fn ConfirmationModal(
    mut show: Signal<bool>,
    title: String,
    message: String,
    confirm_text: String,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx!(
        Modal {
            show,
            title,
            p {
                class: "modal-message",
                "{message}"
            }
            div {
                class: "modal-action",
                button {
                    r#type: "button",
                    class: "btn",
                    onclick: move |_| {
                        show.set(false);
                    },
                    "Cancel"
                }
                button {
                    r#type: "button",
                    class: "btn btn-primary",
                    onclick: move |_| {
                        on_confirm.call(());
                    },
                    "{confirm_text}"
                }
            }
        }
    )
}
