use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaArrowUp, FaPrint, FaShareNodes},
    Icon,
};

use crate::client::constant::server_info;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::effect::{browser, scroll, share};
#[cfg(feature = "web")]
use crate::client::model::toast::Toasts;

#[component]
pub fn Footer() -> Element {
    let info = server_info();

    rsx!(footer {
        class: "footer",
        div {
            class: "footer-inner",
            div {
                class: "footer-credits",
                p { "Created by {info.team.creator} 🎨" }
                p { "Owned by {info.team.owner} 👑" }
            }
            div {
                class: "footer-actions",
                ShareButton {}
                button {
                    class: "action-btn",
                    aria_label: "Print this page",
                    onclick: move |_| {
                        #[cfg(feature = "web")]
                        if let Err(err) = browser::print_page() {
                            tracing::warn!("print failed: {err}");
                        }
                    },
                    Icon { width: 18, height: 18, icon: FaPrint }
                }
                button {
                    class: "action-btn",
                    aria_label: "Back to top",
                    onclick: move |_| {
                        #[cfg(feature = "web")]
                        scroll::scroll_to_top();
                    },
                    Icon { width: 18, height: 18, icon: FaArrowUp }
                }
            }
        }
    })
}

/// Native share sheet when the browser has one, otherwise copies the URL
/// and says so.
#[component]
fn ShareButton() -> Element {
    #[cfg(feature = "web")]
    let toasts = use_context::<Toasts>();

    rsx!(button {
        class: "action-btn",
        aria_label: "Share this page",
        onclick: move |_| {
            #[cfg(feature = "web")]
            {
                let mut toasts = toasts;
                spawn(async move {
                    match share::share_page("Check out BLACKFLAME NOVA Discord Server!").await {
                        Ok(share::ShareOutcome::UrlCopied) => {
                            toasts.info("URL copied to clipboard!");
                        }
                        Ok(share::ShareOutcome::SheetOpened) => {}
                        Err(err) => tracing::warn!("share failed: {err}"),
                    }
                });
            }
        },
        Icon { width: 18, height: 18, icon: FaShareNodes }
    })
}
