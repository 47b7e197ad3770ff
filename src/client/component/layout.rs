use dioxus::prelude::*;

use crate::client::component::{ConfirmationModal, Footer, Header, ToastHost};
use crate::client::model::{discord::DiscordPrompt, ui::UiEffects};
use crate::client::router::Route;

#[cfg(feature = "web")]
use crate::client::constant::RAINBOW_DURATION_MS;

#[cfg(feature = "web")]
const SERVICE_WORKER: Asset = asset!("/assets/sw.js");

#[component]
pub fn Layout() -> Element {
    let ui = use_context::<UiEffects>();
    let discord = use_context::<DiscordPrompt>();
    let rainbow = ui.rainbow;
    let reduced_motion = ui.reduced_motion;

    // Startup wiring, guarded so a re-render can never attach the document
    // listeners twice.
    #[cfg(feature = "web")]
    {
        let mut wired = use_signal(|| false);
        let nav = navigator();
        use_effect(move || {
            if *wired.peek() {
                return;
            }
            wired.set(true);
            crate::client::bootstrap::run(ui, discord, nav, SERVICE_WORKER.to_string());
        });
    }

    // The Konami rainbow switches itself off after its run.
    #[cfg(feature = "web")]
    use_effect(move || {
        if rainbow() {
            let mut rainbow = rainbow;
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(RAINBOW_DURATION_MS).await;
                rainbow.set(false);
            });
        }
    });

    rsx!(div {
        class: "app",
        class: if rainbow() { "rainbow" },
        class: if reduced_motion() { "reduced-motion" },
        a {
            class: "skip-nav",
            href: "#main-content",
            "Skip to main content"
        }
        Header {}
        main {
            id: "main-content",
            Outlet::<Route> {}
        }
        Footer {}
        ToastHost {}
        DiscordConfirm {}
    })
}

/// The one blocking dialog on the site: every Discord deep link funnels
/// through it.
#[component]
fn DiscordConfirm() -> Element {
    let mut discord = use_context::<DiscordPrompt>();
    let message = discord.pending().map(|target| target.prompt());

    rsx!(ConfirmationModal {
        show: discord.show,
        title: "Leaving the site",
        message: message.unwrap_or_default(),
        confirm_text: "Open Discord",
        on_confirm: move |_| discord.confirm(),
    })
}
