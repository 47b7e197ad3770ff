use dioxus::prelude::*;

use crate::client::{
    constant::SITE_NAME,
    model::{discord::DiscordPrompt, toast::Toasts, ui::UiEffects},
    router::Route,
};

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    use_context_provider(Toasts::new);
    use_context_provider(DiscordPrompt::new);
    use_context_provider(UiEffects::new);

    rsx! {
        Title { "{SITE_NAME} - Discord Server" }
        document::Link { rel: "icon", href: FAVICON }
        document::Meta {
            name: "description",
            content: " Community hub for the BLACKFLAME NOVA Discord and Minecraft server "
        }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
