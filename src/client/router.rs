use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{Home, Minecraft, NotFound, SocialMedia, VoiceChat};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    #[route("/minecraft")]
    Minecraft {},

    #[route("/voice-chat")]
    VoiceChat {},

    #[route("/social-media")]
    SocialMedia {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
