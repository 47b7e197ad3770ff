use dioxus::prelude::*;

use crate::client::component::{Card, Hero, Page, StatCounter};
use crate::client::constant::SITE_NAME;
use crate::client::model::discord::{DiscordPrompt, DiscordTarget};
use crate::client::router::Route;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::constant::SCROLL_OFFSET_PX;
#[cfg(feature = "web")]
use crate::client::effect::scroll;

struct Feature {
    title: &'static str,
    emoji: &'static str,
    description: &'static str,
    destination: Option<Route>,
}

const FEATURES: [Feature; 4] = [
    Feature {
        title: "Minecraft Survival",
        emoji: "⛏️",
        description: "Cross-play survival server for Java and Bedrock, online around the clock.",
        destination: Some(Route::Minecraft {}),
    },
    Feature {
        title: "Voice Events",
        emoji: "🎙️",
        description: "Weekly game nights, movie watch-alongs, and late-night hangouts.",
        destination: Some(Route::VoiceChat {}),
    },
    Feature {
        title: "Social Media",
        emoji: "📱",
        description: "Clips, memes, and announcements across every platform we post on.",
        destination: Some(Route::SocialMedia {}),
    },
    Feature {
        title: "Active Community",
        emoji: "🔥",
        description: "Friendly members, fast mod responses, and zero tolerance for drama.",
        destination: None,
    },
];

#[component]
pub fn Home() -> Element {
    let mut discord = use_context::<DiscordPrompt>();
    let nav = navigator();

    rsx! {
        Title { "{SITE_NAME} - Discord Server" }
        Page {
            class: "home-page",
            Hero {
                title: "{SITE_NAME}",
                subtitle: "A community for Discord hangouts, Minecraft survival, and weekly voice events.",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| discord.request(DiscordTarget::ServerInvite),
                    "Join the Discord"
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| {
                        #[cfg(feature = "web")]
                        if let Err(err) = scroll::scroll_to_id("features", SCROLL_OFFSET_PX) {
                            tracing::warn!("anchor scroll failed: {err}");
                        }
                    },
                    "Explore features"
                }
            }
            section {
                id: "features",
                class: "features",
                h2 { class: "section-title", "What we do" }
                div {
                    class: "card-grid",
                    for feature in FEATURES {
                        Card {
                            title: "{feature.title}",
                            on_activate: move |_| {
                                match &feature.destination {
                                    Some(route) => {
                                        nav.push(route.clone());
                                    }
                                    None => discord.request(DiscordTarget::ServerInvite),
                                }
                            },
                            span { class: "card-emoji", aria_hidden: "true", "{feature.emoji}" }
                            h3 { "{feature.title}" }
                            p { "{feature.description}" }
                        }
                    }
                }
            }
            section {
                class: "stats",
                h2 { class: "section-title", "The numbers" }
                div {
                    class: "stat-grid",
                    Card {
                        title: "Members",
                        class: "stat-card",
                        StatCounter { value: "350+", label: "Members" }
                    }
                    Card {
                        title: "Weekly voice regulars",
                        class: "stat-card",
                        StatCounter { value: "120+", label: "Weekly voice regulars" }
                    }
                    Card {
                        title: "Minecraft builds",
                        class: "stat-card",
                        StatCounter { value: "85+", label: "Minecraft builds" }
                    }
                    Card {
                        title: "Messages a day",
                        class: "stat-card",
                        StatCounter { value: "1234+", label: "Messages a day" }
                    }
                }
            }
        }
    }
}
