use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_brands_icons::{FaDiscord, FaTiktok, FaYoutube},
    Icon,
};
use dioxus_logger::tracing;

use crate::client::component::{Card, Hero, LazyImage, Page};
use crate::client::constant::{DISCORD_WIDGET_URL, SITE_NAME};
use crate::client::model::discord::{DiscordPrompt, DiscordTarget};

#[cfg(feature = "web")]
use crate::client::constant::PRESS_ANIMATION_MS;

struct TeamMember {
    name: &'static str,
    handle: &'static str,
    role: &'static str,
}

const TEAM: [TeamMember; 2] = [
    TeamMember {
        name: "Ahsan",
        handle: "purple.prime",
        role: "Creator 🎨",
    },
    TeamMember {
        name: "Tannej",
        handle: "unknown001010",
        role: "Owner 👑",
    },
];

#[component]
pub fn SocialMedia() -> Element {
    let mut discord = use_context::<DiscordPrompt>();

    rsx! {
        Title { "Social Media & Team - {SITE_NAME}" }
        Page {
            class: "social-page",
            Hero {
                title: "Social Media & Team",
                subtitle: "The people behind the server and everywhere else we post.",
            }
            section {
                class: "team",
                h2 { class: "section-title", "Meet the team" }
                div {
                    class: "card-grid",
                    for member in TEAM {
                        Card {
                            title: "{member.name}",
                            class: "team-card",
                            on_activate: move |_| {
                                discord.request(DiscordTarget::UserProfile {
                                    username: member.handle.to_string(),
                                });
                            },
                            LazyImage {
                                src: "https://mc-heads.net/avatar/{member.name}/96",
                                alt: "Minecraft avatar of {member.name}",
                                class: "team-avatar",
                            }
                            h3 { "{member.name}" }
                            p { class: "team-role", "{member.role}" }
                            p { class: "team-handle", "@{member.handle}" }
                        }
                    }
                }
            }
            section {
                class: "platforms",
                h2 { class: "section-title", "Follow us" }
                div {
                    class: "social-buttons",
                    SocialButton {
                        platform: "discord",
                        on_press: move |_| discord.request(DiscordTarget::ServerInvite),
                        Icon { width: 20, height: 20, icon: FaDiscord }
                        "Discord"
                    }
                    SocialButton {
                        platform: "youtube",
                        href: "https://www.youtube.com/@blackflamenova",
                        Icon { width: 20, height: 20, icon: FaYoutube }
                        "YouTube"
                    }
                    SocialButton {
                        platform: "tiktok",
                        href: "https://www.tiktok.com/@blackflamenova",
                        Icon { width: 20, height: 20, icon: FaTiktok }
                        "TikTok"
                    }
                }
            }
            section {
                class: "widget",
                h2 { class: "section-title", "Live on Discord" }
                iframe {
                    id: "discord-widget",
                    src: "{DISCORD_WIDGET_URL}",
                    width: "350",
                    height: "500",
                    title: "Discord server widget",
                    "sandbox": "allow-popups allow-popups-to-escape-sandbox allow-same-origin allow-scripts",
                }
            }
        }
    }
}

/// Platform link with click logging and a brief press animation. Buttons
/// without an `href` delegate to `on_press` (the Discord one routes through
/// the confirmation dialog).
#[component]
fn SocialButton(
    platform: String,
    href: Option<String>,
    on_press: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    let mut pressed = use_signal(|| false);

    let mut press = move |platform: &str| {
        tracing::info!("social click: {platform}");
        pressed.set(true);
        #[cfg(feature = "web")]
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(PRESS_ANIMATION_MS).await;
            pressed.set(false);
        });
    };

    match href {
        Some(href) => rsx!(a {
            class: if pressed() { "social-btn pressed" } else { "social-btn" },
            href: "{href}",
            target: "_blank",
            rel: "noreferrer",
            onclick: move |_| press(&platform),
            {children}
        }),
        None => rsx!(button {
            class: if pressed() { "social-btn pressed" } else { "social-btn" },
            onclick: move |_| {
                press(&platform);
                if let Some(handler) = on_press {
                    handler.call(());
                }
            },
            {children}
        }),
    }
}
