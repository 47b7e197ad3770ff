use dioxus::prelude::*;

use crate::client::component::{Card, Hero, Page};
use crate::client::constant::{BEDROCK_IP, BEDROCK_PORT, MINECRAFT_JAVA_IP, SITE_NAME};
use crate::client::model::toast::Toasts;
use crate::model::ping::PingSample;
use crate::model::status::ServerStatus;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::constant::{COPY_PULSE_MS, PING_POLL_MS, STATUS_POLL_MS};
#[cfg(feature = "web")]
use crate::client::effect::{clipboard, random::MathRandom};
#[cfg(feature = "web")]
use crate::model::entropy::Entropy;
#[cfg(feature = "web")]
use crate::model::status::{SimulatedStatus, StatusSource};

#[component]
pub fn Minecraft() -> Element {
    let mut status = use_signal(|| None::<ServerStatus>);
    let mut ping = use_signal(|| None::<PingSample>);

    // Fresh status on load, then one check per poll period. The source is
    // the simulated provider; swapping in a real probe means swapping this
    // constructor.
    #[cfg(feature = "web")]
    use_future(move || async move {
        let mut source = SimulatedStatus::new(MathRandom);
        loop {
            status.set(Some(source.poll()));
            gloo_timers::future::TimeoutFuture::new(STATUS_POLL_MS).await;
        }
    });

    #[cfg(feature = "web")]
    use_future(move || async move {
        let mut entropy = MathRandom;
        loop {
            ping.set(Some(PingSample::from_roll(entropy.roll())));
            gloo_timers::future::TimeoutFuture::new(PING_POLL_MS).await;
        }
    });

    rsx! {
        Title { "Minecraft Server - {SITE_NAME}" }
        Page {
            class: "minecraft-page",
            Hero {
                title: "Minecraft Server",
                subtitle: "Cross-play survival, no whitelist, backed up daily.",
                StatusBanner { status }
            }
            section {
                class: "server-info",
                h2 { class: "section-title", "How to connect" }
                div {
                    class: "server-info-content card-grid",
                    Card {
                        title: "Java Edition",
                        class: "connection-card",
                        h3 { "Java Edition" }
                        code {
                            id: "java-ip",
                            class: "connection-value",
                            {MINECRAFT_JAVA_IP}
                        }
                        CopyButton { text: "{MINECRAFT_JAVA_IP}" }
                    }
                    Card {
                        title: "Bedrock Edition",
                        class: "connection-card",
                        h3 { "Bedrock Edition" }
                        code {
                            id: "bedrock-ip",
                            class: "connection-value",
                            "{BEDROCK_IP}:{BEDROCK_PORT}"
                        }
                        CopyButton { text: "{BEDROCK_IP}:{BEDROCK_PORT}" }
                    }
                }
                PingPanel { ping }
            }
        }
    }
}

#[component]
fn StatusBanner(status: Signal<Option<ServerStatus>>) -> Element {
    rsx!(div {
        class: "server-status",
        match status() {
            Some(current) => {
                let color = current.color();
                rsx! {
                    span { class: current.dot_class() }
                    span {
                        class: "status-text",
                        style: "color: {color};",
                        {current.label()}
                    }
                }
            }
            None => rsx! {
                span { class: "status-dot" }
                span { class: "status-text", "CHECKING STATUS..." }
            },
        }
    })
}

#[component]
fn PingPanel(ping: Signal<Option<PingSample>>) -> Element {
    rsx!(div {
        class: "server-ping",
        span {
            class: "ping-text",
            "🏓 Server Ping: "
            match ping() {
                Some(sample) => {
                    let color = sample.quality().color();
                    let ms = sample.millis();
                    rsx! {
                        span {
                            id: "ping-value",
                            style: "color: {color};",
                            "{ms}"
                        }
                    }
                }
                None => rsx! {
                    span { id: "ping-value", "..." }
                },
            }
            "ms"
        }
    })
}

/// Copies the connection string, pulses its label, and reports through a
/// toast. A total copy failure is only logged.
#[component]
fn CopyButton(text: String) -> Element {
    let mut pulsed = use_signal(|| false);
    let toasts = use_context::<Toasts>();

    rsx!(button {
        class: if pulsed() { "copy-btn copied" } else { "copy-btn" },
        aria_label: "Copy server address",
        onclick: move |_| {
            #[cfg(feature = "web")]
            {
                let text = text.clone();
                let mut toasts = toasts;
                spawn(async move {
                    match clipboard::copy_text(&text).await {
                        Ok(path) => {
                            tracing::info!("copied server address via {path:?}");
                            toasts.success("Server IP copied to clipboard!");
                            pulsed.set(true);
                            gloo_timers::future::TimeoutFuture::new(COPY_PULSE_MS).await;
                            pulsed.set(false);
                        }
                        Err(err) => tracing::warn!("copy failed: {err}"),
                    }
                });
            }
        },
        if pulsed() { "✅ Copied!" } else { "📋 Copy" }
    })
}
