use chrono::{Datelike, Local, Weekday};
use dioxus::prelude::*;

use crate::client::component::{Card, Hero, Page};
use crate::client::constant::SITE_NAME;
use crate::model::schedule::{weekday_label, ScheduleEntry};
use crate::model::voice::ChannelOccupancy;

#[cfg(feature = "web")]
use crate::client::effect::random::MathRandom;
use crate::model::entropy::Entropy;
#[cfg(not(feature = "web"))]
use crate::model::entropy::FixedEntropy;

const SCHEDULE: [ScheduleEntry; 7] = [
    ScheduleEntry {
        day: Weekday::Mon,
        title: "Minecraft Monday",
        time: "7:00 PM",
        description: "Group builds and base tours on the survival server",
    },
    ScheduleEntry {
        day: Weekday::Tue,
        title: "Chill & Chat",
        time: "8:00 PM",
        description: "No agenda, just voices",
    },
    ScheduleEntry {
        day: Weekday::Wed,
        title: "Music Night",
        time: "8:30 PM",
        description: "Shared queue, everyone adds three tracks",
    },
    ScheduleEntry {
        day: Weekday::Thu,
        title: "Game Night",
        time: "8:00 PM",
        description: "Party games voted on in #game-night",
    },
    ScheduleEntry {
        day: Weekday::Fri,
        title: "Movie Night",
        time: "9:00 PM",
        description: "Watch-along in the theater channel",
    },
    ScheduleEntry {
        day: Weekday::Sat,
        title: "Tournament",
        time: "5:00 PM",
        description: "Bracketed matches with a pinned prize",
    },
    ScheduleEntry {
        day: Weekday::Sun,
        title: "Community Meeting",
        time: "6:00 PM",
        description: "Announcements, suggestions, and staff Q&A",
    },
];

struct ChannelSpec {
    name: &'static str,
    capacity: u32,
    description: &'static str,
}

const CHANNELS: [ChannelSpec; 4] = [
    ChannelSpec {
        name: "🎮 Gaming Lounge",
        capacity: 20,
        description: "Main hangout for game sessions",
    },
    ChannelSpec {
        name: "🎬 Theater",
        capacity: 30,
        description: "Movie and stream watch-alongs",
    },
    ChannelSpec {
        name: "🎵 Music Corner",
        capacity: 15,
        description: "Listening parties and open mic",
    },
    ChannelSpec {
        name: "🤫 Quiet Study",
        capacity: 10,
        description: "Cameras off, focus on",
    },
];

#[component]
pub fn VoiceChat() -> Element {
    let today = use_hook(|| Local::now().weekday());

    rsx! {
        Title { "Voice Chat Events - {SITE_NAME}" }
        Page {
            class: "voice-chat-page",
            Hero {
                title: "Voice Chat Events",
                subtitle: "Something happening every night of the week.",
            }
            section {
                class: "schedule",
                h2 { class: "section-title", "Weekly schedule" }
                div {
                    class: "card-grid",
                    for entry in SCHEDULE {
                        ScheduleCard {
                            day: entry.day,
                            title: "{entry.title}",
                            time: "{entry.time}",
                            description: "{entry.description}",
                            is_today: entry.is_today(today),
                        }
                    }
                }
            }
            section {
                class: "channels",
                h2 { class: "section-title", "Voice channels" }
                div {
                    class: "card-grid",
                    for channel in CHANNELS {
                        ChannelCard {
                            name: "{channel.name}",
                            capacity: channel.capacity,
                            description: "{channel.description}",
                        }
                    }
                }
            }
        }
    }
}

/// One schedule slot. The card whose weekday is the current one carries the
/// highlight style and the TODAY badge; re-rendering can never stack a
/// second badge because it is part of the declarative tree.
#[component]
fn ScheduleCard(
    day: Weekday,
    title: String,
    time: String,
    description: String,
    is_today: bool,
) -> Element {
    let day_label = weekday_label(day);
    let card_class = if is_today { "schedule-card today" } else { "schedule-card" };

    rsx!(Card {
        title: "{title}",
        class: card_class,
        if is_today {
            span { class: "today-badge", "TODAY" }
        }
        p { class: "schedule-day", "{day_label}" }
        h3 { "{title}" }
        p { class: "schedule-time", "{time}" }
        p { class: "schedule-description", "{description}" }
    })
}

/// One voice channel with its simulated occupancy, drawn once at mount.
#[component]
fn ChannelCard(name: String, capacity: u32, description: String) -> Element {
    let occupancy = use_hook(|| {
        #[cfg(feature = "web")]
        let mut entropy = MathRandom;
        #[cfg(not(feature = "web"))]
        let mut entropy = FixedEntropy::new(vec![0.0]);

        ChannelOccupancy::simulate(capacity, entropy.roll())
    });
    let occupancy_color = occupancy.color();
    let occupancy_label = occupancy.label();

    rsx!(Card {
        title: "{name}",
        class: "channel-card",
        h3 { "{name}" }
        div {
            class: "channel-info",
            p { class: "channel-capacity", "Capacity: {capacity}" }
            p { class: "channel-description", "{description}" }
            p {
                class: "channel-occupancy",
                style: "color: {occupancy_color};",
                "{occupancy_label}"
            }
        }
    })
}
