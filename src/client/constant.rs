use crate::model::server_info::{BedrockInfo, MinecraftInfo, ServerInfo, TeamInfo};

pub const SITE_NAME: &str = "BLACKFLAME NOVA";

// Replace with the live invite before deploying.
pub const DISCORD_INVITE: &str = "https://discord.gg/your-invite-code";
pub const DISCORD_USER_URL: &str = "https://discord.com/users/";
pub const DISCORD_WIDGET_URL: &str = "https://discord.com/widget?id=YOUR_SERVER_ID&theme=dark";

pub const MINECRAFT_JAVA_IP: &str = "cat.fi.freemcserver.net:41600";
pub const BEDROCK_IP: &str = "cat.fi.freemcserver.net";
pub const BEDROCK_PORT: &str = "41600";

/// Anchor scrolling stops this far above the target so the fixed header
/// does not cover it.
pub const SCROLL_OFFSET_PX: i32 = 80;
/// Scroll position past which the header switches to its opaque style.
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 50.0;
/// Quiet period for the debounced scroll handler.
pub const SCROLL_DEBOUNCE_MS: u32 = 100;

pub const STATUS_POLL_MS: u32 = 300_000;
pub const PING_POLL_MS: u32 = 10_000;

pub const LOGO_PULSE_PERIOD_MS: u32 = 3_000;
pub const LOGO_PULSE_HOLD_MS: u32 = 200;
pub const COPY_PULSE_MS: u32 = 2_000;
pub const PRESS_ANIMATION_MS: u32 = 150;
pub const RAINBOW_DURATION_MS: u32 = 10_000;
pub const HERO_PARTICLE_COUNT: usize = 20;

pub const AWAY_TITLE: &str = "💤 Come back to BLACKFLAME NOVA!";

/// Connection record handed to anything that needs the community's
/// addresses, instead of the global accessor the old markup reached for.
pub fn server_info() -> ServerInfo {
    ServerInfo {
        minecraft: MinecraftInfo {
            java: MINECRAFT_JAVA_IP.to_string(),
            bedrock: BedrockInfo {
                ip: BEDROCK_IP.to_string(),
                port: BEDROCK_PORT.to_string(),
            },
        },
        discord: DISCORD_INVITE.to_string(),
        team: TeamInfo {
            creator: "Ahsan (purple.prime)".to_string(),
            owner: "Tannej (unknown001010)".to_string(),
        },
    }
}
