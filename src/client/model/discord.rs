use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::constant::{DISCORD_INVITE, DISCORD_USER_URL, SITE_NAME};

/// Destination of a pending Discord redirect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiscordTarget {
    ServerInvite,
    UserProfile { username: String },
}

impl DiscordTarget {
    pub fn url(&self) -> String {
        match self {
            DiscordTarget::ServerInvite => DISCORD_INVITE.to_string(),
            DiscordTarget::UserProfile { username } => format!("{DISCORD_USER_URL}{username}"),
        }
    }

    /// Question shown in the confirmation dialog before redirecting.
    pub fn prompt(&self) -> String {
        match self {
            DiscordTarget::ServerInvite => {
                format!("Join {SITE_NAME} Discord Server? This will redirect you to Discord.")
            }
            DiscordTarget::UserProfile { username } => {
                format!("Open Discord profile for {username}? This will redirect you to Discord.")
            }
        }
    }
}

/// Pending Discord redirect awaiting explicit confirmation.
///
/// Every Discord deep link on the site routes through this store, so each
/// one gets the same blocking dialog. Declining simply closes the dialog
/// with no side effect.
#[derive(Clone, Copy)]
pub struct DiscordPrompt {
    pub show: Signal<bool>,
    target: Signal<Option<DiscordTarget>>,
}

impl DiscordPrompt {
    pub fn new() -> Self {
        Self {
            show: Signal::new(false),
            target: Signal::new(None),
        }
    }

    pub fn request(&mut self, target: DiscordTarget) {
        self.target.set(Some(target));
        self.show.set(true);
    }

    pub fn pending(&self) -> Option<DiscordTarget> {
        self.target.read().clone()
    }

    /// Confirms the pending redirect, opening it in a new browsing context.
    pub fn confirm(&mut self) {
        let target = self.target.peek().clone();
        if let Some(target) = target {
            tracing::info!("confirmed Discord redirect to {}", target.url());
            #[cfg(feature = "web")]
            if let Err(err) = crate::client::effect::browser::open_in_new_tab(&target.url()) {
                tracing::warn!("Discord redirect failed: {err}");
            }
        }
        self.show.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the invite and profile URLs.
    ///
    /// Expected: invite constant for the server, users/<name> for profiles
    #[test]
    fn targets_build_expected_urls() {
        assert_eq!(DiscordTarget::ServerInvite.url(), DISCORD_INVITE);
        let profile = DiscordTarget::UserProfile {
            username: "purple.prime".into(),
        };
        assert_eq!(profile.url(), "https://discord.com/users/purple.prime");
    }

    /// Tests the confirmation wording for both targets.
    ///
    /// Expected: site name in the invite prompt, username in the profile
    /// prompt, both mention the redirect
    #[test]
    fn prompts_name_their_destination() {
        assert!(DiscordTarget::ServerInvite.prompt().contains(SITE_NAME));
        let profile = DiscordTarget::UserProfile {
            username: "unknown001010".into(),
        };
        assert!(profile.prompt().contains("unknown001010"));
        assert!(profile.prompt().contains("redirect you to Discord"));
    }
}
