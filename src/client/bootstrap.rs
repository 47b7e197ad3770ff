//! Page-level wiring that runs once after the app mounts.
//!
//! Steps run in a fixed order and each one catches and logs its own
//! failure, so a broken browser API leaves the rest of the page behavior
//! running. Running the sequence a second time is harmless for everything
//! rendered declaratively, but callers still guard against it to avoid
//! stacking document listeners.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus::router::Navigator;
use dioxus_logger::tracing;
use wasm_bindgen::JsCast;

use crate::client::constant::{
    server_info, AWAY_TITLE, BEDROCK_IP, BEDROCK_PORT, MINECRAFT_JAVA_IP, SITE_NAME,
};
use crate::client::effect::{browser, listener, motion, worker, EffectError};
use crate::client::model::discord::{DiscordPrompt, DiscordTarget};
use crate::client::model::ui::UiEffects;
use crate::client::router::Route;
use crate::model::konami::KonamiDetector;

/// Runs the whole startup sequence. Must be called from a component scope
/// inside the router (it spawns futures and navigates).
pub fn run(ui: UiEffects, discord: DiscordPrompt, nav: Navigator, worker_url: String) {
    if let Err(err) = wire_keyboard(ui, discord, nav) {
        tracing::error!("keyboard wiring failed: {err}");
    }
    if let Err(err) = wire_visibility_title() {
        tracing::error!("visibility wiring failed: {err}");
    }
    if let Err(err) = apply_reduced_motion(ui) {
        tracing::error!("reduced-motion check failed: {err}");
    }
    register_offline_worker(worker_url);

    tracing::info!(
        "⚡ {SITE_NAME} loaded | Minecraft: {MINECRAFT_JAVA_IP} | Bedrock: {BEDROCK_IP}:{BEDROCK_PORT}"
    );
    tracing::debug!(
        "server info: {}",
        serde_json::to_string(&server_info()).unwrap_or_default()
    );
}

/// Global shortcuts (Ctrl/Cmd+K Discord, Ctrl/Cmd+M Minecraft) plus the
/// Konami easter egg.
fn wire_keyboard(
    ui: UiEffects,
    mut discord: DiscordPrompt,
    nav: Navigator,
) -> Result<(), EffectError> {
    let detector = Rc::new(RefCell::new(KonamiDetector::new()));

    listener::on_document("keydown", move |event| {
        let Some(key_event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
            return;
        };

        if key_event.ctrl_key() || key_event.meta_key() {
            match key_event.key().as_str() {
                "k" => {
                    key_event.prevent_default();
                    discord.request(DiscordTarget::ServerInvite);
                    return;
                }
                "m" => {
                    key_event.prevent_default();
                    nav.push(Route::Minecraft {});
                    return;
                }
                _ => {}
            }
        }

        if detector.borrow_mut().push(key_event.key_code()) {
            tracing::info!("🌈 rainbow mode activated");
            let mut rainbow = ui.rainbow;
            rainbow.set(true);
        }
    })
}

/// Swaps the tab title while the page is hidden and restores it on return.
fn wire_visibility_title() -> Result<(), EffectError> {
    let stored = Rc::new(RefCell::new(String::new()));

    listener::on_document("visibilitychange", move |_| {
        if browser::document_hidden() {
            if let Ok(title) = browser::document_title() {
                *stored.borrow_mut() = title;
            }
            if let Err(err) = browser::set_document_title(AWAY_TITLE) {
                tracing::warn!("title swap failed: {err}");
            }
        } else {
            let title = stored.borrow().clone();
            if !title.is_empty() {
                if let Err(err) = browser::set_document_title(&title) {
                    tracing::warn!("title restore failed: {err}");
                }
            }
        }
    })
}

fn apply_reduced_motion(ui: UiEffects) -> Result<(), EffectError> {
    if motion::prefers_reduced_motion()? {
        let mut reduced_motion = ui.reduced_motion;
        reduced_motion.set(true);
        tracing::info!("reduced motion requested, animations collapsed");
    }
    Ok(())
}

fn register_offline_worker(script_url: String) {
    spawn(async move {
        match worker::register(&script_url).await {
            Ok(()) => tracing::info!("service worker registered"),
            Err(err) => tracing::warn!("service worker registration failed: {err}"),
        }
    });
}
