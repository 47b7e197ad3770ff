use dioxus::prelude::*;

use crate::model::counter::CounterTween;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::effect::observer;
#[cfg(feature = "web")]
use crate::model::counter::TWEEN_TICK_MS;

/// Stat number that counts up from zero the first time it scrolls into
/// view, keeping any non-digit suffix ("150+" starts at "0+"). Runs once.
#[component]
pub fn StatCounter(value: String, label: String) -> Element {
    let tween = use_hook(|| CounterTween::parse(&value));
    let mut display = use_signal({
        let tween = tween.clone();
        move || tween.frame(0)
    });
    let mut started = use_signal(|| false);

    #[cfg(feature = "web")]
    {
        let tween = tween.clone();
        use_effect(move || {
            if !started() {
                return;
            }
            let tween = tween.clone();
            spawn(async move {
                let mut elapsed = 0;
                loop {
                    display.set(tween.frame(elapsed));
                    if tween.is_done(elapsed) {
                        break;
                    }
                    gloo_timers::future::TimeoutFuture::new(TWEEN_TICK_MS).await;
                    elapsed += TWEEN_TICK_MS;
                }
            });
        });
    }
    #[cfg(not(feature = "web"))]
    use_effect(move || {
        if started() {
            display.set(tween.frame(crate::model::counter::TWEEN_DURATION_MS));
        }
    });

    rsx!(div {
        class: "stat",
        span {
            class: "stat-number",
            onmounted: move |event| {
                #[cfg(feature = "web")]
                {
                    use dioxus::web::WebEventExt;

                    let element = event.data().as_web_event();
                    let watch = observer::observe_once(&element, 0.0, "0px", move || {
                        started.set(true);
                    });
                    if let Err(err) = watch {
                        tracing::warn!("counter observer failed: {err}");
                        started.set(true);
                    }
                }
                #[cfg(not(feature = "web"))]
                {
                    let _ = &event;
                    started.set(true);
                }
            },
            "{display}"
        }
        span {
            class: "stat-label",
            "{label}"
        }
    })
}
