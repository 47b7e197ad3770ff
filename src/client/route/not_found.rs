use dioxus::prelude::*;

use crate::client::component::Page;
use crate::client::constant::SITE_NAME;
use crate::client::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Title { "Page not found - {SITE_NAME}" }
        Page {
            class: "not-found-page",
            div {
                class: "not-found",
                h1 { "404" }
                p { "Nothing lives at /{path}" }
                Link {
                    to: Route::Home {},
                    class: "btn btn-primary",
                    "Back home"
                }
            }
        }
    }
}
