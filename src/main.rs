mod client;
mod model;

#[cfg(feature = "web")]
use client::App;

use dioxus_logger::tracing::Level;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");

    #[cfg(feature = "web")]
    dioxus::launch(App);
}
