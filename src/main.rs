use dioxus::prelude::*;

mod api;
mod components;
mod settings;
mod utils;

use components::AppView;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Podcastr" }
        document::Meta { name: "theme-color", content: "#8257e5" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }

        document::Stylesheet { href: APP_CSS }

        Router::<AppView> {}
    }
}
