use dioxus::prelude::*;

use crate::components::{use_player_store_provider, AppView, Header, Player};
use crate::settings::load_settings;

/// Layout shared by every route: the page on the left, the player pinned to
/// the right. The player store lives here so it survives navigation.
#[component]
pub fn AppShell() -> Element {
    let app_settings = use_signal(|| {
        let settings = load_settings();
        tracing::info!(api_url = %settings.api_url, "loaded settings");
        settings
    });
    use_context_provider(|| app_settings);
    use_player_store_provider();

    rsx! {
        div { class: "wrapper",
            main {
                Header {}
                Outlet::<AppView> {}
            }
            Player {}
        }
    }
}
