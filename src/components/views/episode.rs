use dioxus::prelude::*;

use crate::api::{EpisodeDetails, PodcastClient};
use crate::components::{use_player_store, AppView, Icon};
use crate::settings::AppSettings;

#[component]
pub fn EpisodeView(slug: String) -> Element {
    let app_settings = use_context::<Signal<AppSettings>>();
    let episode = use_resource(use_reactive!(|slug| async move {
        PodcastClient::from_settings(&app_settings())
            .episode(&slug)
            .await
    }));

    let view = match &*episode.read() {
        Some(Ok(details)) => rsx! {
            EpisodeDetail { details: details.clone() }
        },
        Some(Err(err)) => rsx! {
            document::Title { "Episode not found | Podcastr" }
            div { class: "page-error",
                p { "Could not load this episode." }
                p { class: "page-error-detail", "{err}" }
                Link { to: AppView::Home {}, "Back to all episodes" }
            }
        },
        None => rsx! {
            div { class: "page-loading",
                Icon { name: "loader".to_string(), class: "w-8 h-8".to_string() }
            }
        },
    };
    view
}

#[component]
fn EpisodeDetail(details: EpisodeDetails) -> Element {
    let store = use_player_store();
    let episode = details.episode.clone();

    rsx! {
        document::Title { "{details.episode.title} | Podcastr" }
        div { class: "episode",
            div { class: "thumbnail-container",
                Link { to: AppView::Home {},
                    button { r#type: "button", aria_label: "Back",
                        Icon { name: "arrow-left".to_string(), class: "w-5 h-5".to_string() }
                    }
                }
                img {
                    src: "{details.episode.thumbnail}",
                    alt: "{details.episode.title}",
                    width: "700",
                    height: "160",
                }
                button {
                    r#type: "button",
                    aria_label: "Play episode",
                    onclick: move |_| store.play(episode.clone()),
                    Icon { name: "play".to_string(), class: "w-6 h-6".to_string() }
                }
            }

            header {
                h1 { "{details.episode.title}" }
                span { "{details.episode.members}" }
                span { "{details.published_at}" }
                span { "{details.duration_label}" }
            }

            div {
                class: "description",
                dangerous_inner_html: "{details.description}",
            }
        }
    }
}
