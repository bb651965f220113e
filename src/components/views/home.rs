use dioxus::prelude::*;

use crate::api::{EpisodeDetails, PodcastClient, HOME_EPISODE_LIMIT};
use crate::components::{use_player_store, AppView, Icon};
use crate::settings::AppSettings;

/// How many of the newest episodes get a card instead of a table row.
const LATEST_COUNT: usize = 2;

#[component]
pub fn Home() -> Element {
    let app_settings = use_context::<Signal<AppSettings>>();
    let episodes = use_resource(move || async move {
        let client = PodcastClient::from_settings(&app_settings());
        client.latest_episodes(HOME_EPISODE_LIMIT).await
    });

    rsx! {
        document::Title { "Home | Podcastr" }
        div { class: "homepage",
            {
                match &*episodes.read() {
                    Some(Ok(list)) => rsx! {
                        EpisodeListing { episodes: list.clone() }
                    },
                    Some(Err(err)) => rsx! {
                        div { class: "page-error",
                            p { "Could not load episodes." }
                            p { class: "page-error-detail", "{err}" }
                        }
                    },
                    None => rsx! {
                        div { class: "page-loading",
                            Icon { name: "loader".to_string(), class: "w-8 h-8".to_string() }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn EpisodeListing(episodes: Vec<EpisodeDetails>) -> Element {
    let store = use_player_store();

    if episodes.is_empty() {
        return rsx! {
            div { class: "page-empty", p { "No episodes published yet." } }
        };
    }

    // Playing from either section queues the whole page in display order.
    let playlist: Vec<_> = episodes.iter().map(|d| d.episode.clone()).collect();
    let split = episodes.len().min(LATEST_COUNT);
    let (latest, rest) = episodes.split_at(split);

    rsx! {
        section { class: "latest-episodes",
            h2 { "Latest releases" }
            ul {
                for (index, details) in latest.iter().enumerate() {
                    li { key: "{details.id}",
                        img {
                            src: "{details.episode.thumbnail}",
                            alt: "{details.episode.title}",
                            width: "192",
                            height: "192",
                            loading: "lazy",
                        }
                        div { class: "episode-details",
                            Link {
                                to: AppView::EpisodeView { slug: details.id.clone() },
                                "{details.episode.title}"
                            }
                            p { "{details.episode.members}" }
                            span { "{details.published_at}" }
                            span { "{details.duration_label}" }
                        }
                        button {
                            r#type: "button",
                            aria_label: "Play episode",
                            onclick: {
                                let playlist = playlist.clone();
                                move |_| store.play_list(playlist.clone(), index)
                            },
                            Icon { name: "play".to_string(), class: "w-6 h-6".to_string() }
                        }
                    }
                }
            }
        }

        if !rest.is_empty() {
            section { class: "all-episodes",
                h2 { "All episodes" }
                table {
                    thead {
                        tr {
                            th {}
                            th { "Podcast" }
                            th { "Members" }
                            th { "Date" }
                            th {
                                Icon { name: "clock".to_string(), class: "w-4 h-4".to_string() }
                            }
                            th {}
                        }
                    }
                    tbody {
                        for (offset, details) in rest.iter().enumerate() {
                            tr { key: "{details.id}",
                                td { style: "width: 72px;",
                                    img {
                                        src: "{details.episode.thumbnail}",
                                        alt: "{details.episode.title}",
                                        width: "120",
                                        height: "120",
                                        loading: "lazy",
                                    }
                                }
                                td {
                                    Link {
                                        to: AppView::EpisodeView { slug: details.id.clone() },
                                        "{details.episode.title}"
                                    }
                                }
                                td { "{details.episode.members}" }
                                td { style: "width: 100px;", "{details.published_at}" }
                                td { "{details.duration_label}" }
                                td {
                                    button {
                                        r#type: "button",
                                        aria_label: "Play episode",
                                        onclick: {
                                            let playlist = playlist.clone();
                                            move |_| store.play_list(playlist.clone(), split + offset)
                                        },
                                        Icon { name: "play".to_string(), class: "w-4 h-4".to_string() }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
