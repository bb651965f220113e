use dioxus::prelude::*;

use crate::components::{
    bind_source, finish_track, rebind_progress, seek, sync_playback, use_player_store,
    AudioElementHandle, Icon, MediaHandle, TimeUpdateSubscription, TrackEnd, AUDIO_ELEMENT_ID,
};
use crate::utils::format_duration;

mod controls;

use controls::TransportBar;

/// Persistent player shown beside every page.
#[component]
pub fn Player() -> Element {
    let store = use_player_store();
    let handle = use_hook(AudioElementHandle::new);
    let mut elapsed = use_signal(|| 0u32);
    let mut progress_subscription = use_signal(|| None::<TimeUpdateSubscription>);

    let current_episode = use_memo(move || store.current_episode());
    let is_playing = use_memo(move || store.is_playing());
    let is_looping = use_memo(move || store.is_looping());

    // Rebind the source whenever the episode changes; the old time-update
    // listener belongs to the old source and goes with it.
    {
        let handle = handle.clone();
        use_effect(move || {
            let episode = current_episode();
            progress_subscription.set(None);
            bind_source(&handle, episode.as_ref());
        });
    }

    // Handle play/pause state changes.
    {
        let handle = handle.clone();
        use_effect(move || {
            sync_playback(&handle, is_playing());
        });
    }

    // Looping is delegated to the element; a looping episode never ends.
    {
        let handle = handle.clone();
        use_effect(move || {
            handle.set_looping(is_looping());
        });
    }

    let on_loaded_metadata = {
        let handle = handle.clone();
        move |_| {
            progress_subscription.with_mut(|slot| {
                rebind_progress(slot, &handle, move |seconds| elapsed.set(seconds))
            });
        }
    };

    let on_ended = move |_| {
        let mut queue = store;
        match finish_track(&mut queue) {
            TrackEnd::Advanced => tracing::debug!("episode ended, advancing"),
            TrackEnd::Cleared => tracing::info!("queue finished"),
        }
    };

    let episode = current_episode();
    let duration = episode.as_ref().map(|e| e.duration).unwrap_or(0);

    let on_seek = {
        let handle = handle.clone();
        move |e: Event<FormData>| {
            if let Ok(value) = e.value().parse::<f64>() {
                let target = value.round().max(0.0) as u32;
                elapsed.set(seek(&handle, duration, target));
            }
        }
    };

    rsx! {
        aside { class: "player-container",
            header {
                Icon { name: "headphones".to_string(), class: "w-8 h-8".to_string() }
                strong { "Playing now" }
            }

            {
                match &episode {
                    Some(episode) => rsx! {
                        div { class: "current-episode",
                            img {
                                src: "{episode.thumbnail}",
                                alt: "{episode.title}",
                                width: "592",
                                height: "592",
                                loading: "lazy",
                            }
                            strong { "{episode.title}" }
                            span { "{episode.members}" }
                        }
                    },
                    None => rsx! {
                        div { class: "empty-player",
                            Icon { name: "music".to_string(), class: "w-10 h-10".to_string() }
                            strong { "Select a podcast to listen to" }
                        }
                    },
                }
            }

            footer { class: if episode.is_none() { "empty" } else { "" },
                div { class: "progress",
                    span { "{format_duration(elapsed())}" }
                    div { class: "slider",
                        if episode.is_some() {
                            input {
                                r#type: "range",
                                min: "0",
                                max: "{duration}",
                                step: "1",
                                value: "{elapsed()}",
                                aria_label: "Seek",
                                oninput: on_seek,
                            }
                        } else {
                            div { class: "empty-slider" }
                        }
                    }
                    span { "{format_duration(duration)}" }
                }

                audio {
                    id: AUDIO_ELEMENT_ID,
                    autoplay: true,
                    preload: "metadata",
                    onloadedmetadata: on_loaded_metadata,
                    onended: on_ended,
                    onplay: move |_| store.set_playing_state(true),
                    onpause: move |_| store.set_playing_state(false),
                }

                TransportBar {}
            }
        }
    }
}
