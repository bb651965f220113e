use crate::components::{use_player_store, Icon, TransportControls};
use dioxus::prelude::*;

const BUTTON_CLASS: &str = "transport-button";
const ACTIVE_CLASS: &str = "transport-button is-active";

/// Shuffle, previous, play/pause, next and loop, each enabled per the
/// current queue position.
#[component]
pub(super) fn TransportBar() -> Element {
    let store = use_player_store();
    let state = store.snapshot();
    let controls = TransportControls::for_state(&state);
    let playing = state.is_playing();

    rsx! {
        div { class: "buttons",
            button {
                id: "shuffle-btn",
                r#type: "button",
                aria_label: "Shuffle",
                class: if state.is_shuffling() { ACTIVE_CLASS } else { BUTTON_CLASS },
                disabled: controls.shuffle_disabled,
                onclick: move |_| store.toggle_shuffle(),
                Icon { name: "shuffle".to_string(), class: "w-5 h-5".to_string() }
            }
            button {
                id: "prev-btn",
                r#type: "button",
                aria_label: "Play previous",
                class: BUTTON_CLASS,
                disabled: controls.previous_disabled,
                onclick: move |_| store.play_previous(),
                Icon { name: "prev".to_string(), class: "w-5 h-5".to_string() }
            }
            button {
                id: "play-pause-btn",
                r#type: "button",
                aria_label: if playing { "Pause" } else { "Play" },
                class: "{BUTTON_CLASS} play-button",
                disabled: controls.play_pause_disabled,
                onclick: move |_| store.toggle_play(),
                if playing {
                    Icon { name: "pause".to_string(), class: "w-6 h-6".to_string() }
                } else {
                    Icon { name: "play".to_string(), class: "w-6 h-6".to_string() }
                }
            }
            button {
                id: "next-btn",
                r#type: "button",
                aria_label: "Play next",
                class: BUTTON_CLASS,
                disabled: controls.next_disabled,
                onclick: move |_| store.play_next(),
                Icon { name: "next".to_string(), class: "w-5 h-5".to_string() }
            }
            button {
                id: "loop-btn",
                r#type: "button",
                aria_label: "Repeat",
                class: if state.is_looping() { ACTIVE_CLASS } else { BUTTON_CLASS },
                disabled: controls.loop_disabled,
                onclick: move |_| store.toggle_loop(),
                Icon { name: "repeat".to_string(), class: "w-5 h-5".to_string() }
            }
        }
    }
}
