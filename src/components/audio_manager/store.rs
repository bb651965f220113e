use dioxus::prelude::*;

use crate::api::Episode;
use crate::components::audio_manager::{PlaybackState, QueueNavigator};

/// Shared handle to the session's playback state.
///
/// Every mutator writes through the signal, so all readers re-render once per
/// change. Pages produce into it with `play`/`play_list`; the player consumes
/// it. Nothing else writes the state.
#[derive(Clone, Copy, PartialEq)]
pub struct PlayerStore {
    state: Signal<PlaybackState>,
}

impl PlayerStore {
    pub fn new(state: Signal<PlaybackState>) -> Self {
        Self { state }
    }

    /// Subscribing read of the whole state.
    pub fn snapshot(&self) -> PlaybackState {
        self.state.read().clone()
    }

    pub fn current_episode(&self) -> Option<Episode> {
        self.state.read().current_episode().cloned()
    }

    pub fn is_playing(&self) -> bool {
        self.state.read().is_playing()
    }

    pub fn is_looping(&self) -> bool {
        self.state.read().is_looping()
    }

    fn update(&self, action: &str, f: impl FnOnce(&mut PlaybackState)) {
        let mut state = self.state;
        state.with_mut(|state| {
            f(state);
            tracing::debug!(
                action,
                index = state.current_index(),
                queued = state.queue().len(),
                playing = state.is_playing(),
                "playback state changed"
            );
        });
    }

    pub fn play(&self, episode: Episode) {
        tracing::info!(title = %episode.title, "playing episode");
        self.update("play", |s| s.play(episode));
    }

    pub fn play_list(&self, episodes: Vec<Episode>, index: usize) {
        self.update("play_list", |s| s.play_list(episodes, index));
    }

    pub fn play_next(&self) {
        self.update("play_next", PlaybackState::play_next);
    }

    pub fn play_previous(&self) {
        self.update("play_previous", PlaybackState::play_previous);
    }

    pub fn toggle_play(&self) {
        self.update("toggle_play", PlaybackState::toggle_play);
    }

    pub fn toggle_loop(&self) {
        self.update("toggle_loop", PlaybackState::toggle_loop);
    }

    pub fn toggle_shuffle(&self) {
        self.update("toggle_shuffle", PlaybackState::toggle_shuffle);
    }

    /// Reconcile with what the handle reports. Skips the write when nothing
    /// changes so echoed play/pause events don't re-render.
    pub fn set_playing_state(&self, playing: bool) {
        if self.state.peek().is_playing() != playing {
            self.update("set_playing_state", |s| s.set_playing_state(playing));
        }
    }

    pub fn clear_player_state(&self) {
        self.update("clear_player_state", PlaybackState::clear_player_state);
    }
}

impl QueueNavigator for PlayerStore {
    fn has_next(&self) -> bool {
        self.state.peek().has_next()
    }

    fn play_next(&mut self) {
        PlayerStore::play_next(self)
    }

    fn clear_player_state(&mut self) {
        PlayerStore::clear_player_state(self)
    }
}

/// Create the session's store and provide it to every descendant.
pub fn use_player_store_provider() -> PlayerStore {
    let state = use_signal(PlaybackState::default);
    use_context_provider(|| PlayerStore::new(state))
}

pub fn use_player_store() -> PlayerStore {
    use_context::<PlayerStore>()
}
