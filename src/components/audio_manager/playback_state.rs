//! The playback queue and its transport flags.
//!
//! `PlaybackState` is a plain value: every mutation is a total function over
//! it, and the navigation predicates are computed from the current fields on
//! each call rather than cached. The reactive wrapper lives in `store`.

use rand::Rng;

use crate::api::Episode;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaybackState {
    queue: Vec<Episode>,
    current_index: usize,
    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,
}

impl PlaybackState {
    pub fn queue(&self) -> &[Episode] {
        &self.queue
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_episode(&self) -> Option<&Episode> {
        self.queue.get(self.current_index)
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.is_shuffling || self.current_index + 1 < self.queue.len()
    }

    /// Play a single episode outside of any list.
    pub fn play(&mut self, episode: Episode) {
        self.queue = vec![episode];
        self.current_index = 0;
        self.is_playing = true;
    }

    /// Replace the queue and start at `index`, clamped into the list.
    pub fn play_list(&mut self, episodes: Vec<Episode>, index: usize) {
        let last = episodes.len().saturating_sub(1);
        if index > last {
            tracing::warn!(index, len = episodes.len(), "play_list index out of range, clamping");
        }
        self.queue = episodes;
        self.current_index = index.min(last);
        self.is_playing = true;
    }

    pub fn play_next(&mut self) {
        self.play_next_with(&mut rand::thread_rng());
    }

    /// Advance using `rng` for shuffle picks. Shuffle may land on the
    /// current episode again.
    pub fn play_next_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.is_shuffling {
            self.current_index = if self.queue.is_empty() {
                0
            } else {
                rng.gen_range(0..self.queue.len())
            };
        } else if self.has_next() {
            self.current_index += 1;
        }
    }

    pub fn play_previous(&mut self) {
        if self.has_previous() {
            self.current_index -= 1;
        }
    }

    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
    }

    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
    }

    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
    }

    pub fn set_playing_state(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    /// Empty the queue. The playing flag is left untouched; the player
    /// reconciles it once the handle reports the pause.
    pub fn clear_player_state(&mut self) {
        self.queue.clear();
        self.current_index = 0;
    }
}
