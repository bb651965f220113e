//! Player-side rules for driving a `MediaHandle` from playback state.

use crate::api::Episode;
use crate::components::audio_manager::{MediaHandle, PlaybackState, TimeUpdateSubscription};

/// Queue navigation the end-of-track rule needs. Implemented by the plain
/// state and by the reactive store.
pub trait QueueNavigator {
    fn has_next(&self) -> bool;
    fn play_next(&mut self);
    fn clear_player_state(&mut self);
}

impl QueueNavigator for PlaybackState {
    fn has_next(&self) -> bool {
        PlaybackState::has_next(self)
    }

    fn play_next(&mut self) {
        PlaybackState::play_next(self)
    }

    fn clear_player_state(&mut self) {
        PlaybackState::clear_player_state(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackEnd {
    Advanced,
    Cleared,
}

/// Push the playing flag into the handle.
pub fn sync_playback(handle: &impl MediaHandle, playing: bool) {
    if playing {
        handle.play();
    } else {
        handle.pause();
    }
}

/// Point the handle at the current episode's media, or unbind and stop when
/// the queue has run dry.
pub fn bind_source(handle: &impl MediaHandle, episode: Option<&Episode>) {
    match episode {
        Some(episode) => handle.set_source(Some(&episode.url)),
        None => {
            handle.pause();
            handle.set_source(None);
        }
    }
}

/// Whole seconds elapsed for a reported handle position.
pub fn elapsed_seconds(position: f64) -> u32 {
    if position.is_finite() && position > 0.0 {
        position.floor().min(u32::MAX as f64) as u32
    } else {
        0
    }
}

/// Metadata for a freshly bound source has loaded: rewind, report zero
/// elapsed, and follow the handle's time updates from here on.
pub fn bind_progress(
    handle: &impl MediaHandle,
    mut on_elapsed: impl FnMut(u32) + 'static,
) -> TimeUpdateSubscription {
    handle.set_current_position(0.0);
    on_elapsed(elapsed_seconds(handle.current_position()));
    handle.on_time_update(Box::new(move |position| on_elapsed(elapsed_seconds(position))))
}

/// Replace the subscription held in `slot`. The old listener is detached
/// before the new one attaches.
pub fn rebind_progress(
    slot: &mut Option<TimeUpdateSubscription>,
    handle: &impl MediaHandle,
    on_elapsed: impl FnMut(u32) + 'static,
) {
    drop(slot.take());
    *slot = Some(bind_progress(handle, on_elapsed));
}

/// Jump to `target` seconds, clamped to the episode length. Returns the
/// elapsed value to show right away.
pub fn seek(handle: &impl MediaHandle, duration: u32, target: u32) -> u32 {
    let target = target.min(duration);
    handle.set_current_position(f64::from(target));
    target
}

/// Natural end of the current episode. Looping episodes never get here,
/// the handle replays them itself.
pub fn finish_track(queue: &mut impl QueueNavigator) -> TrackEnd {
    if queue.has_next() {
        queue.play_next();
        TrackEnd::Advanced
    } else {
        queue.clear_player_state();
        TrackEnd::Cleared
    }
}

/// Which transport buttons are disabled for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportControls {
    pub shuffle_disabled: bool,
    pub previous_disabled: bool,
    pub play_pause_disabled: bool,
    pub next_disabled: bool,
    pub loop_disabled: bool,
}

impl TransportControls {
    pub fn for_state(state: &PlaybackState) -> Self {
        let empty = state.current_episode().is_none();
        Self {
            shuffle_disabled: empty || state.queue().len() == 1,
            previous_disabled: empty || !state.has_previous(),
            play_pause_disabled: empty,
            next_disabled: empty || !state.has_next(),
            loop_disabled: empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Command {
        Play,
        Pause,
        SetPosition(f64),
        SetSource(Option<String>),
        SetLooping(bool),
        Subscribe,
        Unsubscribe,
    }

    /// Records every command and lets the test fire time updates.
    #[derive(Clone, Default)]
    struct FakeHandle {
        commands: Rc<RefCell<Vec<Command>>>,
        listener: Rc<RefCell<Option<Box<dyn FnMut(f64)>>>>,
        position: Rc<RefCell<f64>>,
    }

    impl FakeHandle {
        fn emit_time_update(&self, position: f64) {
            *self.position.borrow_mut() = position;
            if let Some(listener) = self.listener.borrow_mut().as_mut() {
                listener(position);
            }
        }

        fn commands(&self) -> Vec<Command> {
            self.commands.borrow().clone()
        }
    }

    impl MediaHandle for FakeHandle {
        fn play(&self) {
            self.commands.borrow_mut().push(Command::Play);
        }

        fn pause(&self) {
            self.commands.borrow_mut().push(Command::Pause);
        }

        fn current_position(&self) -> f64 {
            *self.position.borrow()
        }

        fn set_current_position(&self, seconds: f64) {
            *self.position.borrow_mut() = seconds;
            self.commands.borrow_mut().push(Command::SetPosition(seconds));
        }

        fn set_source(&self, url: Option<&str>) {
            self.commands
                .borrow_mut()
                .push(Command::SetSource(url.map(str::to_string)));
        }

        fn set_looping(&self, looping: bool) {
            self.commands.borrow_mut().push(Command::SetLooping(looping));
        }

        fn on_time_update(&self, callback: Box<dyn FnMut(f64)>) -> TimeUpdateSubscription {
            self.commands.borrow_mut().push(Command::Subscribe);
            *self.listener.borrow_mut() = Some(callback);
            let listener = self.listener.clone();
            let commands = self.commands.clone();
            TimeUpdateSubscription::new(move || {
                listener.borrow_mut().take();
                commands.borrow_mut().push(Command::Unsubscribe);
            })
        }
    }

    fn episode(title: &str, duration: u32) -> Episode {
        Episode {
            title: title.to_string(),
            members: "Equipe".to_string(),
            thumbnail: String::new(),
            duration,
            url: format!("https://cdn.test/{title}.m4a"),
        }
    }

    fn elapsed_probe() -> (Rc<RefCell<u32>>, impl FnMut(u32) + 'static) {
        let elapsed = Rc::new(RefCell::new(99));
        let sink = elapsed.clone();
        (elapsed, move |value| *sink.borrow_mut() = value)
    }

    #[test]
    fn playing_flag_drives_play_and_pause() {
        let handle = FakeHandle::default();
        sync_playback(&handle, true);
        sync_playback(&handle, false);
        assert_eq!(handle.commands(), vec![Command::Play, Command::Pause]);
    }

    #[test]
    fn metadata_rewinds_and_tracks_whole_seconds() {
        let handle = FakeHandle::default();
        let (elapsed, sink) = elapsed_probe();

        let _subscription = bind_progress(&handle, sink);
        assert_eq!(*elapsed.borrow(), 0);
        assert_eq!(handle.current_position(), 0.0);

        handle.emit_time_update(12.9);
        assert_eq!(*elapsed.borrow(), 12);
        handle.emit_time_update(13.01);
        assert_eq!(*elapsed.borrow(), 13);
    }

    #[test]
    fn dropping_subscription_stops_updates() {
        let handle = FakeHandle::default();
        let (elapsed, sink) = elapsed_probe();

        let subscription = bind_progress(&handle, sink);
        handle.emit_time_update(5.0);
        drop(subscription);
        handle.emit_time_update(30.0);

        assert_eq!(*elapsed.borrow(), 5);
        assert_eq!(handle.commands().last(), Some(&Command::Unsubscribe));
    }

    #[test]
    fn rebinding_replaces_previous_listener() {
        let handle = FakeHandle::default();
        let (first, first_sink) = elapsed_probe();
        let (second, second_sink) = elapsed_probe();

        let mut subscription = bind_progress(&handle, first_sink);
        handle.emit_time_update(40.0);
        drop(subscription);
        subscription = bind_progress(&handle, second_sink);
        handle.emit_time_update(2.5);

        assert_eq!(*first.borrow(), 40);
        assert_eq!(*second.borrow(), 2);
        drop(subscription);
    }

    #[test]
    fn repeated_metadata_keeps_the_newest_listener() {
        let handle = FakeHandle::default();
        let (elapsed, sink) = elapsed_probe();
        let mut slot = None;

        rebind_progress(&mut slot, &handle, |_| {});
        rebind_progress(&mut slot, &handle, sink);
        handle.emit_time_update(7.4);

        assert_eq!(*elapsed.borrow(), 7);
        assert_eq!(
            handle.commands(),
            vec![
                Command::SetPosition(0.0),
                Command::Subscribe,
                Command::Unsubscribe,
                Command::SetPosition(0.0),
                Command::Subscribe,
            ]
        );
    }

    #[test]
    fn pause_is_commanded_while_new_source_loads() {
        let handle = FakeHandle::default();
        let mut state = PlaybackState::default();
        state.play_list(vec![episode("a", 10), episode("b", 10)], 0);

        state.play_next();
        bind_source(&handle, state.current_episode());
        state.toggle_play();
        sync_playback(&handle, state.is_playing());

        assert_eq!(
            handle.commands(),
            vec![
                Command::SetSource(Some("https://cdn.test/b.m4a".to_string())),
                Command::Pause,
            ]
        );
    }

    #[test]
    fn seek_updates_elapsed_without_waiting_for_handle() {
        let handle = FakeHandle::default();
        let (elapsed, mut sink) = elapsed_probe();
        let _subscription = bind_progress(&handle, |_| {});

        sink(seek(&handle, 180, 45));

        assert_eq!(*elapsed.borrow(), 45);
        assert_eq!(handle.commands().last(), Some(&Command::SetPosition(45.0)));
    }

    #[test]
    fn seek_is_clamped_to_duration() {
        let handle = FakeHandle::default();
        assert_eq!(seek(&handle, 180, 500), 180);
        assert_eq!(handle.current_position(), 180.0);
    }

    #[test]
    fn odd_positions_report_zero() {
        assert_eq!(elapsed_seconds(f64::NAN), 0);
        assert_eq!(elapsed_seconds(-3.0), 0);
        assert_eq!(elapsed_seconds(0.99), 0);
        assert_eq!(elapsed_seconds(59.999), 59);
    }

    #[test]
    fn end_of_last_track_clears_queue() {
        let mut state = PlaybackState::default();
        state.play_list(vec![episode("a", 10), episode("b", 10)], 1);

        assert_eq!(finish_track(&mut state), TrackEnd::Cleared);
        assert!(state.queue().is_empty());
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn end_of_track_with_next_advances() {
        let mut state = PlaybackState::default();
        state.play_list(vec![episode("a", 10), episode("b", 10)], 0);

        assert_eq!(finish_track(&mut state), TrackEnd::Advanced);
        assert_eq!(state.current_index(), 1);
        assert!(!state.queue().is_empty());
    }

    #[test]
    fn end_of_track_while_shuffling_stays_in_queue() {
        let mut state = PlaybackState::default();
        state.play(episode("only", 10));
        state.toggle_shuffle();

        assert_eq!(finish_track(&mut state), TrackEnd::Advanced);
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.queue().len(), 1);
    }

    #[test]
    fn controls_disabled_without_episode() {
        let controls = TransportControls::for_state(&PlaybackState::default());
        assert_eq!(
            controls,
            TransportControls {
                shuffle_disabled: true,
                previous_disabled: true,
                play_pause_disabled: true,
                next_disabled: true,
                loop_disabled: true,
            }
        );
    }

    #[test]
    fn controls_follow_queue_position() {
        let mut state = PlaybackState::default();
        state.play(episode("solo", 10));
        let single = TransportControls::for_state(&state);
        assert!(single.shuffle_disabled);
        assert!(single.previous_disabled);
        assert!(single.next_disabled);
        assert!(!single.play_pause_disabled);
        assert!(!single.loop_disabled);

        state.play_list(vec![episode("a", 1), episode("b", 1), episode("c", 1)], 1);
        let middle = TransportControls::for_state(&state);
        assert!(!middle.shuffle_disabled);
        assert!(!middle.previous_disabled);
        assert!(!middle.next_disabled);

        state.play_next();
        assert!(TransportControls::for_state(&state).next_disabled);
        state.toggle_shuffle();
        assert!(!TransportControls::for_state(&state).next_disabled);
    }

    #[test]
    fn source_follows_current_episode() {
        let handle = FakeHandle::default();
        let mut state = PlaybackState::default();
        state.play(episode("a", 10));

        bind_source(&handle, state.current_episode());
        state.clear_player_state();
        bind_source(&handle, state.current_episode());

        assert_eq!(
            handle.commands(),
            vec![
                Command::SetSource(Some("https://cdn.test/a.m4a".to_string())),
                Command::Pause,
                Command::SetSource(None),
            ]
        );
    }
}
