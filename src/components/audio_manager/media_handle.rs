//! Narrow capability surface of the audio element the player drives.
//!
//! Metadata-loaded, ended, play and pause arrive as element events in the
//! player's markup; only the time-update signal is subscribed imperatively,
//! since its lifetime is tied to one bound source.

use dioxus::prelude::*;

#[cfg(not(target_arch = "wasm32"))]
use std::cell::Cell;
#[cfg(not(target_arch = "wasm32"))]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

pub const AUDIO_ELEMENT_ID: &str = "podcastr-audio";

pub trait MediaHandle {
    /// Start playback from the current position. Fire-and-forget.
    fn play(&self);
    fn pause(&self);
    /// Position as last reported by the element. Progress during playback
    /// arrives through `on_time_update`.
    fn current_position(&self) -> f64;
    fn set_current_position(&self, seconds: f64);
    /// Bind a new media source; `None` unbinds.
    fn set_source(&self, url: Option<&str>);
    fn set_looping(&self, looping: bool);
    /// Deliver the playback position on every time-update signal until the
    /// returned guard is dropped.
    fn on_time_update(&self, callback: Box<dyn FnMut(f64)>) -> TimeUpdateSubscription;
}

/// Drop guard for a time-update listener.
#[must_use = "dropping the subscription detaches the listener"]
pub struct TimeUpdateSubscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl TimeUpdateSubscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    /// A subscription with nothing to detach, used when no element is bound.
    pub fn detached() -> Self {
        Self { teardown: None }
    }
}

impl Drop for TimeUpdateSubscription {
    fn drop(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

/// Browser handle backed by the `<audio>` element rendered by the player.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Default)]
pub struct AudioElementHandle;

#[cfg(target_arch = "wasm32")]
impl AudioElementHandle {
    pub fn new() -> Self {
        Self
    }

    fn element(&self) -> Option<HtmlAudioElement> {
        let document = window()?.document()?;
        document
            .get_element_by_id(AUDIO_ELEMENT_ID)?
            .dyn_into::<HtmlAudioElement>()
            .ok()
    }
}

#[cfg(target_arch = "wasm32")]
fn web_try_play(audio: &HtmlAudioElement) {
    if let Ok(promise) = audio.play() {
        spawn(async move {
            if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                tracing::debug!("play() was rejected: {err:?}");
            }
        });
    }
}

#[cfg(target_arch = "wasm32")]
impl MediaHandle for AudioElementHandle {
    fn play(&self) {
        if let Some(audio) = self.element() {
            if audio.paused() {
                web_try_play(&audio);
            }
        }
    }

    // Unconditional: a source still loading under autoplay reports paused
    // but starts on its own unless told otherwise.
    fn pause(&self) {
        if let Some(audio) = self.element() {
            let _ = audio.pause();
        }
    }

    fn current_position(&self) -> f64 {
        self.element().map(|a| a.current_time()).unwrap_or(0.0)
    }

    fn set_current_position(&self, seconds: f64) {
        if let Some(audio) = self.element() {
            audio.set_current_time(seconds);
        }
    }

    fn set_source(&self, url: Option<&str>) {
        let Some(audio) = self.element() else {
            return;
        };
        match url {
            Some(url) => audio.set_src(url),
            None => {
                let _ = audio.pause();
                let _ = audio.remove_attribute("src");
                audio.load();
            }
        }
    }

    fn set_looping(&self, looping: bool) {
        if let Some(audio) = self.element() {
            audio.set_loop(looping);
        }
    }

    fn on_time_update(&self, mut callback: Box<dyn FnMut(f64)>) -> TimeUpdateSubscription {
        let Some(audio) = self.element() else {
            return TimeUpdateSubscription::detached();
        };

        // The listener fires from the browser, outside any Dioxus scope.
        let runtime = Runtime::current();
        let source = audio.clone();
        let listener = Closure::wrap(Box::new(move || {
            let _guard = RuntimeGuard::new(runtime.clone());
            callback(source.current_time());
        }) as Box<dyn FnMut()>);

        let _ = audio
            .add_event_listener_with_callback("timeupdate", listener.as_ref().unchecked_ref());

        TimeUpdateSubscription::new(move || {
            let _ = audio.remove_event_listener_with_callback(
                "timeupdate",
                listener.as_ref().unchecked_ref(),
            );
            drop(listener);
        })
    }
}

/// Webview handle for desktop builds: commands are evaluated as script
/// against the same `<audio>` element, and positions come back over the
/// eval channel.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Default)]
pub struct AudioElementHandle {
    position: Rc<Cell<f64>>,
}

#[cfg(not(target_arch = "wasm32"))]
impl AudioElementHandle {
    pub fn new() -> Self {
        Self::default()
    }

    fn command(&self, body: &str) {
        let _ = document::eval(&element_script(body));
    }
}

#[cfg(not(target_arch = "wasm32"))]
const PLAY_SCRIPT: &str = "if (audio.paused) { audio.play().catch(() => {}); }";
#[cfg(not(target_arch = "wasm32"))]
const PAUSE_SCRIPT: &str = "audio.pause();";

#[cfg(not(target_arch = "wasm32"))]
fn element_script(body: &str) -> String {
    format!(
        r#"(function () {{
            const audio = document.getElementById("{AUDIO_ELEMENT_ID}");
            if (!audio) return false;
            {body}
            return true;
        }})();"#
    )
}

/// Each subscription owns its listener slot, so tearing down a stale one
/// never detaches a newer listener.
#[cfg(not(target_arch = "wasm32"))]
fn listener_key() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};

    static NEXT_LISTENER: AtomicU64 = AtomicU64::new(0);
    format!(
        "__podcastrTimeUpdate{}",
        NEXT_LISTENER.fetch_add(1, Ordering::Relaxed)
    )
}

#[cfg(not(target_arch = "wasm32"))]
impl MediaHandle for AudioElementHandle {
    fn play(&self) {
        self.command(PLAY_SCRIPT);
    }

    fn pause(&self) {
        self.command(PAUSE_SCRIPT);
    }

    fn current_position(&self) -> f64 {
        self.position.get()
    }

    fn set_current_position(&self, seconds: f64) {
        let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
        self.position.set(seconds);
        self.command(&format!("audio.currentTime = {seconds};"));
    }

    fn set_source(&self, url: Option<&str>) {
        match url {
            Some(url) => {
                let url = serde_json::to_string(url).unwrap_or_else(|_| "\"\"".to_string());
                self.command(&format!("audio.src = {url};"));
            }
            None => {
                self.position.set(0.0);
                self.command("audio.pause(); audio.removeAttribute(\"src\"); audio.load();");
            }
        }
    }

    fn set_looping(&self, looping: bool) {
        self.command(&format!("audio.loop = {looping};"));
    }

    fn on_time_update(&self, mut callback: Box<dyn FnMut(f64)>) -> TimeUpdateSubscription {
        let key = listener_key();
        let mut eval = document::eval(&format!(
            r#"const audio = document.getElementById("{AUDIO_ELEMENT_ID}");
            if (!audio) return;
            const listener = () => dioxus.send(audio.currentTime);
            window.{key} = listener;
            audio.addEventListener("timeupdate", listener);
            await new Promise(() => {{}});"#
        ));

        let position = self.position.clone();
        let task = spawn(async move {
            while let Ok(current) = eval.recv::<f64>().await {
                position.set(current);
                callback(current);
            }
        });

        TimeUpdateSubscription::new(move || {
            task.cancel();
            let _ = document::eval(&format!(
                r#"const audio = document.getElementById("{AUDIO_ELEMENT_ID}");
                const listener = window.{key};
                if (audio && listener) audio.removeEventListener("timeupdate", listener);
                delete window.{key};"#
            ));
        })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn pause_does_not_depend_on_element_state() {
        assert!(!PAUSE_SCRIPT.contains("paused"));
        assert!(element_script(PAUSE_SCRIPT).contains("audio.pause();"));
    }

    #[test]
    fn scripts_target_the_player_element() {
        let script = element_script(PLAY_SCRIPT);
        assert!(script.contains(&format!("getElementById(\"{AUDIO_ELEMENT_ID}\")")));
        assert!(script.contains(PLAY_SCRIPT));
    }

    #[test]
    fn listener_keys_are_unique() {
        let first = listener_key();
        let second = listener_key();
        assert_ne!(first, second);
        assert!(first.starts_with("__podcastrTimeUpdate"));
    }
}
