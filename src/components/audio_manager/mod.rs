//! Audio Manager - playback state and the bridge to the audio element.
//! The state machine is plain data; the store wraps it in a signal, and the
//! surface rules translate between the store and a `MediaHandle`.

mod media_handle;
mod playback_state;
mod store;
mod surface;

pub use media_handle::*;
pub use playback_state::*;
pub use store::*;
pub use surface::*;
