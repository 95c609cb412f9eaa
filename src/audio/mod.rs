//! Adhan playback: clip acquisition, decoding, and output.
//!
//! Acquisition runs once in the background shortly after startup and
//! produces either a decoded buffer or a streaming handle. Playback goes
//! through [`AdhanPlayer`], which owns every audio handle and is driven by
//! the one-second tick.

pub mod backend;
pub mod clip;
pub mod engine;
pub mod output;
pub mod prefetch;
pub mod source;

pub use backend::{AudioBackend, Voice, VoiceStatus};
pub use clip::{decode_clip, DecodedClip};
pub use engine::{AdhanPlayer, PlayerEvent};
pub use output::CpalBackend;
pub use prefetch::{acquire, prefetch, Acquisition, PREFETCH_DELAY};
pub use source::{ClipSources, StreamHandle, ADHAN_MIRROR_URL, ADHAN_URL};
