use std::sync::Arc;

use log::{debug, info, warn};

use super::backend::{AudioBackend, Voice, VoiceStatus};
use super::clip::DecodedClip;
use super::prefetch::Acquisition;
use super::source::{ClipSources, StreamHandle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerEvent {
    /// Playback reached the end of the clip.
    Ended,
    /// The stream source was rejected and playback restarted on the mirror.
    SwitchedToMirror,
    /// Every source failed; playback was abandoned.
    GaveUp(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VoiceKind {
    Buffer,
    Stream { retried: bool },
}

struct ActiveVoice {
    voice: Box<dyn Voice>,
    kind: VoiceKind,
    volume: f32,
}

/// Owns every adhan audio handle. At most one voice plays at a time.
pub struct AdhanPlayer<B: AudioBackend> {
    backend: B,
    sources: ClipSources,
    buffer: Option<Arc<DecodedClip>>,
    stream: Option<StreamHandle>,
    active: Option<ActiveVoice>,
    previewing: bool,
}

impl<B: AudioBackend> AdhanPlayer<B> {
    pub fn new(backend: B, sources: ClipSources) -> Self {
        AdhanPlayer {
            backend,
            sources,
            buffer: None,
            stream: None,
            active: None,
            previewing: false,
        }
    }

    pub fn install(&mut self, acquisition: Acquisition) {
        match acquisition {
            Acquisition::Decoded(clip) => self.buffer = Some(clip),
            Acquisition::Streaming(handle) => {
                info!("adhan will stream from {}", handle.src());
                self.stream = Some(handle);
            }
        }
    }

    pub fn has_buffer(&self) -> bool {
        self.buffer.is_some()
    }

    pub fn stream_handle(&self) -> Option<&StreamHandle> {
        self.stream.as_ref()
    }

    pub fn is_previewing(&self) -> bool {
        self.previewing
    }

    pub fn is_playing(&self) -> bool {
        self.active.is_some()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Starts the adhan. A preview request while a preview is already
    /// running stops it instead.
    pub fn play(&mut self, is_preview: bool, volume: f32) {
        if is_preview && self.previewing {
            self.stop();
            return;
        }

        self.stop();
        if is_preview {
            self.previewing = true;
        }

        if let Some(clip) = self.buffer.clone() {
            match self.backend.start_buffer(clip, volume) {
                Ok(voice) => {
                    self.active = Some(ActiveVoice {
                        voice,
                        kind: VoiceKind::Buffer,
                        volume,
                    });
                    return;
                }
                Err(e) => warn!("buffered adhan failed to start, streaming instead: {:#}", e),
            }
        }

        self.start_stream(volume, false);
    }

    /// Stops whatever is playing. A stream restarts from the top on the next
    /// play.
    pub fn stop(&mut self) {
        if let Some(mut active) = self.active.take() {
            if let Err(e) = active.voice.stop() {
                debug!("ignoring stop error: {:#}", e);
            }
        }
        self.previewing = false;
    }

    /// Called once per tick. Reports completion and handles a rejected
    /// stream: one retry on the mirror, then give up.
    pub fn poll(&mut self) -> Option<PlayerEvent> {
        let active = self.active.as_mut()?;
        let status = active.voice.status();
        let kind = active.kind;
        let volume = active.volume;

        match status {
            VoiceStatus::Playing => None,
            VoiceStatus::Ended => {
                self.active = None;
                self.previewing = false;
                Some(PlayerEvent::Ended)
            }
            VoiceStatus::Failed(reason) => {
                self.active = None;
                match kind {
                    VoiceKind::Stream { retried: false } => {
                        warn!("adhan stream rejected, retrying on mirror: {}", reason);
                        self.retry_on_mirror(volume)
                    }
                    _ => Some(self.give_up(reason)),
                }
            }
        }
    }

    fn start_stream(&mut self, volume: f32, retried: bool) -> Option<PlayerEvent> {
        let sources = &self.sources;
        let url = self
            .stream
            .get_or_insert_with(|| StreamHandle::new(sources))
            .src()
            .to_string();

        match self.backend.start_stream(&url, volume) {
            Ok(voice) => {
                self.active = Some(ActiveVoice {
                    voice,
                    kind: VoiceKind::Stream { retried },
                    volume,
                });
                None
            }
            Err(e) if !retried => {
                warn!("adhan stream refused to play, retrying on mirror: {:#}", e);
                self.retry_on_mirror(volume)
            }
            Err(e) => Some(self.give_up(format!("{:#}", e))),
        }
    }

    fn retry_on_mirror(&mut self, volume: f32) -> Option<PlayerEvent> {
        if let Some(handle) = self.stream.as_mut() {
            handle.use_mirror();
        }
        match self.start_stream(volume, true) {
            None => Some(PlayerEvent::SwitchedToMirror),
            event => event,
        }
    }

    fn give_up(&mut self, reason: String) -> PlayerEvent {
        warn!("adhan playback abandoned: {}", reason);
        self.active = None;
        self.previewing = false;
        PlayerEvent::GaveUp(reason)
    }
}
