use std::sync::Arc;

use anyhow::Result;

use super::clip::DecodedClip;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceStatus {
    Playing,
    Ended,
    Failed(String),
}

/// One playback in progress.
pub trait Voice {
    fn status(&mut self) -> VoiceStatus;
    fn stop(&mut self) -> Result<()>;
}

/// Output device seam. A stream voice may fail to start right away (`Err`)
/// or later, reported as [`VoiceStatus::Failed`].
pub trait AudioBackend {
    fn start_buffer(&mut self, clip: Arc<DecodedClip>, volume: f32) -> Result<Box<dyn Voice>>;
    fn start_stream(&mut self, url: &str, volume: f32) -> Result<Box<dyn Voice>>;
}
