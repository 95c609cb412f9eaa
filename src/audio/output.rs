use std::io::{self, Read, Seek, SeekFrom};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use log::{debug, warn};
use ringbuf::HeapRb;
use symphonia::core::io::MediaSource;

use super::backend::{AudioBackend, Voice, VoiceStatus};
use super::clip::{ClipDecoder, DecodedClip};

const STREAM_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const STREAM_BUFFER_SECS: usize = 2;
const STREAM_POLL_INTERVAL: Duration = Duration::from_millis(20);

#[derive(Clone, Copy, Default)]
struct Frame {
    left: f32,
    right: f32,
}

impl Frame {
    fn from_interleaved(samples: &[f32]) -> Frame {
        match samples {
            [mono] => Frame { left: *mono, right: *mono },
            [left, right, ..] => Frame { left: *left, right: *right },
            [] => Frame::default(),
        }
    }
}

/// Linear interpolation from the clip rate to the device rate.
struct OutputResampler {
    phase: f32,
    step: f32,
    prev: Frame,
    next: Frame,
    has_next: bool,
}

impl OutputResampler {
    fn new(source_rate: u32, output_rate: u32) -> Self {
        OutputResampler {
            phase: 0.0,
            step: source_rate as f32 / output_rate.max(1) as f32,
            prev: Frame::default(),
            next: Frame::default(),
            has_next: false,
        }
    }

    /// `None` once `fetch` runs dry.
    fn next_frame<F>(&mut self, mut fetch: F) -> Option<Frame>
    where
        F: FnMut() -> Option<Frame>,
    {
        if !self.has_next {
            self.next = fetch()?;
            self.has_next = true;
        }

        while self.phase >= 1.0 {
            self.phase -= 1.0;
            self.prev = self.next;
            self.next = fetch()?;
        }

        let t = self.phase;
        let frame = Frame {
            left: self.prev.left + (self.next.left - self.prev.left) * t,
            right: self.prev.right + (self.next.right - self.prev.right) * t,
        };
        self.phase += self.step;
        Some(frame)
    }
}

fn write_frame(out: &mut [f32], frame: Frame, gain: f32) {
    match out.len() {
        1 => out[0] = (frame.left + frame.right) * 0.5 * gain,
        _ => {
            for (ch, sample) in out.iter_mut().enumerate() {
                let value = if ch % 2 == 0 { frame.left } else { frame.right };
                *sample = value * gain;
            }
        }
    }
}

/// Shared between a voice handle and its audio callback.
#[derive(Default)]
struct PlaybackState {
    stopped: AtomicBool,
    finished: AtomicBool,
    error: Mutex<Option<String>>,
    underruns: AtomicU32,
}

impl PlaybackState {
    fn fail(&self, message: String) {
        if let Ok(mut error) = self.error.lock() {
            error.get_or_insert(message);
        }
    }

    fn status(&self) -> VoiceStatus {
        if let Ok(error) = self.error.lock() {
            if let Some(e) = error.as_ref() {
                return VoiceStatus::Failed(e.clone());
            }
        }
        if self.finished.load(Ordering::Relaxed) {
            VoiceStatus::Ended
        } else {
            VoiceStatus::Playing
        }
    }
}

fn default_output_device() -> Result<cpal::Device> {
    cpal::default_host()
        .default_output_device()
        .ok_or_else(|| anyhow!("no audio output device"))
}

fn pick_config(device: &cpal::Device, sample_rate: u32) -> Result<cpal::StreamConfig> {
    let configs = device.supported_output_configs()?.collect::<Vec<_>>();

    let mut fallback = None;
    for cfg in configs {
        if cfg.sample_format() != cpal::SampleFormat::F32 {
            continue;
        }
        let min = cfg.min_sample_rate().0;
        let max = cfg.max_sample_rate().0;
        if min <= sample_rate && max >= sample_rate {
            return Ok(cfg.with_sample_rate(cpal::SampleRate(sample_rate)).into());
        }
        if fallback.is_none() {
            fallback = Some(cfg.with_max_sample_rate());
        }
    }

    fallback
        .map(Into::into)
        .ok_or_else(|| anyhow!("output device has no float32 configuration"))
}

/// Plays through the default `cpal` output device.
pub struct CpalBackend {
    device: Option<cpal::Device>,
}

impl CpalBackend {
    pub fn new() -> Self {
        CpalBackend { device: None }
    }

    /// Opened on first use and kept for later playbacks.
    fn device(&mut self) -> Result<&cpal::Device> {
        if self.device.is_none() {
            self.device = Some(default_output_device()?);
        }
        self.device.as_ref().ok_or_else(|| anyhow!("no audio output device"))
    }
}

impl Default for CpalBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioBackend for CpalBackend {
    fn start_buffer(&mut self, clip: Arc<DecodedClip>, volume: f32) -> Result<Box<dyn Voice>> {
        let device = self.device()?;
        let config = pick_config(device, clip.sample_rate)?;
        let output_channels = config.channels as usize;
        let state = Arc::new(PlaybackState::default());

        let mut resampler = OutputResampler::new(clip.sample_rate, config.sample_rate.0);
        let mut position = 0usize;
        let total = clip.frames();
        let channels = clip.channels;
        let gain = volume.clamp(0.0, 1.0);

        let state_for_output = Arc::clone(&state);
        let state_for_error = Arc::clone(&state);
        let stream = device.build_output_stream(
            &config,
            move |data: &mut [f32], _| {
                if state_for_output.stopped.load(Ordering::Relaxed)
                    || state_for_output.finished.load(Ordering::Relaxed)
                {
                    data.fill(0.0);
                    return;
                }
                for out in data.chunks_mut(output_channels) {
                    let frame = resampler.next_frame(|| {
                        if position >= total {
                            return None;
                        }
                        let start = position * channels;
                        position += 1;
                        Some(Frame::from_interleaved(&clip.samples[start..start + channels]))
                    });
                    match frame {
                        Some(frame) => write_frame(out, frame, gain),
                        None => {
                            out.fill(0.0);
                            state_for_output.finished.store(true, Ordering::Relaxed);
                        }
                    }
                }
            },
            move |err| state_for_error.fail(format!("output stream error: {}", err)),
            None,
        )?;
        stream.play()?;

        Ok(Box::new(BufferVoice { stream, state }))
    }

    fn start_stream(&mut self, url: &str, volume: f32) -> Result<Box<dyn Voice>> {
        let state = Arc::new(PlaybackState::default());
        let state_for_worker = Arc::clone(&state);
        let url = url.to_string();
        let gain = volume.clamp(0.0, 1.0);

        thread::Builder::new()
            .name("adhan-stream".to_string())
            .spawn(move || {
                if let Err(e) = run_stream(&url, gain, &state_for_worker) {
                    state_for_worker.fail(format!("{:#}", e));
                }
            })?;

        Ok(Box::new(StreamVoice { state }))
    }
}

struct BufferVoice {
    stream: cpal::Stream,
    state: Arc<PlaybackState>,
}

impl Voice for BufferVoice {
    fn status(&mut self) -> VoiceStatus {
        self.state.status()
    }

    fn stop(&mut self) -> Result<()> {
        self.state.stopped.store(true, Ordering::Relaxed);
        self.stream.pause()?;
        Ok(())
    }
}

struct StreamVoice {
    state: Arc<PlaybackState>,
}

impl Voice for StreamVoice {
    fn status(&mut self) -> VoiceStatus {
        self.state.status()
    }

    fn stop(&mut self) -> Result<()> {
        self.state.stopped.store(true, Ordering::Relaxed);
        Ok(())
    }
}

impl Drop for StreamVoice {
    fn drop(&mut self) {
        self.state.stopped.store(true, Ordering::Relaxed);
    }
}

/// Response body as a forward-only media source.
struct HttpSource {
    inner: Mutex<reqwest::blocking::Response>,
    len: Option<u64>,
}

impl Read for HttpSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner
            .get_mut()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "response lock poisoned"))?
            .read(buf)
    }
}

impl Seek for HttpSource {
    fn seek(&mut self, _pos: SeekFrom) -> io::Result<u64> {
        Err(io::Error::new(io::ErrorKind::Unsupported, "http source is not seekable"))
    }
}

impl MediaSource for HttpSource {
    fn is_seekable(&self) -> bool {
        false
    }

    fn byte_len(&self) -> Option<u64> {
        self.len
    }
}

/// Worker body for a stream voice: fetch, decode progressively, and feed the
/// output callback through a ring buffer. Owns its `cpal` stream.
fn run_stream(url: &str, gain: f32, state: &Arc<PlaybackState>) -> Result<()> {
    let client = reqwest::blocking::Client::builder()
        .connect_timeout(STREAM_CONNECT_TIMEOUT)
        .timeout(None::<Duration>)
        .build()?;
    let response = client.get(url).send()?.error_for_status()?;
    let len = response.content_length();
    let source = HttpSource {
        inner: Mutex::new(response),
        len,
    };
    let mut decoder = ClipDecoder::open(Box::new(source), Some("mp3"))?;

    let device = default_output_device()?;
    let config = pick_config(&device, decoder.sample_rate)?;
    let output_channels = config.channels as usize;

    let ring = HeapRb::<Frame>::new(decoder.sample_rate as usize * STREAM_BUFFER_SECS);
    let (mut prod, mut cons) = ring.split();

    let decode_done = Arc::new(AtomicBool::new(false));
    let done_for_output = Arc::clone(&decode_done);
    let state_for_output = Arc::clone(state);
    let state_for_error = Arc::clone(state);
    let mut resampler = OutputResampler::new(decoder.sample_rate, config.sample_rate.0);

    let stream = device.build_output_stream(
        &config,
        move |data: &mut [f32], _| {
            if state_for_output.stopped.load(Ordering::Relaxed) {
                data.fill(0.0);
                return;
            }
            for out in data.chunks_mut(output_channels) {
                let frame = resampler.next_frame(|| match cons.pop() {
                    Some(frame) => Some(frame),
                    None if done_for_output.load(Ordering::Relaxed) => None,
                    None => {
                        state_for_output.underruns.fetch_add(1, Ordering::Relaxed);
                        Some(Frame::default())
                    }
                });
                match frame {
                    Some(frame) => write_frame(out, frame, gain),
                    None => {
                        out.fill(0.0);
                        state_for_output.finished.store(true, Ordering::Relaxed);
                    }
                }
            }
        },
        move |err| state_for_error.fail(format!("output stream error: {}", err)),
        None,
    )?;
    stream.play()?;

    'decode: while let Some(chunk) = decoder.next_chunk()? {
        let channels = decoder.channels.max(1);
        for samples in chunk.chunks(channels) {
            let mut frame = Frame::from_interleaved(samples);
            loop {
                if state.stopped.load(Ordering::Relaxed) {
                    break 'decode;
                }
                match prod.push(frame) {
                    Ok(()) => break,
                    Err(rejected) => {
                        frame = rejected;
                        thread::sleep(STREAM_POLL_INTERVAL);
                    }
                }
            }
        }
    }
    decode_done.store(true, Ordering::Relaxed);

    while !state.stopped.load(Ordering::Relaxed) && !state.finished.load(Ordering::Relaxed) {
        thread::sleep(STREAM_POLL_INTERVAL);
    }

    let underruns = state.underruns.load(Ordering::Relaxed);
    if underruns > 0 {
        warn!("adhan stream from {} had {} underrun frames", url, underruns);
    }
    debug!("adhan stream from {} closed", url);
    drop(stream);
    Ok(())
}
