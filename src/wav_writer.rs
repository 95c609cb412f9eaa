use std::path::Path;

use anyhow::{anyhow, Result};
use hound::{SampleFormat, WavSpec, WavWriter};

use crate::audio::DecodedClip;

const CHUNK_FRAMES: usize = 2048;

/// Writes a clip as 32-bit float WAV, reporting progress in `[0, 1]`.
pub fn write_clip_wav<F>(clip: &DecodedClip, output_path: &str, mut progress: F) -> Result<()>
where
    F: FnMut(f32),
{
    if clip.channels == 0 {
        return Err(anyhow!("invalid channel count"));
    }

    let spec = WavSpec {
        channels: clip.channels as u16,
        sample_rate: clip.sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut writer = WavWriter::create(Path::new(output_path), spec)?;
    let chunk_len = CHUNK_FRAMES * clip.channels;
    let total = clip.samples.len().max(1);
    let mut written = 0usize;

    for chunk in clip.samples.chunks(chunk_len) {
        for &sample in chunk {
            writer.write_sample(sample.clamp(-1.0, 1.0))?;
        }
        written += chunk.len();
        progress(written as f32 / total as f32);
    }

    writer.finalize()?;
    Ok(())
}
