use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use log::{info, warn};

use super::clip::{decode_clip, DecodedClip};
use super::source::{fetch_clip, check_source, ClipSources, StreamHandle};

/// Startup delay before the clip is fetched, so the first frame renders first.
pub const PREFETCH_DELAY: Duration = Duration::from_secs(2);

/// Outcome of background acquisition.
#[derive(Debug, Clone, PartialEq)]
pub enum Acquisition {
    Decoded(Arc<DecodedClip>),
    Streaming(StreamHandle),
}

#[derive(Debug, Clone, Copy)]
enum Strategy {
    DecodeBuffer,
    StreamElement,
}

const STRATEGIES: [Strategy; 2] = [Strategy::DecodeBuffer, Strategy::StreamElement];

/// Tries each acquisition strategy in order. Never fails: the last strategy
/// only builds a handle, and failures along the way are logged.
pub async fn acquire<F, FFut, P, PFut>(sources: &ClipSources, fetch: F, check: P) -> Acquisition
where
    F: Fn(String) -> FFut,
    FFut: Future<Output = Result<Vec<u8>>>,
    P: Fn(String) -> PFut,
    PFut: Future<Output = Result<()>>,
{
    for strategy in STRATEGIES {
        match strategy {
            Strategy::DecodeBuffer => {
                let decoded = match fetch(sources.primary.clone()).await {
                    Ok(bytes) => decode_clip(bytes),
                    Err(e) => Err(e),
                };
                match decoded {
                    Ok(clip) => {
                        info!(
                            "adhan decoded: {:.1}s, {} ch, {} Hz",
                            clip.duration().as_secs_f32(),
                            clip.channels,
                            clip.sample_rate
                        );
                        return Acquisition::Decoded(Arc::new(clip));
                    }
                    Err(e) => warn!("adhan prefetch failed, falling back to streaming: {:#}", e),
                }
            }
            Strategy::StreamElement => {
                let mut handle = StreamHandle::new(sources);
                if let Err(e) = check(handle.src().to_string()).await {
                    warn!("primary adhan source unavailable, using mirror: {:#}", e);
                    handle.use_mirror();
                }
                return Acquisition::Streaming(handle);
            }
        }
    }
    Acquisition::Streaming(StreamHandle::new(sources))
}

/// Waits [`PREFETCH_DELAY`] then acquires the clip over HTTP.
pub async fn prefetch(client: reqwest::Client, sources: ClipSources) -> Acquisition {
    tokio::time::sleep(PREFETCH_DELAY).await;
    acquire(
        &sources,
        |url| {
            let client = client.clone();
            async move { fetch_clip(&client, &url).await }
        },
        |url| {
            let client = client.clone();
            async move { check_source(&client, &url).await }
        },
    )
    .await
}
