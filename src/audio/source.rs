use anyhow::{anyhow, Result};

pub const ADHAN_URL: &str = "https://www.islamcan.com/audio/adhan/azan1.mp3";
pub const ADHAN_MIRROR_URL: &str = "https://ia800203.us.archive.org/20/items/Adhan_201509/Adhan.mp3";

/// The same clip served from two hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipSources {
    pub primary: String,
    pub mirror: String,
}

impl Default for ClipSources {
    fn default() -> Self {
        ClipSources {
            primary: ADHAN_URL.to_string(),
            mirror: ADHAN_MIRROR_URL.to_string(),
        }
    }
}

/// Playable-on-demand handle for the clip, streamed when played instead of
/// held in memory. Starts on the primary URL and can be pointed at the mirror.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamHandle {
    src: String,
    mirror: String,
}

impl StreamHandle {
    pub fn new(sources: &ClipSources) -> Self {
        StreamHandle {
            src: sources.primary.clone(),
            mirror: sources.mirror.clone(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn is_on_mirror(&self) -> bool {
        self.src == self.mirror
    }

    pub fn use_mirror(&mut self) {
        self.src = self.mirror.clone();
    }
}

pub async fn fetch_clip(client: &reqwest::Client, url: &str) -> Result<Vec<u8>> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(anyhow!("fetching {} failed with status {}", url, response.status()));
    }
    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}

/// Checks that `url` answers with a success status without reading the body.
pub async fn check_source(client: &reqwest::Client, url: &str) -> Result<()> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(anyhow!("{} answered {}", url, response.status()));
    }
    Ok(())
}
