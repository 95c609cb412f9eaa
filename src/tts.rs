//! Speech synthesis through the Gemini text-to-speech model.
//!
//! Every failure (missing key, network, bad status, empty answer) ends in
//! `None`; nothing here returns an error to the caller.

use base64::Engine;
use log::error;
use serde_json::{json, Value};

use crate::audio::DecodedClip;

pub const TTS_MODEL: &str = "gemini-2.5-flash-preview-tts";
pub const DEFAULT_VOICE: &str = "Kore";
/// Raw PCM format returned by the model.
pub const VOICE_SAMPLE_RATE: u32 = 24_000;

const ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

pub fn api_key_from_env() -> Option<String> {
    API_KEY_VARS
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|v| !v.trim().is_empty())
}

pub fn request_body(message: &str, voice: &str) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": message }] }],
        "generationConfig": {
            "responseModalities": ["AUDIO"],
            "speechConfig": {
                "voiceConfig": {
                    "prebuiltVoiceConfig": { "voiceName": voice }
                }
            }
        }
    })
}

/// Base64 audio of the first candidate part, if any.
pub fn extract_audio(response: &Value) -> Option<String> {
    response
        .pointer("/candidates/0/content/parts/0/inlineData/data")
        .and_then(Value::as_str)
        .filter(|data| !data.is_empty())
        .map(str::to_string)
}

/// Returns base64-encoded PCM for `message` spoken with `voice`.
pub async fn generate_voice(
    client: &reqwest::Client,
    api_key: Option<&str>,
    message: &str,
    voice: &str,
) -> Option<String> {
    let Some(key) = api_key.filter(|k| !k.is_empty()) else {
        error!("TTS error: no API key configured");
        return None;
    };

    let url = format!("{}/{}:generateContent", ENDPOINT, TTS_MODEL);
    let response = match client
        .post(url)
        .header("x-goog-api-key", key)
        .json(&request_body(message, voice))
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            error!("TTS error: {}", e);
            return None;
        }
    };

    if !response.status().is_success() {
        error!("TTS error: status {}", response.status());
        return None;
    }

    match response.json::<Value>().await {
        Ok(body) => extract_audio(&body),
        Err(e) => {
            error!("TTS error: {}", e);
            None
        }
    }
}

/// Decodes the model's base64 16-bit little-endian mono PCM.
pub fn decode_voice(data: &str) -> Option<DecodedClip> {
    let bytes = base64::engine::general_purpose::STANDARD.decode(data.trim()).ok()?;
    if bytes.len() < 2 {
        return None;
    }
    let samples = bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f32 / i16::MAX as f32)
        .collect::<Vec<f32>>();
    Some(DecodedClip {
        samples,
        channels: 1,
        sample_rate: VOICE_SAMPLE_RATE,
    })
}
