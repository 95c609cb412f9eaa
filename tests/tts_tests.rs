use base64::Engine;
use serde_json::json;

use ramadan_timetable::tts::{decode_voice, extract_audio, generate_voice, request_body, VOICE_SAMPLE_RATE};

#[test]
fn request_names_the_voice_and_audio_modality() {
    let body = request_body("Ramadan Mubarak", "Kore");
    assert_eq!(body.pointer("/contents/0/parts/0/text"), Some(&json!("Ramadan Mubarak")));
    assert_eq!(body.pointer("/generationConfig/responseModalities/0"), Some(&json!("AUDIO")));
    assert_eq!(
        body.pointer("/generationConfig/speechConfig/voiceConfig/prebuiltVoiceConfig/voiceName"),
        Some(&json!("Kore"))
    );
}

#[test]
fn extracts_first_inline_audio_part() {
    let response = json!({
        "candidates": [{ "content": { "parts": [{ "inlineData": { "mimeType": "audio/L16", "data": "AAA=" } }] } }]
    });
    assert_eq!(extract_audio(&response), Some("AAA=".to_string()));
}

#[test]
fn empty_or_missing_audio_is_none() {
    assert_eq!(extract_audio(&json!({})), None);
    assert_eq!(extract_audio(&json!({ "candidates": [] })), None);
    let empty = json!({
        "candidates": [{ "content": { "parts": [{ "inlineData": { "data": "" } }] } }]
    });
    assert_eq!(extract_audio(&empty), None);
}

#[test]
fn decodes_little_endian_pcm() {
    let mut raw = Vec::new();
    for sample in [0i16, 16_384, -32_767] {
        raw.extend_from_slice(&sample.to_le_bytes());
    }
    let data = base64::engine::general_purpose::STANDARD.encode(raw);

    let clip = decode_voice(&data).unwrap();
    assert_eq!(clip.channels, 1);
    assert_eq!(clip.sample_rate, VOICE_SAMPLE_RATE);
    assert_eq!(clip.samples.len(), 3);
    assert_eq!(clip.samples[0], 0.0);
    assert!((clip.samples[1] - 0.5).abs() < 1e-3);
    assert_eq!(clip.samples[2], -1.0);
}

#[test]
fn invalid_audio_payload_is_none() {
    assert!(decode_voice("%%% not base64").is_none());
    assert!(decode_voice("").is_none());
}

#[tokio::test]
async fn missing_api_key_yields_none() {
    let client = reqwest::Client::new();
    assert_eq!(generate_voice(&client, None, "hello", "Kore").await, None);
    assert_eq!(generate_voice(&client, Some(""), "hello", "Kore").await, None);
}
