use anyhow::Result;
use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::i18n::Language;
use crate::storage::LocalStorage;

/// Storage key of the persisted settings blob.
pub const SETTINGS_KEY: &str = "ramadan_settings";

const DEFAULT_VOLUME: f32 = 0.8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub language: Language,
    pub iftar_alarm_enabled: bool,
    pub suhoor_alarm_enabled: bool,
    pub voice_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            language: Language::Bn,
            iftar_alarm_enabled: true,
            suhoor_alarm_enabled: true,
            voice_volume: DEFAULT_VOLUME,
        }
    }
}

impl Settings {
    /// Parses a stored blob. Each key that is missing or holds a value of the
    /// wrong type takes its default; a blob that is not a JSON object falls
    /// back to defaults entirely.
    pub fn from_json(raw: &str) -> Settings {
        let fields = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(fields)) => fields,
            Ok(other) => {
                warn!("ignoring settings that are not an object: {}", other);
                return Settings::default();
            }
            Err(e) => {
                warn!("failed to parse settings: {}", e);
                return Settings::default();
            }
        };

        let mut settings = Settings::default();
        if let Some(language) = field(&fields, "language") {
            settings.language = language;
        }
        if let Some(enabled) = field(&fields, "iftarAlarmEnabled") {
            settings.iftar_alarm_enabled = enabled;
        }
        if let Some(enabled) = field(&fields, "suhoorAlarmEnabled") {
            settings.suhoor_alarm_enabled = enabled;
        }
        if let Some(volume) = field(&fields, "voiceVolume") {
            settings.voice_volume = volume;
        }
        settings.sanitized()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn with_volume(mut self, volume: f32) -> Settings {
        self.voice_volume = volume;
        self.sanitized()
    }

    fn sanitized(mut self) -> Settings {
        self.voice_volume = if self.voice_volume.is_finite() {
            self.voice_volume.clamp(0.0, 1.0)
        } else {
            DEFAULT_VOLUME
        };
        self
    }
}

fn field<T: DeserializeOwned>(fields: &Map<String, Value>, key: &str) -> Option<T> {
    let value = fields.get(key)?;
    match serde_json::from_value(value.clone()) {
        Ok(v) => Some(v),
        Err(e) => {
            warn!("ignoring settings key {}: {}", key, e);
            None
        }
    }
}

/// Loads once at startup, saves on every change.
pub struct SettingsStore {
    storage: LocalStorage,
}

impl SettingsStore {
    pub fn new(storage: LocalStorage) -> Self {
        SettingsStore { storage }
    }

    pub fn load(&self) -> Settings {
        match self.storage.get(SETTINGS_KEY) {
            Some(raw) => Settings::from_json(&raw),
            None => Settings::default(),
        }
    }

    pub fn save(&mut self, settings: &Settings) -> Result<()> {
        let raw = settings.to_json()?;
        self.storage.set(SETTINGS_KEY, &raw)
    }

    pub fn storage(&self) -> &LocalStorage {
        &self.storage
    }
}
