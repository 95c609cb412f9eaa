use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use log::{error, warn};
use serde::Deserialize;

use crate::calendar::CalendarDay;
use crate::i18n::{format_clock, greeting_cards, localized_date, ordinal_day, strings, GreetingCard, Language};

/// How long the "copied" confirmation stays visible.
pub const COPIED_INDICATOR: Duration = Duration::from_secs(2);

const MOSQUE_FILE: &str = "mosque.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareRequest {
    /// Clipboard text used when no native share sheet exists.
    pub fn clipboard_payload(&self) -> String {
        if self.url.is_empty() {
            self.text.clone()
        } else {
            format!("{}\n{}", self.text, self.url)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    /// Fell back to the clipboard; holds the text to copy.
    Copy(String),
    Failed,
}

/// Platform share capability.
pub trait ShareTarget {
    /// `None` when the platform has no share sheet.
    fn native_share(&mut self, request: &ShareRequest) -> Option<Result<()>>;
}

/// Desktop targets have no share sheet; everything goes to the clipboard.
pub struct ClipboardOnly;

impl ShareTarget for ClipboardOnly {
    fn native_share(&mut self, _request: &ShareRequest) -> Option<Result<()>> {
        None
    }
}

pub fn share(target: &mut dyn ShareTarget, request: &ShareRequest) -> ShareOutcome {
    match target.native_share(request) {
        Some(Ok(())) => ShareOutcome::Shared,
        Some(Err(e)) => {
            error!("share failed: {:#}", e);
            ShareOutcome::Failed
        }
        None => ShareOutcome::Copy(request.clipboard_payload()),
    }
}

/// Fills the localized share template for one calendar day.
pub fn share_message(lang: Language, day: &CalendarDay) -> String {
    strings(lang)
        .share_message
        .replace("{date}", &localized_date(lang, day.date))
        .replace("{day}", &ordinal_day(lang, day.day_number))
        .replace("{suhoor}", &format_clock(lang, day.suhoor, false).time)
        .replace("{iftar}", &format_clock(lang, day.iftar, false).time)
}

pub fn day_request(lang: Language, day: &CalendarDay, url: &str) -> ShareRequest {
    ShareRequest {
        title: strings(lang).title.clone(),
        text: share_message(lang, day),
        url: url.to_string(),
    }
}

/// A greeting card message, or the user's own text when non-blank.
pub fn greeting_request(lang: Language, card: &GreetingCard, custom: Option<&str>, url: &str) -> ShareRequest {
    let text = match custom.map(str::trim) {
        Some(custom) if !custom.is_empty() => custom.to_string(),
        _ => card.message(lang).to_string(),
    };
    ShareRequest {
        title: strings(lang).greetings.clone(),
        text,
        url: url.to_string(),
    }
}

pub fn find_card(id: &str) -> Option<&'static GreetingCard> {
    greeting_cards().iter().find(|c| c.id == id)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DonationDetails {
    pub bank_name: String,
    pub account: String,
    pub nib: String,
    pub iban: String,
    pub swift: String,
}

impl DonationDetails {
    /// `(label, value)` pairs for the non-empty fields.
    pub fn fields(&self, lang: Language) -> Vec<(&'static str, &str)> {
        let t = strings(lang);
        [
            (t.bank_name.as_str(), self.bank_name.as_str()),
            (t.account.as_str(), self.account.as_str()),
            (t.nib.as_str(), self.nib.as_str()),
            (t.iban.as_str(), self.iban.as_str()),
            (t.swift.as_str(), self.swift.as_str()),
        ]
        .into_iter()
        .filter(|(_, v)| !v.is_empty())
        .collect()
    }
}

/// Per-installation details that are not compiled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MosqueProfile {
    #[serde(default)]
    pub share_url: String,
    #[serde(default)]
    pub donation: Option<DonationDetails>,
}

impl MosqueProfile {
    /// Reads `mosque.json` from `dir`; missing or invalid files give an
    /// empty profile.
    pub fn load(dir: &Path) -> MosqueProfile {
        let path = dir.join(MOSQUE_FILE);
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(_) => return MosqueProfile::default(),
        };
        serde_json::from_str(&data).unwrap_or_else(|e| {
            warn!("ignoring invalid {}: {}", path.display(), e);
            MosqueProfile::default()
        })
    }
}
