use std::collections::HashMap;
use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

static BUNDLE: OnceLock<Bundle> = OnceLock::new();

const BENGALI_DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];
const BENGALI_ORDINALS: [&str; 10] = ["১ম", "২য়", "৩য়", "৪র্থ", "৫ম", "৬ষ্ঠ", "৭ম", "৮ম", "৯ম", "১০ম"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Bn,
    Pt,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Bn, Language::Pt];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Bn => "bn",
            Language::Pt => "pt",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|l| l.code() == code)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::En => write!(f, "English"),
            Language::Bn => write!(f, "বাংলা"),
            Language::Pt => write!(f, "Português"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Periods {
    pub dawn: String,
    pub morning: String,
    pub noon: String,
    pub afternoon: String,
    pub evening: String,
    pub night: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Strings {
    pub title: String,
    pub sub_title: String,
    pub suhoor: String,
    pub iftar: String,
    pub ramadan_month: String,
    pub days_remaining: String,
    pub iftar_alarm: String,
    pub suhoor_alarm: String,
    pub today: String,
    pub volume: String,
    pub current_time_label: String,
    pub alarms_btn: String,
    pub full_calendar: String,
    pub close: String,
    pub ramadan_day: String,
    pub date: String,
    pub ashra1: String,
    pub ashra2: String,
    pub ashra3: String,
    pub ongoing: String,
    pub iftar_remaining: String,
    pub suhoor_remaining: String,
    pub suhoor_ended: String,
    pub iftar_ended: String,
    pub listen_adhan: String,
    pub share: String,
    pub greetings: String,
    pub send: String,
    pub share_message: String,
    pub donate: String,
    pub donate_title: String,
    pub bank_name: String,
    pub account: String,
    pub nib: String,
    pub iban: String,
    pub swift: String,
    pub copy: String,
    pub copied: String,
    pub customize: String,
    pub write_message: String,
    pub preview: String,
    pub reset: String,
    pub hadith: String,
    pub periods: Periods,
    /// Monday first.
    pub weekdays: [String; 7],
    pub months: [String; 12],
}

#[derive(Debug, Clone, Deserialize)]
pub struct GreetingCard {
    pub id: String,
    pub accent: String,
    messages: HashMap<Language, String>,
}

impl GreetingCard {
    pub fn accent_rgb(&self) -> Option<(u8, u8, u8)> {
        accent_rgb(&self.accent)
    }

    pub fn message(&self, lang: Language) -> &str {
        self.messages
            .get(&lang)
            .or_else(|| self.messages.get(&Language::En))
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// RGB for a greeting card accent name, `None` outside the palette.
pub fn accent_rgb(name: &str) -> Option<(u8, u8, u8)> {
    let rgb = match name {
        "amber" => (245, 158, 11),
        "blue" => (59, 130, 246),
        "emerald" => (16, 185, 129),
        "indigo" => (99, 102, 241),
        "orange" => (249, 115, 22),
        "pink" => (236, 72, 153),
        "purple" => (168, 85, 247),
        "rose" => (244, 63, 94),
        "yellow" => (234, 179, 8),
        _ => return None,
    };
    Some(rgb)
}

#[derive(Debug, Deserialize)]
struct Bundle {
    languages: HashMap<Language, Strings>,
    greeting_cards: Vec<GreetingCard>,
}

fn bundle() -> &'static Bundle {
    BUNDLE.get_or_init(|| {
        let raw = include_str!("../assets/translations.json");
        let bundle: Bundle = serde_json::from_str(raw).expect("invalid translations asset");
        for lang in Language::ALL {
            assert!(bundle.languages.contains_key(&lang), "missing translations for {}", lang.code());
        }
        bundle
    })
}

pub fn strings(lang: Language) -> &'static Strings {
    &bundle().languages[&lang]
}

pub fn greeting_cards() -> &'static [GreetingCard] {
    &bundle().greeting_cards
}

pub fn localize_digits(lang: Language, value: &str) -> String {
    if lang != Language::Bn {
        return value.to_string();
    }
    value
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => BENGALI_DIGITS[d as usize],
            None => c,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Dawn,
    Morning,
    Noon,
    Afternoon,
    Evening,
    Night,
}

pub fn period_of_day(hour: u32) -> Period {
    match hour {
        4..=5 => Period::Dawn,
        6..=11 => Period::Morning,
        12..=14 => Period::Noon,
        15..=17 => Period::Afternoon,
        18..=19 => Period::Evening,
        _ => Period::Night,
    }
}

pub fn period_label(lang: Language, period: Period) -> &'static str {
    let p = &strings(lang).periods;
    match period {
        Period::Dawn => &p.dawn,
        Period::Morning => &p.morning,
        Period::Noon => &p.noon,
        Period::Afternoon => &p.afternoon,
        Period::Evening => &p.evening,
        Period::Night => &p.night,
    }
}

/// A 12-hour clock reading with its localized period of day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockText {
    pub time: String,
    pub period: &'static str,
}

pub fn format_clock(lang: Language, time: NaiveTime, with_seconds: bool) -> ClockText {
    let hour = time.hour();
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    let mut raw = format!("{}:{:02}", display_hour, time.minute());
    if with_seconds {
        raw.push_str(&format!(":{:02}", time.second()));
    }
    ClockText {
        time: localize_digits(lang, &raw),
        period: period_label(lang, period_of_day(hour)),
    }
}

pub fn ordinal_day(lang: Language, day: u32) -> String {
    let month = &strings(lang).ramadan_month;
    match lang {
        Language::Bn => {
            let ordinal = match day {
                1..=10 => BENGALI_ORDINALS[day as usize - 1].to_string(),
                _ => format!("{}তম", localize_digits(lang, &day.to_string())),
            };
            format!("{} {}", ordinal, month)
        }
        Language::Pt => format!("{}º {}", day, month),
        Language::En => {
            let suffix = match (day % 10, day % 100) {
                (1, k) if k != 11 => "st",
                (2, k) if k != 12 => "nd",
                (3, k) if k != 13 => "rd",
                _ => "th",
            };
            format!("{}{} {}", day, suffix, month)
        }
    }
}

pub fn month_name(lang: Language, month: u32) -> &'static str {
    &strings(lang).months[(month.clamp(1, 12) - 1) as usize]
}

pub fn weekday_name(lang: Language, weekday: Weekday) -> &'static str {
    &strings(lang).weekdays[weekday.num_days_from_monday() as usize]
}

pub fn localized_date(lang: Language, date: NaiveDate) -> String {
    let month = month_name(lang, date.month());
    let day = format!("{:02}", date.day());
    match lang {
        Language::Bn => format!(
            "{} {}, {}",
            localize_digits(lang, &day),
            month,
            localize_digits(lang, &date.year().to_string())
        ),
        Language::Pt => format!("{} de {}", day, month),
        Language::En => format!("{} {}", month, day),
    }
}

pub fn ashra_label(lang: Language, ashra: crate::calendar::Ashra) -> &'static str {
    let t = strings(lang);
    match ashra {
        crate::calendar::Ashra::Mercy => &t.ashra1,
        crate::calendar::Ashra::Blessing => &t.ashra2,
        crate::calendar::Ashra::Forgiveness => &t.ashra3,
    }
}
