use std::env;
use std::io::Write;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Result};
use chrono::Local;

use ramadan_timetable::alarm::AdhanScheduler;
use ramadan_timetable::audio::{prefetch, AdhanPlayer, ClipSources, CpalBackend};
use ramadan_timetable::calendar::{calendar, today_index, CalendarDay};
use ramadan_timetable::countdown::DayView;
use ramadan_timetable::i18n::{
    ashra_label, format_clock, greeting_cards, localize_digits, localized_date, ordinal_day, strings, weekday_name,
    Language,
};
use ramadan_timetable::logging::{init_logging, DEFAULT_LEVEL};
use ramadan_timetable::settings::SettingsStore;
use ramadan_timetable::share::{day_request, share, ClipboardOnly, MosqueProfile, ShareOutcome};
use ramadan_timetable::storage::{data_dir, LocalStorage};
use ramadan_timetable::tts::{api_key_from_env, decode_voice, generate_voice, DEFAULT_VOICE};
use ramadan_timetable::wav_writer::write_clip_wav;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() == 1 || args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        return Ok(());
    }
    if let Err(e) = init_logging(DEFAULT_LEVEL) {
        eprintln!("{}", e);
    }

    let mut store = SettingsStore::new(LocalStorage::open_default());
    let mut settings = store.load();

    let command = args[1].clone();
    let mut positional: Vec<String> = Vec::new();
    let mut lang = None;
    let mut day_arg = None;
    let mut iftar = None;
    let mut suhoor = None;
    let mut volume = None;
    let mut message = None;
    let mut voice = DEFAULT_VOICE.to_string();
    let mut out = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--lang" => {
                i += 1;
                let raw = args.get(i).ok_or_else(|| anyhow!("missing lang"))?;
                lang = Some(Language::from_code(raw).ok_or_else(|| anyhow!("unknown language {}", raw))?);
            }
            "--day" => {
                i += 1;
                day_arg = Some(args.get(i).ok_or_else(|| anyhow!("missing day"))?.parse::<u32>()?);
            }
            "--iftar" => {
                i += 1;
                iftar = Some(parse_switch(args.get(i), "iftar")?);
            }
            "--suhoor" => {
                i += 1;
                suhoor = Some(parse_switch(args.get(i), "suhoor")?);
            }
            "--volume" => {
                i += 1;
                volume = Some(args.get(i).ok_or_else(|| anyhow!("missing volume"))?.parse::<f32>()?);
            }
            "--text" => {
                i += 1;
                message = args.get(i).cloned();
            }
            "--voice" => {
                i += 1;
                voice = args.get(i).cloned().ok_or_else(|| anyhow!("missing voice"))?;
            }
            "--out" => {
                i += 1;
                out = args.get(i).cloned();
            }
            other if !other.starts_with("--") => positional.push(other.to_string()),
            other => return Err(anyhow!("unknown option {}", other)),
        }
        i += 1;
    }

    let display_lang = lang.unwrap_or(settings.language);
    let days = calendar();
    let today = Local::now().naive_local().date();

    match command.as_str() {
        "today" => print_day(display_lang, today_index(days, today)),
        "day" => {
            let n = positional
                .first()
                .map(|raw| raw.parse::<u32>())
                .transpose()?
                .or(day_arg)
                .ok_or_else(|| anyhow!("missing day number"))?;
            print_day(display_lang, index_for_day(days, n)?);
        }
        "list" => print_list(display_lang, days),
        "greetings" => {
            for card in greeting_cards() {
                println!("[{}] {}", card.id, card.message(display_lang));
            }
        }
        "share" => {
            let index = match day_arg {
                Some(n) => index_for_day(days, n)?,
                None => today_index(days, today),
            };
            let profile = MosqueProfile::load(&data_dir());
            let request = day_request(display_lang, &days[index], &profile.share_url);
            match share(&mut ClipboardOnly, &request) {
                ShareOutcome::Copy(payload) => println!("{}", payload),
                ShareOutcome::Shared => {}
                ShareOutcome::Failed => return Err(anyhow!("share failed")),
            }
        }
        "settings" => {
            let changed = lang.is_some() || iftar.is_some() || suhoor.is_some() || volume.is_some();
            if let Some(lang) = lang {
                settings.language = lang;
            }
            if let Some(v) = iftar {
                settings.iftar_alarm_enabled = v;
            }
            if let Some(v) = suhoor {
                settings.suhoor_alarm_enabled = v;
            }
            if let Some(v) = volume {
                settings = settings.with_volume(v);
            }
            if changed {
                store.save(&settings)?;
            }
            println!("Language: {}", settings.language);
            println!("Iftar alarm: {}", on_off(settings.iftar_alarm_enabled));
            println!("Suhoor alarm: {}", on_off(settings.suhoor_alarm_enabled));
            println!("Volume: {:.0}%", settings.voice_volume * 100.0);
            println!("Stored in: {}", store.storage().path().display());
        }
        "watch" => watch(store)?,
        "tts" => {
            let message = message.ok_or_else(|| anyhow!("missing --text"))?;
            let out = out.ok_or_else(|| anyhow!("missing --out"))?;
            let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
            let client = reqwest::Client::new();
            let key = api_key_from_env();
            let data = runtime
                .block_on(generate_voice(&client, key.as_deref(), &message, &voice))
                .ok_or_else(|| anyhow!("speech synthesis failed"))?;
            let clip = decode_voice(&data).ok_or_else(|| anyhow!("speech response was not valid audio"))?;
            write_clip_wav(&clip, &out, |p| {
                print!("\rWriting {:>3}%", (p * 100.0) as u32);
                let _ = std::io::stdout().flush();
            })?;
            println!();
            println!("Wrote {:.1}s of speech to {}", clip.duration().as_secs_f32(), out);
        }
        other => {
            print_usage();
            return Err(anyhow!("unknown command {}", other));
        }
    }

    Ok(())
}

fn parse_switch(raw: Option<&String>, name: &str) -> Result<bool> {
    match raw.map(String::as_str) {
        Some("on") => Ok(true),
        Some("off") => Ok(false),
        Some(other) => Err(anyhow!("{} expects on|off, got {}", name, other)),
        None => Err(anyhow!("missing {}", name)),
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

fn index_for_day(days: &[CalendarDay], n: u32) -> Result<usize> {
    days.iter()
        .position(|d| d.day_number == n)
        .ok_or_else(|| anyhow!("day must be between 1 and {}", days.len()))
}

fn print_day(lang: Language, index: usize) {
    let t = strings(lang);
    let now = Local::now().naive_local();
    let view = DayView::compute(calendar(), index, now);
    let day = view.day;

    println!("{}", ordinal_day(lang, day.day_number));
    println!("{} ({})", localized_date(lang, day.date), weekday_name(lang, day.weekday));
    println!("{}", ashra_label(lang, view.ashra));
    println!(
        "{}: {}",
        t.days_remaining.replace('\n', " "),
        localize_digits(lang, &view.days_remaining.to_string())
    );

    let suhoor = format_clock(lang, view.suhoor_day.suhoor, false);
    let suhoor_status = match view.suhoor_countdown {
        Some(c) => format!("{} {}", t.suhoor_remaining, localize_digits(lang, &c.to_string())),
        None => t.suhoor_ended.clone(),
    };
    println!("{}: {} {} - {}", t.suhoor, suhoor.time, suhoor.period, suhoor_status);

    let iftar = format_clock(lang, day.iftar, false);
    let iftar_status = match view.iftar_countdown {
        Some(c) => format!("{} {}", t.iftar_remaining, localize_digits(lang, &c.to_string())),
        None => t.iftar_ended.clone(),
    };
    println!("{}: {} {} - {}", t.iftar, iftar.time, iftar.period, iftar_status);
}

fn print_list(lang: Language, days: &[CalendarDay]) {
    let t = strings(lang);
    println!("{:<6} {:<28} {:>8} {:>8}", t.ramadan_day, t.date, t.suhoor, t.iftar);
    for day in days {
        println!(
            "{:<6} {:<28} {:>8} {:>8}",
            localize_digits(lang, &day.day_number.to_string()),
            format!("{} {}", localized_date(lang, day.date), weekday_name(lang, day.weekday)),
            format_clock(lang, day.suhoor, false).time,
            format_clock(lang, day.iftar, false).time,
        );
    }
}

fn watch(store: SettingsStore) -> Result<()> {
    let settings = store.load();
    let mut adhan = AdhanScheduler::new(AdhanPlayer::new(CpalBackend::new(), ClipSources::default()));
    let days = calendar();

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
            Ok(runtime) => runtime,
            Err(e) => {
                log::error!("failed to start prefetch runtime: {}", e);
                return;
            }
        };
        let acquisition = runtime.block_on(prefetch(reqwest::Client::new(), ClipSources::default()));
        let _ = tx.send(acquisition);
    });

    println!(
        "Watching. Iftar alarm {}, suhoor alarm {}. Ctrl-C to quit.",
        on_off(settings.iftar_alarm_enabled),
        on_off(settings.suhoor_alarm_enabled)
    );

    loop {
        let millis = 1000 - Local::now().timestamp_subsec_millis().min(999);
        thread::sleep(Duration::from_millis(millis as u64));

        if let Ok(acquisition) = rx.try_recv() {
            adhan.player_mut().install(acquisition);
        }

        let now = Local::now().naive_local();
        let index = today_index(days, now.date());
        for event in adhan.tick(now, days.get(index), &settings).fired {
            println!();
            println!("{} time: playing adhan", event);
        }

        let view = DayView::compute(days, index, now);
        let suhoor = view.suhoor_countdown.map(|c| c.to_string()).unwrap_or_else(|| "--:--:--".to_string());
        let iftar = view.iftar_countdown.map(|c| c.to_string()).unwrap_or_else(|| "--:--:--".to_string());
        print!("\rDay {:>2}  suhoor in {}  iftar in {}  ", view.day.day_number, suhoor, iftar);
        let _ = std::io::stdout().flush();
    }
}

fn print_usage() {
    eprintln!("Usage: ramadan-timetable-cli <command> [options]");
    eprintln!("  today [--lang en|bn|pt]");
    eprintln!("  day N [--lang en|bn|pt]");
    eprintln!("  list [--lang en|bn|pt]");
    eprintln!("  greetings [--lang en|bn|pt]");
    eprintln!("  share [--day N] [--lang en|bn|pt]");
    eprintln!("  watch");
    eprintln!("  settings [--lang en|bn|pt] [--iftar on|off] [--suhoor on|off] [--volume 0.0-1.0]");
    eprintln!("  tts --text \"message\" [--voice Kore] --out speech.wav");
}
