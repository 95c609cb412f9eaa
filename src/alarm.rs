use chrono::{NaiveDateTime, NaiveTime, Timelike};
use log::info;

use crate::audio::{AdhanPlayer, AudioBackend, PlayerEvent};
use crate::calendar::CalendarDay;
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmEvent {
    Suhoor,
    Iftar,
}

impl std::fmt::Display for AlarmEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlarmEvent::Suhoor => write!(f, "suhoor"),
            AlarmEvent::Iftar => write!(f, "iftar"),
        }
    }
}

fn same_minute(a: NaiveTime, b: NaiveTime) -> bool {
    a.hour() == b.hour() && a.minute() == b.minute()
}

/// Alarms due at `now` for the selected day.
///
/// An event is due only on second zero of its minute, on the day's own date,
/// with its toggle enabled. The second-zero guard is the only de-duplication:
/// a tick that lands late in the trigger minute misses that alarm.
pub fn due_alarms(day: &CalendarDay, settings: &Settings, now: NaiveDateTime) -> Vec<AlarmEvent> {
    let mut due = Vec::new();
    if now.second() != 0 || day.date != now.date() {
        return due;
    }
    let clock = now.time();
    if settings.iftar_alarm_enabled && same_minute(clock, day.iftar) {
        due.push(AlarmEvent::Iftar);
    }
    if settings.suhoor_alarm_enabled && same_minute(clock, day.suhoor) {
        due.push(AlarmEvent::Suhoor);
    }
    due
}

/// Per-tick entry point of the alarm check.
#[derive(Debug, Default)]
pub struct AlarmTrigger {
    fired: u32,
}

impl AlarmTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_tick(&mut self, now: NaiveDateTime, day: Option<&CalendarDay>, settings: &Settings) -> Vec<AlarmEvent> {
        let Some(day) = day else {
            return Vec::new();
        };
        let due = due_alarms(day, settings, now);
        for event in &due {
            self.fired += 1;
            info!("{} alarm for ramadan day {} at {}", event, day.day_number, now);
        }
        due
    }

    /// Number of alarms fired since startup.
    pub fn fired(&self) -> u32 {
        self.fired
    }
}

/// What a tick changed that a caller may want to show.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub fired: Vec<AlarmEvent>,
    pub playback_ended: bool,
}

/// Drives the adhan from the one-second tick: fires due alarms and polls the
/// player. Playback failures end here; the player has already logged them.
pub struct AdhanScheduler<B: AudioBackend> {
    player: AdhanPlayer<B>,
    trigger: AlarmTrigger,
}

impl<B: AudioBackend> AdhanScheduler<B> {
    pub fn new(player: AdhanPlayer<B>) -> Self {
        AdhanScheduler {
            player,
            trigger: AlarmTrigger::new(),
        }
    }

    pub fn player(&self) -> &AdhanPlayer<B> {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut AdhanPlayer<B> {
        &mut self.player
    }

    pub fn trigger(&self) -> &AlarmTrigger {
        &self.trigger
    }

    pub fn tick(&mut self, now: NaiveDateTime, day: Option<&CalendarDay>, settings: &Settings) -> TickReport {
        let fired = self.trigger.on_tick(now, day, settings);
        if !fired.is_empty() {
            self.player.play(false, settings.voice_volume);
        }
        let playback_ended = match self.player.poll() {
            Some(PlayerEvent::Ended) => true,
            Some(PlayerEvent::SwitchedToMirror) | Some(PlayerEvent::GaveUp(_)) | None => false,
        };
        TickReport { fired, playback_ended }
    }
}
