use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use chrono::Duration;

use ramadan_timetable::alarm::{AdhanScheduler, AlarmEvent, TickReport};
use ramadan_timetable::audio::{
    Acquisition, AdhanPlayer, AudioBackend, ClipSources, DecodedClip, PlayerEvent, StreamHandle, Voice, VoiceStatus,
};
use ramadan_timetable::calendar::calendar;
use ramadan_timetable::settings::Settings;

const PRIMARY: &str = "http://primary.test/adhan.mp3";
const MIRROR: &str = "http://mirror.test/adhan.mp3";

struct FakeVoice {
    status: Rc<RefCell<VoiceStatus>>,
    stops: Rc<Cell<u32>>,
}

impl Voice for FakeVoice {
    fn status(&mut self) -> VoiceStatus {
        self.status.borrow().clone()
    }

    fn stop(&mut self) -> Result<()> {
        self.stops.set(self.stops.get() + 1);
        Ok(())
    }
}

#[derive(Default)]
struct FakeBackend {
    starts: RefCell<Vec<String>>,
    voices: RefCell<Vec<Rc<RefCell<VoiceStatus>>>>,
    stops: Rc<Cell<u32>>,
    refuse: Vec<String>,
    buffer_broken: bool,
}

impl FakeBackend {
    fn voice(&self) -> Box<dyn Voice> {
        let status = Rc::new(RefCell::new(VoiceStatus::Playing));
        self.voices.borrow_mut().push(status.clone());
        Box::new(FakeVoice {
            status,
            stops: self.stops.clone(),
        })
    }

    fn starts(&self) -> Vec<String> {
        self.starts.borrow().clone()
    }

    fn set_last_status(&self, status: VoiceStatus) {
        let voices = self.voices.borrow();
        *voices.last().unwrap().borrow_mut() = status;
    }
}

impl AudioBackend for FakeBackend {
    fn start_buffer(&mut self, _clip: Arc<DecodedClip>, _volume: f32) -> Result<Box<dyn Voice>> {
        self.starts.borrow_mut().push("buffer".to_string());
        if self.buffer_broken {
            return Err(anyhow!("no output device"));
        }
        Ok(self.voice())
    }

    fn start_stream(&mut self, url: &str, _volume: f32) -> Result<Box<dyn Voice>> {
        self.starts.borrow_mut().push(url.to_string());
        if self.refuse.iter().any(|u| u == url) {
            return Err(anyhow!("refused {}", url));
        }
        Ok(self.voice())
    }
}

fn sources() -> ClipSources {
    ClipSources {
        primary: PRIMARY.to_string(),
        mirror: MIRROR.to_string(),
    }
}

fn clip() -> Acquisition {
    Acquisition::Decoded(Arc::new(DecodedClip {
        samples: vec![0.0; 16],
        channels: 1,
        sample_rate: 8_000,
    }))
}

fn player(backend: FakeBackend) -> AdhanPlayer<FakeBackend> {
    AdhanPlayer::new(backend, sources())
}

#[test]
fn preview_toggles_off_on_second_press() {
    let mut player = player(FakeBackend::default());
    player.install(clip());

    player.play(true, 0.8);
    assert!(player.is_previewing());
    assert!(player.is_playing());

    player.play(true, 0.8);
    assert!(!player.is_previewing());
    assert!(!player.is_playing());
    assert_eq!(player.backend().starts(), vec!["buffer"]);
    assert_eq!(player.backend().stops.get(), 1);
}

#[test]
fn alarm_replaces_running_preview() {
    let mut player = player(FakeBackend::default());
    player.install(clip());

    player.play(true, 0.8);
    player.play(false, 0.8);
    assert!(!player.is_previewing());
    assert!(player.is_playing());
    assert_eq!(player.backend().starts(), vec!["buffer", "buffer"]);
    assert_eq!(player.backend().stops.get(), 1);
}

#[test]
fn streams_primary_without_a_buffer() {
    let mut player = player(FakeBackend::default());
    player.play(false, 0.5);
    assert_eq!(player.backend().starts(), vec![PRIMARY]);
    assert!(!player.stream_handle().unwrap().is_on_mirror());
}

#[test]
fn rejected_stream_retries_once_on_mirror() {
    let mut player = player(FakeBackend::default());
    player.play(false, 0.5);

    player.backend().set_last_status(VoiceStatus::Failed("404".to_string()));
    assert_eq!(player.poll(), Some(PlayerEvent::SwitchedToMirror));
    assert_eq!(player.backend().starts(), vec![PRIMARY, MIRROR]);
    assert!(player.stream_handle().unwrap().is_on_mirror());
    assert!(player.is_playing());

    player.backend().set_last_status(VoiceStatus::Failed("404".to_string()));
    assert_eq!(player.poll(), Some(PlayerEvent::GaveUp("404".to_string())));
    assert!(!player.is_playing());
    assert_eq!(player.backend().starts().len(), 2);
}

#[test]
fn immediate_refusal_moves_to_mirror() {
    let backend = FakeBackend {
        refuse: vec![PRIMARY.to_string()],
        ..FakeBackend::default()
    };
    let mut player = player(backend);
    player.play(false, 0.5);
    assert_eq!(player.backend().starts(), vec![PRIMARY, MIRROR]);
    assert!(player.is_playing());
}

#[test]
fn gives_up_when_both_sources_refuse() {
    let backend = FakeBackend {
        refuse: vec![PRIMARY.to_string(), MIRROR.to_string()],
        ..FakeBackend::default()
    };
    let mut player = player(backend);
    player.play(true, 0.5);
    assert!(!player.is_playing());
    assert!(!player.is_previewing());
    assert_eq!(player.poll(), None);
}

#[test]
fn broken_buffer_falls_back_to_stream() {
    let backend = FakeBackend {
        buffer_broken: true,
        ..FakeBackend::default()
    };
    let mut player = player(backend);
    player.install(clip());
    player.play(false, 0.5);
    assert_eq!(player.backend().starts(), vec!["buffer", PRIMARY]);
    assert!(player.is_playing());
}

#[test]
fn completion_clears_preview_state() {
    let mut player = player(FakeBackend::default());
    player.install(clip());
    player.play(true, 0.5);

    assert_eq!(player.poll(), None);
    player.backend().set_last_status(VoiceStatus::Ended);
    assert_eq!(player.poll(), Some(PlayerEvent::Ended));
    assert!(!player.is_playing());
    assert!(!player.is_previewing());
}

#[test]
fn installed_stream_handle_keeps_its_source() {
    let mut handle = StreamHandle::new(&sources());
    handle.use_mirror();
    let mut player = player(FakeBackend::default());
    player.install(Acquisition::Streaming(handle));
    assert!(!player.has_buffer());

    player.play(false, 0.5);
    assert_eq!(player.backend().starts(), vec![MIRROR]);
}

#[test]
fn stop_without_playback_is_harmless() {
    let mut player = player(FakeBackend::default());
    player.stop();
    assert!(!player.is_playing());
    assert_eq!(player.backend().stops.get(), 0);
}

#[test]
fn tick_fires_alarm_and_stays_quiet_when_both_sources_fail() {
    let settings = Settings::default();
    let day = &calendar()[0];
    let at_iftar = day.date.and_time(day.iftar);
    let mut adhan = AdhanScheduler::new(player(FakeBackend::default()));

    let report = adhan.tick(at_iftar, Some(day), &settings);
    assert_eq!(report.fired, vec![AlarmEvent::Iftar]);
    assert!(!report.playback_ended);
    assert_eq!(adhan.player().backend().starts(), vec![PRIMARY]);

    adhan.player().backend().set_last_status(VoiceStatus::Failed("404".to_string()));
    let report = adhan.tick(at_iftar + Duration::seconds(1), Some(day), &settings);
    assert_eq!(report, TickReport::default());
    assert!(adhan.player().stream_handle().unwrap().is_on_mirror());

    adhan.player().backend().set_last_status(VoiceStatus::Failed("404".to_string()));
    let report = adhan.tick(at_iftar + Duration::seconds(2), Some(day), &settings);
    assert_eq!(report, TickReport::default());
    assert!(!adhan.player().is_playing());
    assert_eq!(adhan.trigger().fired(), 1);
}

#[test]
fn tick_reports_finished_playback() {
    let settings = Settings::default();
    let day = &calendar()[0];
    let at_suhoor = day.date.and_time(day.suhoor);
    let mut adhan = AdhanScheduler::new(player(FakeBackend::default()));
    adhan.player_mut().install(clip());

    let report = adhan.tick(at_suhoor, Some(day), &settings);
    assert_eq!(report.fired, vec![AlarmEvent::Suhoor]);
    assert_eq!(adhan.player().backend().starts(), vec!["buffer"]);

    adhan.player().backend().set_last_status(VoiceStatus::Ended);
    let report = adhan.tick(at_suhoor + Duration::seconds(1), Some(day), &settings);
    assert!(report.fired.is_empty());
    assert!(report.playback_ended);
    assert!(!adhan.player().is_playing());
}

#[test]
fn tick_without_a_selected_day_only_polls() {
    let settings = Settings::default();
    let day = &calendar()[0];
    let mut adhan = AdhanScheduler::new(player(FakeBackend::default()));

    let report = adhan.tick(day.date.and_time(day.iftar), None, &settings);
    assert_eq!(report, TickReport::default());
    assert!(adhan.player().backend().starts().is_empty());
}
