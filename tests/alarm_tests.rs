use chrono::{NaiveDate, NaiveDateTime};

use ramadan_timetable::alarm::{due_alarms, AlarmEvent, AlarmTrigger};
use ramadan_timetable::calendar::calendar;
use ramadan_timetable::settings::Settings;

fn at(d: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 2, d).unwrap().and_hms_opt(h, m, s).unwrap()
}

#[test]
fn fires_on_second_zero_of_the_iftar_minute() {
    let day = &calendar()[0];
    let settings = Settings::default();
    assert_eq!(due_alarms(day, &settings, at(18, 18, 16, 0)), vec![AlarmEvent::Iftar]);
    assert!(due_alarms(day, &settings, at(18, 18, 16, 1)).is_empty());
    assert!(due_alarms(day, &settings, at(18, 18, 15, 0)).is_empty());
}

#[test]
fn fires_for_suhoor() {
    let day = &calendar()[0];
    let settings = Settings::default();
    assert_eq!(due_alarms(day, &settings, at(18, 5, 53, 0)), vec![AlarmEvent::Suhoor]);
}

#[test]
fn disabled_toggles_suppress_alarms() {
    let day = &calendar()[0];
    let settings = Settings {
        iftar_alarm_enabled: false,
        suhoor_alarm_enabled: false,
        ..Settings::default()
    };
    assert!(due_alarms(day, &settings, at(18, 18, 16, 0)).is_empty());
    assert!(due_alarms(day, &settings, at(18, 5, 53, 0)).is_empty());
}

#[test]
fn selected_day_must_be_today() {
    let day = &calendar()[1];
    let settings = Settings::default();
    assert!(due_alarms(day, &settings, at(18, 18, 17, 0)).is_empty());
    assert_eq!(due_alarms(day, &settings, at(19, 18, 17, 0)), vec![AlarmEvent::Iftar]);
}

#[test]
fn trigger_counts_fired_alarms() {
    let days = calendar();
    let settings = Settings::default();
    let mut trigger = AlarmTrigger::new();

    assert!(trigger.on_tick(at(18, 18, 16, 0), None, &settings).is_empty());
    assert_eq!(trigger.on_tick(at(18, 18, 16, 0), days.first(), &settings), vec![AlarmEvent::Iftar]);
    assert!(trigger.on_tick(at(18, 18, 16, 1), days.first(), &settings).is_empty());
    assert_eq!(trigger.fired(), 1);
}
