use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::calendar::{Ashra, CalendarDay};

const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_SECOND: i64 = 1_000;

/// Time left until a target instant, split into display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub millis: i64,
}

impl Countdown {
    fn from_millis(diff: i64) -> Self {
        Countdown {
            hours: diff / MS_PER_HOUR,
            minutes: (diff % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (diff % MS_PER_MINUTE) / MS_PER_SECOND,
            millis: diff % MS_PER_SECOND,
        }
    }

    pub fn total_millis(&self) -> i64 {
        self.hours * MS_PER_HOUR + self.minutes * MS_PER_MINUTE + self.seconds * MS_PER_SECOND + self.millis
    }
}

impl std::fmt::Display for Countdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// `None` once the target has been reached.
pub fn countdown_to(time: NaiveTime, date: NaiveDate, now: NaiveDateTime) -> Option<Countdown> {
    let target = date.and_time(time);
    let diff = (target - now).num_milliseconds();
    if diff <= 0 {
        return None;
    }
    Some(Countdown::from_millis(diff))
}

pub fn is_after_iftar(day: &CalendarDay, now: NaiveDateTime) -> bool {
    if day.date != now.date() {
        return false;
    }
    now > day.date.and_time(day.iftar)
}

/// Record whose suhoor is relevant for the selected day. After today's iftar
/// this is tomorrow's record, when the table has one.
pub fn suhoor_target(days: &[CalendarDay], index: usize, now: NaiveDateTime) -> &CalendarDay {
    let current = &days[index.min(days.len() - 1)];
    if is_after_iftar(current, now) {
        if let Some(tomorrow) = days.get(index + 1) {
            return tomorrow;
        }
    }
    current
}

/// Display fields for the selected day at `now`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayView<'a> {
    pub day: &'a CalendarDay,
    pub suhoor_day: &'a CalendarDay,
    pub suhoor_countdown: Option<Countdown>,
    pub iftar_countdown: Option<Countdown>,
    pub is_today: bool,
    pub after_iftar: bool,
    pub ashra: Ashra,
    pub days_remaining: u32,
}

impl<'a> DayView<'a> {
    pub fn compute(days: &'a [CalendarDay], index: usize, now: NaiveDateTime) -> Self {
        let day = &days[index.min(days.len() - 1)];
        let suhoor_day = suhoor_target(days, index, now);
        DayView {
            day,
            suhoor_day,
            suhoor_countdown: countdown_to(suhoor_day.suhoor, suhoor_day.date, now),
            iftar_countdown: countdown_to(day.iftar, day.date, now),
            is_today: day.date == now.date(),
            after_iftar: is_after_iftar(day, now),
            ashra: day.ashra(),
            days_remaining: day.days_remaining(),
        }
    }
}
