use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

static CALENDAR: OnceLock<Vec<CalendarDay>> = OnceLock::new();

pub const RAMADAN_LENGTH: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub day_number: u32,
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub suhoor: NaiveTime,
    pub iftar: NaiveTime,
}

impl CalendarDay {
    pub fn days_remaining(&self) -> u32 {
        RAMADAN_LENGTH.saturating_sub(self.day_number)
    }

    pub fn ashra(&self) -> Ashra {
        Ashra::of(self.day_number)
    }
}

/// The three ten-day divisions of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ashra {
    Mercy,
    Blessing,
    Forgiveness,
}

impl Ashra {
    pub fn of(day_number: u32) -> Ashra {
        match day_number {
            0..=10 => Ashra::Mercy,
            11..=20 => Ashra::Blessing,
            _ => Ashra::Forgiveness,
        }
    }
}

/// Suhoor and iftar times for Mesquita Hazrat Hamza, Porto, Ramadan 1447.
pub fn calendar() -> &'static [CalendarDay] {
    CALENDAR.get_or_init(|| {
        let raw = include_str!("../assets/calendar_2026.txt");
        raw.lines()
            .filter_map(|line| {
                let t = line.trim();
                if t.is_empty() || t.starts_with('#') {
                    None
                } else {
                    Some(parse_row(t).expect("invalid calendar row"))
                }
            })
            .collect::<Vec<CalendarDay>>()
    })
}

fn parse_row(line: &str) -> Option<CalendarDay> {
    let mut parts = line.split_whitespace();
    let day_number = parts.next()?.parse::<u32>().ok()?;
    let date = NaiveDate::parse_from_str(parts.next()?, "%Y-%m-%d").ok()?;
    let weekday = parts.next()?.parse::<Weekday>().ok()?;
    let suhoor = NaiveTime::parse_from_str(parts.next()?, "%H:%M").ok()?;
    let iftar = NaiveTime::parse_from_str(parts.next()?, "%H:%M").ok()?;
    if date.weekday() != weekday {
        return None;
    }
    Some(CalendarDay {
        day_number,
        date,
        weekday,
        suhoor,
        iftar,
    })
}

pub fn index_of_date(days: &[CalendarDay], date: NaiveDate) -> Option<usize> {
    days.iter().position(|d| d.date == date)
}

/// Index of `today` in the table, or the first day when today is outside it.
pub fn today_index(days: &[CalendarDay], today: NaiveDate) -> usize {
    index_of_date(days, today).unwrap_or(0)
}

/// Selected position in the calendar, always within `[0, len - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCursor {
    index: usize,
    len: usize,
}

impl DayCursor {
    pub fn new(len: usize) -> Self {
        DayCursor { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        self.select(self.index.saturating_add(1));
    }

    pub fn prev(&mut self) {
        self.select(self.index.saturating_sub(1));
    }

    pub fn select(&mut self, index: usize) {
        self.index = index.min(self.len.saturating_sub(1));
    }

    pub fn jump_to(&mut self, days: &[CalendarDay], date: NaiveDate) {
        self.select(today_index(days, date));
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_row_rejects_wrong_weekday() {
        assert!(parse_row("1 2026-02-18 Monday 05:53 18:16").is_none());
        assert!(parse_row("1 2026-02-18 Wednesday 05:53 18:16").is_some());
    }

    #[test]
    fn parse_row_rejects_short_line() {
        assert!(parse_row("1 2026-02-18 Wednesday 05:53").is_none());
    }
}
