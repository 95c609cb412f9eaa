use chrono::{Duration, NaiveDate, NaiveTime, Weekday};

use ramadan_timetable::calendar::{calendar, index_of_date, today_index, Ashra, DayCursor, RAMADAN_LENGTH};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn table_has_thirty_consecutive_days() {
    let days = calendar();
    assert_eq!(days.len(), RAMADAN_LENGTH as usize);
    for (i, day) in days.iter().enumerate() {
        assert_eq!(day.day_number, i as u32 + 1);
        assert_eq!(day.date, date(2026, 2, 18) + Duration::days(i as i64));
        assert!(day.suhoor < day.iftar);
    }
}

#[test]
fn first_and_last_rows_match_the_printed_table() {
    let days = calendar();
    let first = &days[0];
    assert_eq!(first.date, date(2026, 2, 18));
    assert_eq!(first.weekday, Weekday::Wed);
    assert_eq!(first.suhoor, NaiveTime::from_hms_opt(5, 53, 0).unwrap());
    assert_eq!(first.iftar, NaiveTime::from_hms_opt(18, 16, 0).unwrap());

    let last = &days[29];
    assert_eq!(last.date, date(2026, 3, 19));
    assert_eq!(last.weekday, Weekday::Thu);
    assert_eq!(last.iftar, NaiveTime::from_hms_opt(18, 49, 0).unwrap());
}

#[test]
fn days_remaining_counts_down_to_zero() {
    let days = calendar();
    assert_eq!(days[0].days_remaining(), 29);
    assert_eq!(days[14].days_remaining(), 15);
    assert_eq!(days[29].days_remaining(), 0);
}

#[test]
fn ashra_boundaries() {
    assert_eq!(Ashra::of(1), Ashra::Mercy);
    assert_eq!(Ashra::of(10), Ashra::Mercy);
    assert_eq!(Ashra::of(11), Ashra::Blessing);
    assert_eq!(Ashra::of(20), Ashra::Blessing);
    assert_eq!(Ashra::of(21), Ashra::Forgiveness);
    assert_eq!(Ashra::of(30), Ashra::Forgiveness);
}

#[test]
fn today_index_defaults_to_first_day_outside_the_month() {
    let days = calendar();
    assert_eq!(today_index(days, date(2026, 2, 19)), 1);
    assert_eq!(today_index(days, date(2026, 3, 19)), 29);
    assert_eq!(today_index(days, date(2026, 1, 1)), 0);
    assert_eq!(today_index(days, date(2026, 3, 20)), 0);
    assert_eq!(index_of_date(days, date(2026, 3, 20)), None);
}

#[test]
fn cursor_stays_within_the_table() {
    let days = calendar();
    let mut cursor = DayCursor::new(days.len());
    assert!(cursor.is_first());
    cursor.prev();
    assert_eq!(cursor.index(), 0);

    cursor.select(100);
    assert_eq!(cursor.index(), 29);
    assert!(cursor.is_last());
    cursor.next();
    assert_eq!(cursor.index(), 29);

    cursor.prev();
    assert_eq!(cursor.index(), 28);
}

#[test]
fn cursor_jumps_to_date() {
    let days = calendar();
    let mut cursor = DayCursor::new(days.len());
    cursor.jump_to(days, date(2026, 3, 1));
    assert_eq!(days[cursor.index()].day_number, 12);

    cursor.jump_to(days, date(2027, 1, 1));
    assert_eq!(cursor.index(), 0);
}
