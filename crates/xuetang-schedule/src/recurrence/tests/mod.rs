//! End-to-end checks of the recurrence engine against worked school schedules.


use chrono::{NaiveDate, NaiveDateTime};

use super::core::WeekdaySet;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).expect("valid time")
}

fn weekdays(numbers: &[u8]) -> WeekdaySet {
    WeekdaySet::from_numbers(numbers).expect("valid weekdays")
}
