//! RFC 5545 rendering of rules, for calendars that mirror class sessions.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use rrule::RRuleSet;

use super::core::{Frequency, RecurrenceRule, weekday_number};
use super::validate::ValidationError;
use crate::error::{ScheduleError, ScheduleResult};

const UTC_FORMAT: &str = "%Y%m%dT%H%M%SZ";
const LOCAL_FORMAT: &str = "%Y%m%dT%H%M%S";

const BYDAY_CODES: [&str; 7] = ["SU", "MO", "TU", "WE", "TH", "FR", "SA"];

/// ## Summary
/// Renders a rule as `DTSTART`/`RRULE` lines anchored at `base_start`.
///
/// `base_start` is a wall-clock time in `tz`. `UNTIL` is the last second of
/// `rule.end_date` in `tz`, expressed in UTC. The text is parsed back with
/// the `rrule` crate before it is returned.
///
/// ## Errors
///
/// Returns an error if:
/// - the rule has no weekdays (weekly) or a zero interval (daily)
/// - the end of `rule.end_date` does not exist in `tz`
/// - the `rrule` crate rejects the rendered rule, e.g. `UNTIL` before `DTSTART`
pub fn to_rrule(base_start: NaiveDateTime, rule: &RecurrenceRule, tz: Tz) -> ScheduleResult<String> {
    let body = rrule_body(rule)?;
    let until = end_of_day_utc(rule.end_date, tz)?;

    let dtstart = if tz == chrono_tz::UTC {
        format!("DTSTART:{}", base_start.format(UTC_FORMAT))
    } else {
        format!("DTSTART;TZID={}:{}", tz.name(), base_start.format(LOCAL_FORMAT))
    };

    let text = format!("{dtstart}\nRRULE:{body};UNTIL={}", until.format(UTC_FORMAT));
    text.parse::<RRuleSet>()?;

    tracing::trace!(rrule = %text, "Rendered RRULE");
    Ok(text)
}

fn rrule_body(rule: &RecurrenceRule) -> ScheduleResult<String> {
    match rule.frequency {
        Frequency::Weekly => {
            if rule.weekdays.is_empty() {
                return Err(ValidationError::MissingWeekdays.into());
            }
            let byday = rule
                .weekdays
                .sorted()
                .into_iter()
                .map(|day| BYDAY_CODES[usize::from(weekday_number(day))])
                .collect::<Vec<_>>()
                .join(",");
            Ok(format!("FREQ=WEEKLY;BYDAY={byday}"))
        }
        Frequency::Daily => {
            if rule.interval < 1 {
                return Err(ValidationError::InvalidInterval.into());
            }
            Ok(format!("FREQ=DAILY;INTERVAL={}", rule.interval))
        }
    }
}

fn end_of_day_utc(date: NaiveDate, tz: Tz) -> ScheduleResult<DateTime<Utc>> {
    let local = date
        .and_hms_opt(23, 59, 59)
        .ok_or_else(|| ScheduleError::InvalidDateTime(format!("end of {date}")))?;

    tz.from_local_datetime(&local)
        .latest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| ScheduleError::InvalidDateTime(format!("{local} does not exist in {tz}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recurrence::core::{BaseSession, WeekdaySet};
    use crate::recurrence::expand::{ExpansionOptions, expand};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, 0))
            .expect("valid date-time")
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn rrule_count(text: &str) -> usize {
        text.parse::<RRuleSet>()
            .expect("valid rrule")
            .all(500)
            .dates
            .len()
    }

    #[test]
    fn weekly_utc() {
        let rule = RecurrenceRule::weekly(
            WeekdaySet::from_numbers(&[5, 1, 3]).expect("valid"),
            date(2024, 1, 14),
        );
        let text = to_rrule(at(2024, 1, 1, 18, 0), &rule, chrono_tz::UTC).expect("renders");

        assert_eq!(
            text,
            "DTSTART:20240101T180000Z\nRRULE:FREQ=WEEKLY;BYDAY=MO,WE,FR;UNTIL=20240114T235959Z"
        );
    }

    #[test]
    fn daily_in_school_zone() {
        let rule = RecurrenceRule::daily(2, date(2024, 1, 7));
        let text =
            to_rrule(at(2024, 1, 1, 9, 0), &rule, chrono_tz::Asia::Shanghai).expect("renders");

        // 23:59:59 in Shanghai is 15:59:59 UTC.
        assert_eq!(
            text,
            "DTSTART;TZID=Asia/Shanghai:20240101T090000\nRRULE:FREQ=DAILY;INTERVAL=2;UNTIL=20240107T155959Z"
        );
    }

    #[test]
    fn matches_expansion_count() {
        let options = ExpansionOptions::default();

        let weekly = RecurrenceRule::weekly(
            WeekdaySet::from_numbers(&[1, 3, 5]).expect("valid"),
            date(2024, 3, 31),
        );
        let base = BaseSession::new(at(2024, 1, 3, 18, 0), at(2024, 1, 3, 20, 0), ());
        let text = to_rrule(base.start_time, &weekly, chrono_tz::UTC).expect("renders");
        let expanded = expand(&base, &weekly, &options).expect("within limits");
        assert_eq!(rrule_count(&text), expanded.len());

        let daily = RecurrenceRule::daily(3, date(2024, 2, 29));
        let base = BaseSession::new(at(2024, 1, 1, 9, 0), at(2024, 1, 1, 10, 30), ());
        let text = to_rrule(base.start_time, &daily, chrono_tz::UTC).expect("renders");
        let expanded = expand(&base, &daily, &options).expect("within limits");
        assert_eq!(rrule_count(&text), expanded.len());
    }

    #[test]
    fn rejects_rules_without_cadence() {
        let weekly = RecurrenceRule::weekly(WeekdaySet::default(), date(2024, 1, 14));
        assert!(matches!(
            to_rrule(at(2024, 1, 1, 9, 0), &weekly, chrono_tz::UTC),
            Err(ScheduleError::Validation(ValidationError::MissingWeekdays))
        ));

        let daily = RecurrenceRule::daily(0, date(2024, 1, 14));
        assert!(matches!(
            to_rrule(at(2024, 1, 1, 9, 0), &daily, chrono_tz::UTC),
            Err(ScheduleError::Validation(ValidationError::InvalidInterval))
        ));
    }
}
