//! Lazy occurrence generation.

use std::iter::FusedIterator;

use chrono::{Datelike, Days, NaiveDateTime, NaiveTime, TimeDelta};

use crate::recurrence::core::{Frequency, RecurrenceRule};

/// Start and end of one occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Occurrence {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Occurrence {
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// ## Summary
/// Iterator over the occurrences of `rule` for a template running from
/// `start` to `end`.
///
/// Weekly rules walk one calendar day at a time from the template's start
/// date and yield on listed weekdays at the template's time of day. Daily
/// rules start at the template's exact start and step `interval` days.
/// Either stops once the cursor's date passes `rule.end_date`.
///
/// Nothing here is bounded: a daily rule with `interval == 0` never
/// advances. `expand` applies the guards.
#[derive(Debug, Clone)]
pub struct Occurrences<'a> {
    rule: &'a RecurrenceRule,
    time_of_day: NaiveTime,
    duration: TimeDelta,
    cursor: Option<NaiveDateTime>,
}

/// Creates the occurrence iterator for a template and rule.
#[must_use]
pub fn occurrences(
    start: NaiveDateTime,
    end: NaiveDateTime,
    rule: &RecurrenceRule,
) -> Occurrences<'_> {
    let cursor = match rule.frequency {
        Frequency::Weekly if rule.weekdays.is_empty() => None,
        Frequency::Weekly => Some(start.date().and_time(NaiveTime::MIN)),
        Frequency::Daily => Some(start),
    };

    Occurrences {
        rule,
        time_of_day: start.time(),
        duration: end - start,
        cursor,
    }
}

impl Occurrences<'_> {
    fn next_weekly(&mut self) -> Option<Occurrence> {
        while let Some(cursor) = self.cursor {
            let day = cursor.date();
            if day > self.rule.end_date {
                self.cursor = None;
                break;
            }

            self.cursor = cursor.checked_add_days(Days::new(1));

            if self.rule.weekdays.contains(day.weekday()) {
                return self.emit(day.and_time(self.time_of_day));
            }
        }
        None
    }

    fn next_daily(&mut self) -> Option<Occurrence> {
        let cursor = self.cursor?;
        if cursor.date() > self.rule.end_date {
            self.cursor = None;
            return None;
        }

        self.cursor = cursor.checked_add_days(Days::new(u64::from(self.rule.interval)));
        self.emit(cursor)
    }

    fn emit(&mut self, start: NaiveDateTime) -> Option<Occurrence> {
        let Some(end) = start.checked_add_signed(self.duration) else {
            self.cursor = None;
            return None;
        };
        Some(Occurrence { start, end })
    }
}

impl Iterator for Occurrences<'_> {
    type Item = Occurrence;

    fn next(&mut self) -> Option<Self::Item> {
        match self.rule.frequency {
            Frequency::Weekly => self.next_weekly(),
            Frequency::Daily => self.next_daily(),
        }
    }
}

impl FusedIterator for Occurrences<'_> {}
