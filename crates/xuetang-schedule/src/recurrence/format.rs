//! Display strings for weekday sets and rules.

use chrono::Weekday;

use super::core::{Frequency, RecurrenceRule, WeekdaySet, weekday_number};

/// Two-character labels indexed by Sunday-based weekday number.
pub const WEEKDAY_LABELS: [&str; 7] = ["周日", "周一", "周二", "周三", "周四", "周五", "周六"];

const SEPARATOR: &str = ", ";

#[must_use]
pub fn weekday_label(weekday: Weekday) -> &'static str {
    WEEKDAY_LABELS[usize::from(weekday_number(weekday))]
}

/// ## Summary
/// Labels for each weekday in the order given, e.g. `周五, 周一`.
///
/// Used where the display should echo the user's own selection order.
#[must_use]
pub fn format_weekdays(weekdays: &WeekdaySet) -> String {
    join_labels(weekdays.iter())
}

/// ## Summary
/// Labels for each distinct weekday, Sunday first, e.g. `周一, 周五`.
#[must_use]
pub fn format_weekdays_sorted(weekdays: &WeekdaySet) -> String {
    join_labels(weekdays.sorted())
}

fn join_labels(days: impl IntoIterator<Item = Weekday>) -> String {
    days.into_iter()
        .map(weekday_label)
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// ## Summary
/// One-line summary of a rule for schedule previews.
///
/// - weekly: `每周 周一, 周三, 周五，至 2024-01-14`
/// - daily: `每天，至 2024-01-07` or `每 2 天，至 2024-01-07`
#[must_use]
pub fn describe_rule(rule: &RecurrenceRule) -> String {
    let cadence = match rule.frequency {
        Frequency::Weekly => format!("每周 {}", format_weekdays_sorted(&rule.weekdays)),
        Frequency::Daily if rule.interval <= 1 => "每天".to_string(),
        Frequency::Daily => format!("每 {} 天", rule.interval),
    };
    format!("{cadence}，至 {}", rule.end_date.format("%Y-%m-%d"))
}
