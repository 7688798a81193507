//! Weekday numbering and the ordered weekday set used by weekly rules.
//!
//! Weekdays travel as the numbers 0-6 with 0 = Sunday, matching the
//! schedule forms. Internally they are `chrono::Weekday`.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A weekday number outside 0-6.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("weekday number {0} is outside 0-6 (0 = Sunday)")]
pub struct InvalidWeekday(pub u8);

/// Maps a Sunday-based weekday number to a `Weekday`.
#[must_use]
pub const fn weekday_from_number(number: u8) -> Option<Weekday> {
    match number {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

/// Maps a `Weekday` to its Sunday-based number.
#[must_use]
pub const fn weekday_number(weekday: Weekday) -> u8 {
    match weekday {
        Weekday::Sun => 0,
        Weekday::Mon => 1,
        Weekday::Tue => 2,
        Weekday::Wed => 3,
        Weekday::Thu => 4,
        Weekday::Fri => 5,
        Weekday::Sat => 6,
    }
}

/// ## Summary
/// Weekdays a weekly rule meets on, in the order they were given.
///
/// Order is kept so displays can echo what the user picked; membership
/// checks ignore order and duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct WeekdaySet(Vec<Weekday>);

impl WeekdaySet {
    #[must_use]
    pub fn new(days: impl IntoIterator<Item = Weekday>) -> Self {
        Self(days.into_iter().collect())
    }

    /// ## Summary
    /// Builds a set from Sunday-based numbers.
    ///
    /// ## Errors
    /// Returns `InvalidWeekday` for the first number outside 0-6.
    pub fn from_numbers(numbers: &[u8]) -> Result<Self, InvalidWeekday> {
        numbers
            .iter()
            .map(|&n| weekday_from_number(n).ok_or(InvalidWeekday(n)))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn contains(&self, weekday: Weekday) -> bool {
        self.0.contains(&weekday)
    }

    /// Weekdays in input order, duplicates included.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.0.iter().copied()
    }

    /// Distinct weekdays, Sunday first.
    #[must_use]
    pub fn sorted(&self) -> Vec<Weekday> {
        let mut days = self.0.clone();
        days.sort_by_key(|&day| weekday_number(day));
        days.dedup();
        days
    }

    /// Sunday-based numbers in input order.
    #[must_use]
    pub fn numbers(&self) -> Vec<u8> {
        self.iter().map(weekday_number).collect()
    }
}

impl TryFrom<Vec<u8>> for WeekdaySet {
    type Error = InvalidWeekday;

    fn try_from(numbers: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_numbers(&numbers)
    }
}

impl From<WeekdaySet> for Vec<u8> {
    fn from(set: WeekdaySet) -> Self {
        set.numbers()
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<T: IntoIterator<Item = Weekday>>(iter: T) -> Self {
        Self::new(iter)
    }
}
