use crate::error::ParseError::MalformedDate;
use crate::error::Result;
use crate::membership_plan::PlanCode;
use chrono::{Datelike, Local, Months, NaiveDate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::LazyLock;

const ADULT_AGE: i32 = 18;

static DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<month>\d+)/(?<day>\d+)/(?<year>\d+)$").expect("Date pattern should compile.")
});

/// A calendar date as typed by a user or read from a record source.
///
/// Unlike [NaiveDate], a [CalendarDate] may hold a day that doesn't exist (e.g. `2/30/2023`),
/// so that it can be reported as such. Use [CalendarDate::is_valid] before trusting it.
/// Ordering is chronological: (year, month, day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// The process wall-clock date.
    pub fn today() -> Self {
        Local::now().date_naive().into()
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn is_valid(&self) -> bool {
        (1..=12).contains(&self.month) && (1..=days_in_month(self.year, self.month)).contains(&self.day)
    }

    /// Whether this date is strictly before today.
    /// Used for expiration dates and, inverted, to reject birth dates set today or in the future.
    pub fn is_expired(&self) -> bool {
        *self < Self::today()
    }

    pub fn is_underage(&self) -> bool {
        self.is_underage_on(&Self::today())
    }

    /// Age is computed from years and months only, the day of month is ignored.
    pub fn is_underage_on(&self, today: &CalendarDate) -> bool {
        let age = today.year - self.year;
        age < ADULT_AGE || (age == ADULT_AGE && self.month > today.month)
    }

    /// Expiration date of a membership subscribed today.
    pub fn compute_expiration(plan_code: PlanCode) -> Self {
        Self::expiration_from(Local::now().date_naive(), plan_code)
    }

    /// Advances `start` by the plan's billing interval.
    /// The day is clamped to the last day of the destination month (Jan 31 + 1 month => Feb 28/29).
    pub fn expiration_from(start: NaiveDate, plan_code: PlanCode) -> Self {
        start
            .checked_add_months(Months::new(plan_code.billing_interval()))
            .unwrap_or(NaiveDate::MAX)
            .into()
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month`, or 0 if `month` is out of range.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }
}

impl FromStr for CalendarDate {
    type Err = crate::error::ParseError;

    /// Parses `mm/dd/yyyy`. Out-of-range components are accepted, see [CalendarDate::is_valid].
    fn from_str(s: &str) -> Result<Self> {
        let captures = DATE_REGEX
            .captures(s.trim())
            .ok_or_else(|| MalformedDate(s.to_owned()))?;

        Ok(Self::new(
            convert_match_to_integer(&captures, "year", s)?,
            convert_match_to_integer(&captures, "month", s)?,
            convert_match_to_integer(&captures, "day", s)?,
        ))
    }
}

fn convert_match_to_integer<T: FromStr>(captures: &Captures, key: &str, source: &str) -> Result<T> {
    captures[key]
        .parse::<T>()
        .or(Err(MalformedDate(source.to_owned())))
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.month, self.day, self.year)
    }
}
