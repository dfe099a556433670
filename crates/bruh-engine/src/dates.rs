//! Symbolic date resolution.
//!
//! Saved filters may compare dates against named tokens such as `today` or
//! `end_of_week`. Tokens are resolved against an explicit reference date so
//! that evaluation stays deterministic.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A named date placeholder resolved at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateToken {
    Today,
    Tomorrow,
    Yesterday,
    EndOfWeek,
    EndOfMonth,
}

impl DateToken {
    /// All supported tokens.
    pub const ALL: [DateToken; 5] = [
        DateToken::Today,
        DateToken::Tomorrow,
        DateToken::Yesterday,
        DateToken::EndOfWeek,
        DateToken::EndOfMonth,
    ];

    /// Returns the token as written in filter configurations.
    pub fn as_str(&self) -> &'static str {
        match self {
            DateToken::Today => "today",
            DateToken::Tomorrow => "tomorrow",
            DateToken::Yesterday => "yesterday",
            DateToken::EndOfWeek => "end_of_week",
            DateToken::EndOfMonth => "end_of_month",
        }
    }
}

impl fmt::Display for DateToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateToken {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        DateToken::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

/// First day of the week used for `end_of_week`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    fn last_weekday(&self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Sun,
            WeekStart::Sunday => Weekday::Sat,
        }
    }
}

/// Resolves [`DateToken`]s against a reference date.
///
/// # Example
///
/// ```
/// use bruh_engine_rs::dates::{DateResolver, DateToken};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(); // a Wednesday
/// let resolver = DateResolver::default();
///
/// assert_eq!(
///     resolver.resolve(DateToken::EndOfWeek, today),
///     NaiveDate::from_ymd_opt(2024, 6, 9).unwrap(),
/// );
/// assert_eq!(
///     resolver.resolve(DateToken::EndOfMonth, today),
///     NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateResolver {
    week_start: WeekStart,
}

impl DateResolver {
    /// Creates a resolver with the given week start.
    pub fn new(week_start: WeekStart) -> Self {
        Self { week_start }
    }

    /// Returns the configured week start.
    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Resolves a token to a concrete date relative to `today`.
    pub fn resolve(&self, token: DateToken, today: NaiveDate) -> NaiveDate {
        match token {
            DateToken::Today => today,
            DateToken::Tomorrow => today + Duration::days(1),
            DateToken::Yesterday => today - Duration::days(1),
            DateToken::EndOfWeek => self.end_of_week(today),
            DateToken::EndOfMonth => end_of_month(today),
        }
    }

    fn end_of_week(&self, today: NaiveDate) -> NaiveDate {
        let last = self.week_start.last_weekday().num_days_from_monday() as i64;
        let current = today.weekday().num_days_from_monday() as i64;
        today + Duration::days((last - current).rem_euclid(7))
    }
}

/// Last calendar day of the month containing `date`.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.pred_opt())
        .unwrap_or(date)
}

/// Number of calendar days from `today` until `date` (negative when in the past).
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days()
}

/// Today's date on the local clock.
///
/// Only the outermost caller should read the clock; the engine itself always
/// takes the reference date as a parameter.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
