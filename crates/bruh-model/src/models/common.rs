//! Enumerations and date helpers shared by task records and filters.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ModelError;

/// Task priority.
///
/// Variants are declared from least to most important, so the derived
/// ordering sorts `Low < Normal < High < Urgent`.
///
/// # Example
///
/// ```
/// use bruh_model_rs::models::Priority;
///
/// let priority: Priority = "urgent".parse().unwrap();
/// assert!(priority > Priority::High);
/// assert!(priority.is_important());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

impl Priority {
    /// All priorities in ascending order.
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Normal,
        Priority::High,
        Priority::Urgent,
    ];

    /// Returns the wire name of this priority.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }

    /// High and urgent tasks count as important in the Eisenhower matrix.
    pub fn is_important(&self) -> bool {
        matches!(self, Priority::High | Priority::Urgent)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::unknown_priority(s))
    }
}

/// Task workflow status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Pending,
    InProgress,
    Waiting,
    Completed,
    Cancelled,
}

impl Status {
    /// All statuses, in sort order.
    pub const ALL: [Status; 5] = [
        Status::Pending,
        Status::InProgress,
        Status::Waiting,
        Status::Completed,
        Status::Cancelled,
    ];

    /// Returns the wire name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::InProgress => "in_progress",
            Status::Waiting => "waiting",
            Status::Completed => "completed",
            Status::Cancelled => "cancelled",
        }
    }

    /// Returns true for completed or cancelled tasks.
    pub fn is_closed(&self) -> bool {
        matches!(self, Status::Completed | Status::Cancelled)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::unknown_status(s))
    }
}

/// Parses a calendar date.
///
/// Accepts `YYYY-MM-DD` as well as RFC 3339 datetimes, which are truncated to
/// the date written in the string (no timezone conversion).
///
/// # Example
///
/// ```
/// use bruh_model_rs::models::parse_calendar_date;
///
/// let plain = parse_calendar_date("2024-06-01").unwrap();
/// let stamped = parse_calendar_date("2024-06-01T23:30:00+02:00").unwrap();
/// assert_eq!(plain, stamped);
/// assert!(parse_calendar_date("June 1st").is_none());
/// ```
pub fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Serde adapter for optional calendar dates that may arrive as datetimes.
pub(crate) mod optional_calendar_date {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => parse_calendar_date(s)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(ModelError::invalid_date(s))),
        }
    }
}
