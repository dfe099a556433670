//! Eisenhower matrix classification.
//!
//! Each task lands in exactly one of four quadrants based on whether it is
//! important (high or urgent priority) and whether it is urgent (due soon, or
//! explicitly marked urgent).
//!
//! # Example
//!
//! ```
//! use bruh_engine_rs::matrix::{classify, Quadrant};
//! use bruh_model_rs::models::{Priority, Task};
//! use chrono::{NaiveDate, TimeZone, Utc};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let mut task = Task::new("t1", Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap());
//! task.priority = Priority::High;
//!
//! task.due_date = NaiveDate::from_ymd_opt(2024, 6, 5);
//! assert_eq!(classify(&task, today), Quadrant::Schedule);
//!
//! task.due_date = NaiveDate::from_ymd_opt(2024, 6, 4);
//! assert_eq!(classify(&task, today), Quadrant::Do);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use bruh_model_rs::models::{Priority, Task};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::filter::nulls_last;

/// Default number of days ahead that still counts as urgent.
pub const DEFAULT_URGENT_WINDOW_DAYS: u32 = 3;

/// A prioritization bucket.
///
/// Declaration order is the display order of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quadrant {
    /// Urgent and important.
    Do,
    /// Important, not urgent.
    Schedule,
    /// Urgent, not important.
    Delegate,
    /// Neither urgent nor important.
    Eliminate,
}

impl Quadrant {
    /// All quadrants in board order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::Do,
        Quadrant::Schedule,
        Quadrant::Delegate,
        Quadrant::Eliminate,
    ];

    /// Picks the quadrant for an urgency/importance pair.
    pub fn from_flags(urgent: bool, important: bool) -> Self {
        match (urgent, important) {
            (true, true) => Quadrant::Do,
            (false, true) => Quadrant::Schedule,
            (true, false) => Quadrant::Delegate,
            (false, false) => Quadrant::Eliminate,
        }
    }

    /// Returns the quadrant's name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Quadrant::Do => "do",
            Quadrant::Schedule => "schedule",
            Quadrant::Delegate => "delegate",
            Quadrant::Eliminate => "eliminate",
        }
    }

    /// Returns a short human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            Quadrant::Do => "Urgent & important",
            Quadrant::Schedule => "Important, not urgent",
            Quadrant::Delegate => "Urgent, not important",
            Quadrant::Eliminate => "Neither urgent nor important",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tuning for [`TaskClassifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierOptions {
    /// Tasks due within this many days after today are urgent.
    pub urgent_window_days: u32,
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            urgent_window_days: DEFAULT_URGENT_WINDOW_DAYS,
        }
    }
}

/// Assigns tasks to Eisenhower quadrants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskClassifier {
    options: ClassifierOptions,
}

impl TaskClassifier {
    /// Creates a classifier with the given options.
    pub fn new(options: ClassifierOptions) -> Self {
        Self { options }
    }

    /// Returns the classifier's options.
    pub fn options(&self) -> ClassifierOptions {
        self.options
    }

    /// Returns true if the task is urgent relative to `today`.
    ///
    /// A task is urgent when its priority is `urgent`, or when it is due on or
    /// before the last day of the urgency window (this includes overdue tasks).
    pub fn is_urgent(&self, task: &Task, today: NaiveDate) -> bool {
        if task.priority == Priority::Urgent {
            return true;
        }
        // A window past the end of the calendar covers every dated task.
        let horizon =
            today.checked_add_days(Days::new(u64::from(self.options.urgent_window_days)));
        task.due_date
            .is_some_and(|due| horizon.map_or(true, |horizon| due <= horizon))
    }

    /// Classifies a single task.
    pub fn classify(&self, task: &Task, today: NaiveDate) -> Quadrant {
        Quadrant::from_flags(self.is_urgent(task, today), task.priority.is_important())
    }

    /// Groups tasks by quadrant.
    ///
    /// Every quadrant is present in the result, possibly empty. Within a
    /// quadrant, tasks are ordered by due date with undated tasks last; ties
    /// keep their input order.
    pub fn classify_all<'t>(
        &self,
        tasks: &'t [Task],
        today: NaiveDate,
    ) -> BTreeMap<Quadrant, Vec<&'t Task>> {
        let mut board: BTreeMap<Quadrant, Vec<&Task>> =
            Quadrant::ALL.into_iter().map(|q| (q, Vec::new())).collect();

        for task in tasks {
            board.entry(self.classify(task, today)).or_default().push(task);
        }

        for bucket in board.values_mut() {
            bucket.sort_by(|a, b| nulls_last(a.due_date, b.due_date));
        }

        trace!(
            total = tasks.len(),
            window = self.options.urgent_window_days,
            "classified tasks"
        );
        board
    }
}

/// Classifies a task with the default three-day urgency window.
pub fn classify(task: &Task, today: NaiveDate) -> Quadrant {
    TaskClassifier::default().classify(task, today)
}

/// Groups tasks by quadrant with the default three-day urgency window.
pub fn classify_all(tasks: &[Task], today: NaiveDate) -> BTreeMap<Quadrant, Vec<&Task>> {
    TaskClassifier::default().classify_all(tasks, today)
}

#[cfg(test)]
mod tests;
