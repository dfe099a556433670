//! Evaluation of compiled smart filters against tasks.
//!
//! # Example
//!
//! ```
//! use bruh_engine_rs::filter::{FilterCondition, FilterEngine, Logic, SmartFilterConfig};
//! use bruh_model_rs::models::{Priority, Task};
//! use chrono::{NaiveDate, TimeZone, Utc};
//!
//! let config = SmartFilterConfig::new(
//!     vec![FilterCondition::new("due_date", "lte", "end_of_week")],
//!     Logic::And,
//! );
//! let engine = FilterEngine::compile(&config).unwrap();
//!
//! let mut task = Task::new("t1", Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap());
//! task.priority = Priority::High;
//! task.due_date = NaiveDate::from_ymd_opt(2024, 6, 7);
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
//! assert!(engine.matches(&task, today));
//! assert_eq!(engine.evaluate(std::slice::from_ref(&task), today).len(), 1);
//! ```

use std::cmp::Ordering;

use bruh_model_rs::models::Task;
use chrono::NaiveDate;
use tracing::{debug, trace};

use super::compile::{compile_condition, parse_field, Operand, Predicate, Value};
use super::config::{FilterCondition, Logic, SmartFilterConfig, SortDirection};
use super::error::FilterResult;
use super::field::{Field, Operator};
use crate::dates::DateResolver;

/// Ordering applied to filter results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    /// Field to sort by.
    pub field: Field,
    /// Sort direction.
    pub direction: SortDirection,
}

impl Default for SortOrder {
    /// Newest tasks first.
    fn default() -> Self {
        Self {
            field: Field::CreatedAt,
            direction: SortDirection::Desc,
        }
    }
}

/// A validated smart filter, ready to evaluate against tasks.
///
/// Compiling checks every field, operator and value up front, so evaluation
/// itself cannot fail. Date tokens are resolved on every call against the
/// `today` the caller passes in.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterEngine {
    predicates: Vec<Predicate>,
    logic: Logic,
    sort: SortOrder,
    resolver: DateResolver,
}

impl FilterEngine {
    /// Validates a saved configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError`](super::FilterError) when a condition references
    /// an unknown field, uses an operator the field's type does not support,
    /// or carries a value of the wrong shape, and when the sort field is unknown.
    pub fn compile(config: &SmartFilterConfig) -> FilterResult<Self> {
        let predicates = config
            .conditions
            .iter()
            .map(compile_condition)
            .collect::<FilterResult<Vec<_>>>()?;

        let sort = match &config.sort {
            Some(spec) => SortOrder {
                field: parse_field(&spec.field)?,
                direction: spec.direction,
            },
            None => SortOrder::default(),
        };

        debug!(
            conditions = predicates.len(),
            logic = ?config.logic,
            sort_field = %sort.field,
            "compiled smart filter"
        );

        Ok(Self {
            predicates,
            logic: config.logic,
            sort,
            resolver: DateResolver::default(),
        })
    }

    /// Uses `resolver` for date tokens instead of the Monday-based default.
    pub fn with_resolver(mut self, resolver: DateResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Returns the ordering applied by [`evaluate`](Self::evaluate).
    pub fn sort_order(&self) -> SortOrder {
        self.sort
    }

    /// Returns true if the task satisfies the filter's conditions.
    ///
    /// An empty condition list matches every task under both `and` and `or`.
    pub fn matches(&self, task: &Task, today: NaiveDate) -> bool {
        if self.predicates.is_empty() {
            return true;
        }

        let mut results = self
            .predicates
            .iter()
            .map(|p| self.test(p, task, today));

        match self.logic {
            Logic::And => results.all(|hit| hit),
            Logic::Or => results.any(|hit| hit),
        }
    }

    /// Returns the matching tasks in the configured order.
    pub fn evaluate<'t>(&self, tasks: &'t [Task], today: NaiveDate) -> Vec<&'t Task> {
        let mut matched: Vec<&Task> = tasks
            .iter()
            .filter(|task| self.matches(task, today))
            .collect();
        self.sort_tasks(&mut matched);

        trace!(
            total = tasks.len(),
            matched = matched.len(),
            %today,
            "evaluated smart filter"
        );
        matched
    }

    /// Stable-sorts tasks by the configured field.
    ///
    /// Missing values sort last when ascending and first when descending.
    pub fn sort_tasks(&self, tasks: &mut [&Task]) {
        let SortOrder { field, direction } = self.sort;
        tasks.sort_by(|a, b| {
            let ordering = compare_by_field(a, b, field);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    fn test(&self, predicate: &Predicate, task: &Task, today: NaiveDate) -> bool {
        let actual = field_value(task, predicate.field);

        match predicate.operator {
            Operator::IsNull => actual.is_none(),
            Operator::IsNotNull => actual.is_some(),
            Operator::Eq => self.is_equal(actual, &predicate.operand, today),
            Operator::Neq => !self.is_equal(actual, &predicate.operand, today),
            Operator::In => {
                let (Some(actual), Operand::Set(candidates)) = (actual, &predicate.operand) else {
                    return false;
                };
                candidates.iter().any(|candidate| {
                    actual.compare(&candidate.resolve(&self.resolver, today)) == Some(Ordering::Equal)
                })
            }
            Operator::Lt | Operator::Lte | Operator::Gt | Operator::Gte => {
                let (Some(actual), Operand::One(target)) = (actual, &predicate.operand) else {
                    return false;
                };
                let Some(ordering) = actual.compare(&target.resolve(&self.resolver, today)) else {
                    return false;
                };
                match predicate.operator {
                    Operator::Lt => ordering == Ordering::Less,
                    Operator::Lte => ordering != Ordering::Greater,
                    Operator::Gt => ordering == Ordering::Greater,
                    _ => ordering != Ordering::Less,
                }
            }
        }
    }

    fn is_equal(&self, actual: Option<Value<'_>>, operand: &Operand, today: NaiveDate) -> bool {
        match (actual, operand) {
            (actual, Operand::Null) => actual.is_none(),
            (Some(actual), Operand::One(target)) => {
                actual.compare(&target.resolve(&self.resolver, today)) == Some(Ordering::Equal)
            }
            _ => false,
        }
    }
}

/// Reads a field from a task; `None` means the task has no value.
fn field_value(task: &Task, field: Field) -> Option<Value<'_>> {
    match field {
        Field::Priority => Some(Value::Priority(task.priority)),
        Field::Status => Some(Value::Status(task.status)),
        Field::DueDate => task.due_date.map(Value::Date),
        Field::StartDate => task.start_date.map(Value::Date),
        Field::CreatedAt => Some(Value::Date(task.created_at.date_naive())),
        Field::EstimatedMinutes => task.estimated_minutes.map(|m| Value::Number(f64::from(m))),
        Field::ListId => task.list_id.as_deref().map(Value::Text),
        Field::HasSubtasks => Some(Value::Bool(task.has_subtasks)),
        Field::IsRecurring => Some(Value::Bool(task.is_recurring)),
    }
}

/// Ascending comparison with missing values after present ones.
fn compare_by_field(a: &Task, b: &Task, field: Field) -> Ordering {
    match field {
        Field::Priority => a.priority.cmp(&b.priority),
        Field::Status => a.status.cmp(&b.status),
        Field::DueDate => nulls_last(a.due_date, b.due_date),
        Field::StartDate => nulls_last(a.start_date, b.start_date),
        Field::CreatedAt => a.created_at.cmp(&b.created_at),
        Field::EstimatedMinutes => nulls_last(a.estimated_minutes, b.estimated_minutes),
        Field::ListId => nulls_last(a.list_id.as_deref(), b.list_id.as_deref()),
        Field::HasSubtasks => a.has_subtasks.cmp(&b.has_subtasks),
        Field::IsRecurring => a.is_recurring.cmp(&b.is_recurring),
    }
}

pub(crate) fn nulls_last<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Compiles `config` and evaluates it against `tasks`.
///
/// # Errors
///
/// Returns the configuration error found by [`FilterEngine::compile`].
pub fn evaluate<'t>(
    tasks: &'t [Task],
    config: &SmartFilterConfig,
    today: NaiveDate,
) -> FilterResult<Vec<&'t Task>> {
    Ok(FilterEngine::compile(config)?.evaluate(tasks, today))
}

/// Evaluates a single condition against a task.
///
/// # Errors
///
/// Returns an error if the condition is invalid, even when the task's value
/// would make the outcome obvious.
pub fn evaluate_condition(
    task: &Task,
    condition: &FilterCondition,
    today: NaiveDate,
) -> FilterResult<bool> {
    let config = SmartFilterConfig::new(vec![condition.clone()], Logic::And);
    Ok(FilterEngine::compile(&config)?.matches(task, today))
}
