//! Smart filter evaluation.
//!
//! A smart filter is a saved list of `field operator value` conditions,
//! combined with `and`/`or` logic and an optional sort. This module validates
//! saved filters and evaluates them against in-memory tasks.
//!
//! # Fields
//!
//! | Field | Type |
//! |-------|------|
//! | `priority`, `status` | select |
//! | `due_date`, `start_date`, `created_at` | date |
//! | `estimated_minutes` | number |
//! | `list_id` | list |
//! | `has_subtasks`, `is_recurring` | boolean |
//!
//! # Operators
//!
//! - `eq`, `neq` - equality (dates compare by calendar day)
//! - `lt`, `lte`, `gt`, `gte` - ordering, date and number fields only
//! - `in` - membership in an array of values
//! - `is_null`, `is_not_null` - presence, the value is ignored
//!
//! Date values may be `YYYY-MM-DD` or one of the tokens `today`, `tomorrow`,
//! `yesterday`, `end_of_week`, `end_of_month`, resolved at evaluation time.
//!
//! # Example
//!
//! ```
//! use bruh_engine_rs::filter::{self, SmartFilterConfig};
//! use bruh_model_rs::models::Task;
//! use chrono::{NaiveDate, TimeZone, Utc};
//!
//! let config: SmartFilterConfig = serde_json::from_str(
//!     r#"{"conditions": [{"field": "priority", "operator": "eq", "value": "low"}], "logic": "and"}"#,
//! )
//! .unwrap();
//!
//! let mut task = Task::new("t1", Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap());
//! task.priority = "low".parse().unwrap();
//! let tasks = vec![task];
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let results = filter::evaluate(&tasks, &config, today).unwrap();
//! assert_eq!(results.len(), 1);
//! ```

mod compile;
mod config;
mod error;
mod evaluator;
mod field;

pub use config::{FilterCondition, Logic, SmartFilterConfig, SortDirection, SortSpec};
pub use error::{FilterError, FilterResult};
pub use evaluator::{evaluate, evaluate_condition, FilterEngine, SortOrder};
pub use field::{Field, FieldKind, Operator};

pub(crate) use evaluator::nulls_last;
