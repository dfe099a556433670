//! Persisted smart filter configuration.
//!
//! These types mirror the JSON stored by the application verbatim: field and
//! operator names stay as strings so a saved filter round-trips losslessly,
//! even when it is invalid. Validation happens when the configuration is
//! compiled into a [`FilterEngine`](super::FilterEngine).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How the results of multiple conditions are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Logic {
    /// Every condition must hold.
    #[default]
    And,
    /// At least one condition must hold.
    Or,
}

impl Logic {
    /// Returns the persisted name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Logic::And => "and",
            Logic::Or => "or",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Returns the persisted name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Requested ordering of filter results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Field name to sort by.
    pub field: String,

    /// Sort direction (defaults to ascending).
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    /// Creates a sort specification.
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }
}

/// A single `field operator value` rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCondition {
    /// Field name, e.g. `priority` or `due_date`.
    pub field: String,

    /// Operator name, e.g. `eq` or `is_null`.
    pub operator: String,

    /// Comparison value: a scalar, an array for `in`, or null.
    #[serde(default)]
    pub value: Value,
}

impl FilterCondition {
    /// Creates a condition.
    ///
    /// # Example
    ///
    /// ```
    /// use bruh_engine_rs::filter::FilterCondition;
    ///
    /// let condition = FilterCondition::new("priority", "eq", "high");
    /// assert_eq!(condition.value, serde_json::json!("high"));
    /// ```
    pub fn new(field: impl Into<String>, operator: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }
}

/// A user-authored filter: conditions, combination logic and optional sort.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SmartFilterConfig {
    /// Conditions to evaluate. An empty list matches every task.
    #[serde(default)]
    pub conditions: Vec<FilterCondition>,

    /// How conditions are combined.
    #[serde(default)]
    pub logic: Logic,

    /// Result ordering; `created_at` descending when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortSpec>,
}

impl SmartFilterConfig {
    /// Creates a configuration from conditions and logic, without a sort.
    pub fn new(conditions: Vec<FilterCondition>, logic: Logic) -> Self {
        Self {
            conditions,
            logic,
            sort: None,
        }
    }

    /// Sets the sort specification.
    pub fn sorted_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some(SortSpec::new(field, direction));
        self
    }
}
