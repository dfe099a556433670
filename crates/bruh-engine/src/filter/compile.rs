//! Validation of saved conditions into typed predicates.

use std::cmp::Ordering;

use bruh_model_rs::models::{parse_calendar_date, Priority, Status};
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value as Json;
use strsim::levenshtein;

use super::config::FilterCondition;
use super::error::{FilterError, FilterResult};
use super::field::{Field, FieldKind, Operator};
use crate::dates::{DateResolver, DateToken};

/// Maximum edit distance for "did you mean" field suggestions.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// A date operand as written in the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DateOperand {
    Fixed(NaiveDate),
    Token(DateToken),
}

/// A validated comparison value.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Scalar {
    Priority(Priority),
    Status(Status),
    Date(DateOperand),
    Number(f64),
    Bool(bool),
    Text(String),
}

impl Scalar {
    /// Resolves date tokens against `today`.
    pub(crate) fn resolve(&self, resolver: &DateResolver, today: NaiveDate) -> Value<'_> {
        match self {
            Scalar::Priority(p) => Value::Priority(*p),
            Scalar::Status(s) => Value::Status(*s),
            Scalar::Date(DateOperand::Fixed(date)) => Value::Date(*date),
            Scalar::Date(DateOperand::Token(token)) => Value::Date(resolver.resolve(*token, today)),
            Scalar::Number(n) => Value::Number(*n),
            Scalar::Bool(b) => Value::Bool(*b),
            Scalar::Text(s) => Value::Text(s),
        }
    }
}

/// A concrete value, either read from a task or resolved from an operand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Value<'a> {
    Priority(Priority),
    Status(Status),
    Date(NaiveDate),
    Number(f64),
    Bool(bool),
    Text(&'a str),
}

impl Value<'_> {
    /// Compares two values of the same type; mixed types are unordered.
    pub(crate) fn compare(&self, other: &Value<'_>) -> Option<Ordering> {
        match (self, other) {
            (Value::Priority(a), Value::Priority(b)) => Some(a.cmp(b)),
            (Value::Status(a), Value::Status(b)) => Some(a.cmp(b)),
            (Value::Date(a), Value::Date(b)) => Some(a.cmp(b)),
            (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

/// The right-hand side of a predicate.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Operand {
    /// Presence tests carry no value.
    Ignored,
    /// An explicit `null` for `eq`/`neq`.
    Null,
    One(Scalar),
    Set(Vec<Scalar>),
}

/// A validated condition.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Predicate {
    pub(crate) field: Field,
    pub(crate) operator: Operator,
    pub(crate) operand: Operand,
}

/// Parses a field name, suggesting the closest known name on failure.
pub(crate) fn parse_field(name: &str) -> FilterResult<Field> {
    name.parse::<Field>().map_err(|()| {
        let suggestion = find_similar_field(name);
        FilterError::invalid_field(name, suggestion)
    })
}

fn find_similar_field(query: &str) -> Option<String> {
    let query_lower = query.to_lowercase();

    let (best_match, best_distance) = Field::ALL
        .iter()
        .map(|field| (field.as_str(), levenshtein(&query_lower, field.as_str())))
        .min_by_key(|(_, d)| *d)?;

    if best_distance <= MAX_SUGGESTION_DISTANCE {
        Some(best_match.to_string())
    } else {
        None
    }
}

/// Validates a condition against the field schema.
pub(crate) fn compile_condition(condition: &FilterCondition) -> FilterResult<Predicate> {
    let field = parse_field(&condition.field)?;

    let operator = condition
        .operator
        .parse::<Operator>()
        .ok()
        .filter(|op| field.kind().supports(*op))
        .ok_or_else(|| FilterError::invalid_operator(&condition.field, &condition.operator))?;

    let value = &condition.value;
    let operand = match operator {
        Operator::IsNull | Operator::IsNotNull => Operand::Ignored,
        Operator::In => {
            let Json::Array(items) = value else {
                return Err(FilterError::invalid_value(
                    field.as_str(),
                    value,
                    "'in' expects an array of values",
                ));
            };
            let set = items
                .iter()
                .map(|item| compile_scalar(field, item))
                .collect::<FilterResult<Vec<_>>>()?;
            Operand::Set(set)
        }
        Operator::Eq | Operator::Neq if value.is_null() => Operand::Null,
        _ if value.is_null() => {
            return Err(FilterError::invalid_value(
                field.as_str(),
                value,
                format!("'{operator}' needs a value to compare against"),
            ));
        }
        _ => Operand::One(compile_scalar(field, value)?),
    };

    Ok(Predicate {
        field,
        operator,
        operand,
    })
}

/// Parses a literal date for `field`.
///
/// `created_at` is compared by its UTC day, so timestamps with an offset are
/// shifted to UTC first. Other date fields keep the day as written.
fn date_literal(field: Field, s: &str) -> Option<NaiveDate> {
    if field == Field::CreatedAt {
        if let Ok(stamp) = DateTime::parse_from_rfc3339(s.trim()) {
            return Some(stamp.with_timezone(&Utc).date_naive());
        }
    }
    parse_calendar_date(s)
}

fn compile_scalar(field: Field, value: &Json) -> FilterResult<Scalar> {
    let reject = |reason: &str| FilterError::invalid_value(field.as_str(), value, reason);

    match (field, field.kind()) {
        (Field::Priority, _) => value
            .as_str()
            .and_then(|s| s.parse::<Priority>().ok())
            .map(Scalar::Priority)
            .ok_or_else(|| reject("expected one of low, normal, high, urgent")),
        (Field::Status, _) => value
            .as_str()
            .and_then(|s| s.parse::<Status>().ok())
            .map(Scalar::Status)
            .ok_or_else(|| {
                reject("expected one of pending, in_progress, completed, cancelled, waiting")
            }),
        (_, FieldKind::Date) => {
            let s = value
                .as_str()
                .ok_or_else(|| reject("expected a date string or date token"))?;
            if let Ok(token) = s.parse::<DateToken>() {
                Ok(Scalar::Date(DateOperand::Token(token)))
            } else {
                date_literal(field, s)
                    .map(|date| Scalar::Date(DateOperand::Fixed(date)))
                    .ok_or_else(|| {
                        reject("expected YYYY-MM-DD or one of today, tomorrow, yesterday, end_of_week, end_of_month")
                    })
            }
        }
        (_, FieldKind::Number) => value
            .as_f64()
            .map(Scalar::Number)
            .ok_or_else(|| reject("expected a number")),
        (_, FieldKind::Boolean) => match value {
            Json::Bool(b) => Ok(Scalar::Bool(*b)),
            Json::String(s) if s.eq_ignore_ascii_case("true") => Ok(Scalar::Bool(true)),
            Json::String(s) if s.eq_ignore_ascii_case("false") => Ok(Scalar::Bool(false)),
            _ => Err(reject("expected true or false")),
        },
        (_, FieldKind::List) => value
            .as_str()
            .map(|s| Scalar::Text(s.to_string()))
            .ok_or_else(|| reject("expected a list id")),
        (_, FieldKind::Select) => Err(reject("unsupported select field")),
    }
}
