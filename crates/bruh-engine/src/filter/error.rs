//! Error types for smart filter configuration.

use thiserror::Error;

/// A specialized Result type for filter operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Configuration errors detected while compiling a saved filter.
///
/// All of these mean the filter itself is invalid; none are caused by the
/// task data being evaluated.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    /// A condition or sort references a field that does not exist.
    #[error("unknown filter field: {field}{}", did_you_mean(.suggestion))]
    InvalidField {
        /// The unrecognized field name.
        field: String,
        /// The closest known field name, if any is close enough.
        suggestion: Option<String>,
    },

    /// An operator is unknown or does not apply to the field's type.
    #[error("operator '{operator}' cannot be used with field '{field}'")]
    InvalidOperator {
        /// The field the condition references.
        field: String,
        /// The rejected operator.
        operator: String,
    },

    /// The comparison value does not fit the field or operator.
    #[error("invalid value {value} for field '{field}': {reason}")]
    InvalidValue {
        /// The field the condition references.
        field: String,
        /// The rejected value, as JSON.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|s| format!(" (did you mean '{s}'?)"))
        .unwrap_or_default()
}

impl FilterError {
    /// Creates an invalid field error.
    pub fn invalid_field(field: impl Into<String>, suggestion: Option<String>) -> Self {
        FilterError::InvalidField {
            field: field.into(),
            suggestion,
        }
    }

    /// Creates an invalid operator error.
    pub fn invalid_operator(field: impl Into<String>, operator: impl Into<String>) -> Self {
        FilterError::InvalidOperator {
            field: field.into(),
            operator: operator.into(),
        }
    }

    /// Creates an invalid value error.
    pub fn invalid_value(
        field: impl Into<String>,
        value: &serde_json::Value,
        reason: impl Into<String>,
    ) -> Self {
        FilterError::InvalidValue {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
