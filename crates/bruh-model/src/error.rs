//! Error types for task model parsing.

use thiserror::Error;

/// A specialized Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors produced while interpreting task data.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelError {
    /// A priority name did not match any known level.
    #[error("unknown priority: {value} (expected low, normal, high or urgent)")]
    UnknownPriority {
        /// The rejected value.
        value: String,
    },

    /// A status name did not match any known status.
    #[error("unknown status: {value} (expected pending, in_progress, completed, cancelled or waiting)")]
    UnknownStatus {
        /// The rejected value.
        value: String,
    },

    /// A date string could not be parsed.
    #[error("invalid date: {value} (expected YYYY-MM-DD)")]
    InvalidDate {
        /// The rejected value.
        value: String,
    },
}

impl ModelError {
    /// Creates an unknown priority error.
    pub fn unknown_priority(value: impl Into<String>) -> Self {
        ModelError::UnknownPriority {
            value: value.into(),
        }
    }

    /// Creates an unknown status error.
    pub fn unknown_status(value: impl Into<String>) -> Self {
        ModelError::UnknownStatus {
            value: value.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(value: impl Into<String>) -> Self {
        ModelError::InvalidDate {
            value: value.into(),
        }
    }
}
