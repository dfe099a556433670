//! Error types for the focus timer.

use thiserror::Error;

/// A specialized Result type for timer operations.
pub type TimerResult<T> = Result<T, TimerError>;

/// Errors returned by [`FocusTimer`](super::FocusTimer) transitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TimerError {
    /// The event is not allowed in the timer's current state.
    #[error("cannot {event} while {state}")]
    InvalidTransition {
        /// Name of the current state.
        state: &'static str,
        /// Name of the rejected event.
        event: &'static str,
    },
}

impl TimerError {
    /// Creates an invalid transition error.
    pub fn invalid_transition(state: &'static str, event: &'static str) -> Self {
        TimerError::InvalidTransition { state, event }
    }
}
