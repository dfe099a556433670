//! Focus session timer.
//!
//! A small explicit state machine for work/break intervals:
//!
//! ```text
//! Idle --start--> Running(Focus) --tick/skip--> Running(ShortBreak) --> Running(Focus) ...
//!                    |    ^                               ... --> Running(LongBreak) --> Completed
//!                  pause resume
//!                    v    |
//!                   Paused
//! ```
//!
//! The timer never reads a clock. Callers report elapsed time through
//! [`FocusTimer::tick`], which keeps the machine deterministic.

mod error;
mod timer;

pub use error::{TimerError, TimerResult};
pub use timer::{
    FocusPhase, FocusSettings, FocusState, FocusTimer, PlannedPhase,
    MAX_SESSIONS_BEFORE_LONG_BREAK,
};
