//! Focus timer state machine.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{TimerError, TimerResult};

/// Upper bound for [`FocusSettings::sessions_before_long_break`].
pub const MAX_SESSIONS_BEFORE_LONG_BREAK: u32 = 24;

/// Kind of interval the timer is counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusPhase {
    Focus,
    ShortBreak,
    LongBreak,
}

impl FocusPhase {
    /// Returns the phase's name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FocusPhase::Focus => "focus",
            FocusPhase::ShortBreak => "short_break",
            FocusPhase::LongBreak => "long_break",
        }
    }

    /// Returns true for either kind of break.
    pub fn is_break(&self) -> bool {
        !matches!(self, FocusPhase::Focus)
    }
}

impl fmt::Display for FocusPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interval lengths for a focus cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusSettings {
    /// Length of a focus session.
    pub focus_minutes: u32,
    /// Length of the break after most sessions.
    pub short_break_minutes: u32,
    /// Length of the break that ends a cycle.
    pub long_break_minutes: u32,
    /// Focus sessions per cycle; the last one is followed by the long break.
    /// Values outside `1..=MAX_SESSIONS_BEFORE_LONG_BREAK` are clamped.
    pub sessions_before_long_break: u32,
}

impl Default for FocusSettings {
    fn default() -> Self {
        Self {
            focus_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
            sessions_before_long_break: 4,
        }
    }
}

impl FocusSettings {
    /// Returns the length of `phase`.
    pub fn duration_of(&self, phase: FocusPhase) -> Duration {
        let minutes = match phase {
            FocusPhase::Focus => self.focus_minutes,
            FocusPhase::ShortBreak => self.short_break_minutes,
            FocusPhase::LongBreak => self.long_break_minutes,
        };
        Duration::from_secs(u64::from(minutes) * 60)
    }

    fn sessions_per_cycle(&self) -> u32 {
        self.sessions_before_long_break
            .clamp(1, MAX_SESSIONS_BEFORE_LONG_BREAK)
    }
}

/// Current state of a [`FocusTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusState {
    /// Not started.
    Idle,
    /// Counting down.
    Running {
        phase: FocusPhase,
        remaining: Duration,
    },
    /// Stopped mid-phase; elapsed time is ignored until resumed.
    Paused {
        phase: FocusPhase,
        remaining: Duration,
    },
    /// The long break ended; the cycle is over.
    Completed,
}

impl FocusState {
    /// Returns the state's name.
    pub fn name(&self) -> &'static str {
        match self {
            FocusState::Idle => "idle",
            FocusState::Running { .. } => "running",
            FocusState::Paused { .. } => "paused",
            FocusState::Completed => "completed",
        }
    }

    /// Returns the active phase, if any.
    pub fn phase(&self) -> Option<FocusPhase> {
        match self {
            FocusState::Running { phase, .. } | FocusState::Paused { phase, .. } => Some(*phase),
            FocusState::Idle | FocusState::Completed => None,
        }
    }
}

/// One step of a focus cycle, as produced by [`FocusTimer::plan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlannedPhase {
    /// 1-based focus session number this phase belongs to.
    pub session: u32,
    pub phase: FocusPhase,
    #[serde(rename = "minutes", serialize_with = "serialize_minutes")]
    pub duration: Duration,
}

fn serialize_minutes<S: serde::Serializer>(duration: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(duration.as_secs() / 60)
}

/// Focus/break state machine driven by caller-reported elapsed time.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use bruh_engine_rs::focus::{FocusPhase, FocusSettings, FocusState, FocusTimer};
///
/// let mut timer = FocusTimer::new(FocusSettings::default());
/// timer.start().unwrap();
///
/// let finished = timer.tick(Duration::from_secs(26 * 60));
/// assert_eq!(finished, vec![FocusPhase::Focus]);
/// assert_eq!(
///     timer.state(),
///     FocusState::Running {
///         phase: FocusPhase::ShortBreak,
///         remaining: Duration::from_secs(4 * 60),
///     }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTimer {
    settings: FocusSettings,
    state: FocusState,
    completed_sessions: u32,
}

impl FocusTimer {
    /// Creates an idle timer.
    pub fn new(settings: FocusSettings) -> Self {
        Self {
            settings,
            state: FocusState::Idle,
            completed_sessions: 0,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> FocusState {
        self.state
    }

    /// Returns the timer's settings.
    pub fn settings(&self) -> &FocusSettings {
        &self.settings
    }

    /// Number of focus sessions finished in the current cycle.
    pub fn completed_sessions(&self) -> u32 {
        self.completed_sessions
    }

    /// Starts the first focus session. Also restarts a completed cycle.
    pub fn start(&mut self) -> TimerResult<()> {
        match self.state {
            FocusState::Idle | FocusState::Completed => {
                self.completed_sessions = 0;
                self.enter(FocusPhase::Focus);
                Ok(())
            }
            state => Err(TimerError::invalid_transition(state.name(), "start")),
        }
    }

    /// Pauses the running phase.
    pub fn pause(&mut self) -> TimerResult<()> {
        match self.state {
            FocusState::Running { phase, remaining } => {
                self.state = FocusState::Paused { phase, remaining };
                Ok(())
            }
            state => Err(TimerError::invalid_transition(state.name(), "pause")),
        }
    }

    /// Resumes a paused phase.
    pub fn resume(&mut self) -> TimerResult<()> {
        match self.state {
            FocusState::Paused { phase, remaining } => {
                self.state = FocusState::Running { phase, remaining };
                Ok(())
            }
            state => Err(TimerError::invalid_transition(state.name(), "resume")),
        }
    }

    /// Ends the current phase immediately and moves to the next one.
    ///
    /// Skipping from a paused state leaves the next phase running.
    pub fn skip(&mut self) -> TimerResult<FocusPhase> {
        match self.state {
            FocusState::Running { phase, .. } | FocusState::Paused { phase, .. } => {
                self.finish(phase);
                Ok(phase)
            }
            state => Err(TimerError::invalid_transition(state.name(), "skip")),
        }
    }

    /// Returns to idle and forgets finished sessions.
    pub fn reset(&mut self) {
        self.state = FocusState::Idle;
        self.completed_sessions = 0;
    }

    /// Advances a running timer by `elapsed`.
    ///
    /// Time left over when a phase ends carries into the next phase, so one
    /// large tick may finish several phases. Returns the phases that finished,
    /// in order. Ticks outside the running state are ignored.
    pub fn tick(&mut self, elapsed: Duration) -> Vec<FocusPhase> {
        let mut finished = Vec::new();
        let mut left = elapsed;

        while let FocusState::Running { phase, remaining } = self.state {
            if left < remaining {
                self.state = FocusState::Running {
                    phase,
                    remaining: remaining - left,
                };
                break;
            }
            left -= remaining;
            self.finish(phase);
            finished.push(phase);
        }

        finished
    }

    /// Lists the phases of one full cycle.
    pub fn plan(settings: FocusSettings) -> Vec<PlannedPhase> {
        let mut timer = FocusTimer::new(settings);
        let mut plan = Vec::new();
        if timer.start().is_err() {
            return plan;
        }

        while let FocusState::Running { phase, remaining } = timer.state {
            let session = match phase {
                FocusPhase::Focus => timer.completed_sessions + 1,
                _ => timer.completed_sessions,
            };
            plan.push(PlannedPhase {
                session,
                phase,
                duration: remaining,
            });
            timer.finish(phase);
        }
        plan
    }

    fn enter(&mut self, phase: FocusPhase) {
        debug!(%phase, sessions = self.completed_sessions, "focus phase started");
        self.state = FocusState::Running {
            phase,
            remaining: self.settings.duration_of(phase),
        };
    }

    fn finish(&mut self, phase: FocusPhase) {
        match phase {
            FocusPhase::Focus => {
                self.completed_sessions += 1;
                if self.completed_sessions >= self.settings.sessions_per_cycle() {
                    self.enter(FocusPhase::LongBreak);
                } else {
                    self.enter(FocusPhase::ShortBreak);
                }
            }
            FocusPhase::ShortBreak => self.enter(FocusPhase::Focus),
            FocusPhase::LongBreak => {
                debug!(sessions = self.completed_sessions, "focus cycle completed");
                self.state = FocusState::Completed;
            }
        }
    }
}
