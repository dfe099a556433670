//! Task prioritization engine for Bruh.
//!
//! - [`filter`] evaluates saved smart filters (conditions, and/or logic, sort).
//! - [`matrix`] sorts tasks into Eisenhower quadrants.
//! - [`dates`] resolves symbolic dates such as `today` or `end_of_week`.
//! - [`focus`] drives focus sessions and breaks.
//!
//! Every function here is pure: the reference date is always an argument and
//! task records are only borrowed.

pub mod dates;
pub mod filter;
pub mod focus;
pub mod matrix;

pub use filter::{FilterEngine, FilterError, SmartFilterConfig};
pub use matrix::{Quadrant, TaskClassifier};
