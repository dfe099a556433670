//! Data types for tasks as consumed by the engine.

mod common;
mod task;

pub use common::*;
pub use task::*;
