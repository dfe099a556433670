//! Output formatting utilities for the bruh CLI.
//!
//! This module provides functions for formatting data as tables or JSON.
//! It is organized into submodules by view:
//!
//! - [`tasks`] - Filtered task lists
//! - [`matrix`] - Eisenhower quadrant boards
//! - [`focus`] - Focus cycle plans
//! - [`helpers`] - Common formatting utilities (truncation, priority, due dates)

mod focus;
pub mod helpers;
mod matrix;
mod tasks;

pub use focus::{format_plan_json, format_plan_table};
pub use matrix::{format_board_json, format_board_table};
pub use tasks::{format_tasks_json, format_tasks_table};
