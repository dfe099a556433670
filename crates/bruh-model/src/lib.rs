//! Task record types for the Bruh prioritization engine.
//!
//! Tasks are owned by the persistence layer; this crate only describes the
//! shape in which they are handed to the engine, plus their JSON encoding.
//!
//! # Quick Start
//!
//! ```
//! use bruh_model_rs::prelude::*;
//!
//! let task: Task = serde_json::from_str(
//!     r#"{"id": "t1", "priority": "high", "due_date": "2024-06-03", "created_at": "2024-05-01T09:00:00Z"}"#,
//! )
//! .unwrap();
//! assert_eq!(task.priority, Priority::High);
//! assert_eq!(task.status, Status::Pending);
//! ```

pub mod error;
pub mod models;
pub mod prelude;
