//! Convenient re-exports of the most commonly used types.
//!
//! ```
//! use bruh_model_rs::prelude::*;
//! ```

pub use crate::error::{ModelError, Result};
pub use crate::models::{parse_calendar_date, Priority, Status, Task};
